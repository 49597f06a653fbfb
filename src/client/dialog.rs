// src/client/dialog.rs

use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::{
    client::{
        api::{ProductSelections, SelectOption, StoreApi},
        form::{EditTarget, ProductForm},
    },
    common::i18n::I18nStore,
    models::product::SaveMode,
};

/// Comandos que a tela envia ao diálogo.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogCommand {
    OpenForCreate { store: Uuid },
    OpenForEdit(EditTarget),
    Close,
}

/// Avisos emitidos para a tela que contém o diálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Refresh,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Saved,
    Invalid(ValidationErrors),
    Failed(String),
    NotOpen,
}

/// Buscas pendentes de uma sessão do diálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPlan {
    session: u64,
    store: Uuid,
    references: bool,
    product: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    session: u64,
    store: Uuid,
    references: Option<(Vec<SelectOption>, Vec<SelectOption>)>,
    // `Some(None)`: a busca do detalhe falhou.
    product: Option<Option<ProductSelections>>,
}

pub struct ProductDialog<A> {
    api: A,
    events: UnboundedSender<DialogEvent>,
    i18n: I18nStore,
    lang: String,

    open: bool,
    mode: SaveMode,
    session: u64,
    form: ProductForm,
    error: Option<String>,

    categories: Vec<SelectOption>,
    tags: Vec<SelectOption>,
    references_store: Option<Uuid>,
    loading_references: bool,
    loaded_product_initial_data: bool,
}

impl<A: StoreApi> ProductDialog<A> {
    pub fn new(api: A, events: UnboundedSender<DialogEvent>, lang: impl Into<String>) -> Self {
        Self {
            api,
            events,
            i18n: I18nStore::new("pt"),
            lang: lang.into(),
            open: false,
            mode: SaveMode::Create,
            session: 0,
            form: ProductForm::default(),
            error: None,
            categories: Vec::new(),
            tags: Vec::new(),
            references_store: None,
            loading_references: false,
            loaded_product_initial_data: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> SaveMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.open
            && (self.loading_references || (self.mode == SaveMode::Update && !self.loaded_product_initial_data))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn categories(&self) -> &[SelectOption] {
        &self.categories
    }

    pub fn tags(&self) -> &[SelectOption] {
        &self.tags
    }

    /// Aplica o comando e devolve as buscas que ele exige, se houver.
    pub fn handle(&mut self, command: DialogCommand) -> Option<LoadPlan> {
        match command {
            DialogCommand::OpenForCreate { store } => {
                self.begin_session(SaveMode::Create, ProductForm::for_create(store));
                self.loaded_product_initial_data = true;
                self.plan(store, None)
            }
            DialogCommand::OpenForEdit(target) => {
                self.begin_session(SaveMode::Update, ProductForm::for_edit(&target));
                self.loaded_product_initial_data = false;
                self.plan(target.store, Some(target.id))
            }
            DialogCommand::Close => {
                self.close();
                None
            }
        }
    }

    // Reabrir sempre começa um formulário novo.
    fn begin_session(&mut self, mode: SaveMode, form: ProductForm) {
        self.session += 1;
        self.open = true;
        self.mode = mode;
        self.form = form;
        self.error = None;
    }

    fn plan(&mut self, store: Uuid, product: Option<Uuid>) -> Option<LoadPlan> {
        if self.references_store != Some(store) {
            self.categories.clear();
            self.tags.clear();
            self.references_store = None;
        }
        let references = self.references_store.is_none();
        self.loading_references = references;

        let product = product.filter(|_| !self.loaded_product_initial_data);
        if !references && product.is_none() {
            return None;
        }

        Some(LoadPlan { session: self.session, store, references, product })
    }

    /// Executa as buscas do plano em paralelo. Falhas viram listas vazias.
    pub async fn load(&self, plan: LoadPlan) -> LoadResult {
        let references = async {
            if !plan.references {
                return None;
            }
            let (categories, tags) = tokio::join!(self.api.list_categories(plan.store), self.api.list_tags(plan.store));
            let categories = categories.unwrap_or_else(|e| {
                tracing::warn!(store = %plan.store, error = %e, "Falha ao buscar categorias.");
                Vec::new()
            });
            let tags = tags.unwrap_or_else(|e| {
                tracing::warn!(store = %plan.store, error = %e, "Falha ao buscar tags.");
                Vec::new()
            });
            Some((categories, tags))
        };

        let product = async {
            let product = plan.product?;
            match self.api.product_selections(product).await {
                Ok(selections) => Some(Some(selections)),
                Err(e) => {
                    tracing::warn!(%product, error = %e, "Falha ao buscar o detalhe do produto.");
                    Some(None)
                }
            }
        };

        let (references, product) = tokio::join!(references, product);
        LoadResult { session: plan.session, store: plan.store, references, product }
    }

    /// Resultados de uma sessão anterior são descartados.
    pub fn apply(&mut self, result: LoadResult) -> bool {
        if !self.open || result.session != self.session {
            tracing::debug!(session = result.session, current = self.session, "Resultado obsoleto descartado.");
            return false;
        }

        if let Some((categories, tags)) = result.references {
            self.categories = categories;
            self.tags = tags;
            self.references_store = Some(result.store);
            self.loading_references = false;
        }
        if let Some(selections) = result.product {
            if let Some(selections) = selections {
                self.form.apply_selections(selections);
            }
            self.loaded_product_initial_data = true;
        }
        true
    }

    /// `handle` seguido de `load` e `apply`.
    pub async fn dispatch(&mut self, command: DialogCommand) {
        if let Some(plan) = self.handle(command) {
            let result = self.load(plan).await;
            self.apply(result);
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.open {
            return SubmitOutcome::NotOpen;
        }

        // Sem categoria não há chamada de rede.
        let payload = match self.form.validate(self.mode) {
            Ok(payload) => payload,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        if let Err(e) = self.api.save_product(self.mode, &payload).await {
            tracing::warn!(error = %e, mode = ?self.mode, "Falha ao salvar o produto.");
            let message = self.i18n.translate(&self.lang, "products.save_failed");
            self.error = Some(message.clone());
            return SubmitOutcome::Failed(message);
        }

        self.close();
        if self.events.send(DialogEvent::Refresh).is_err() {
            tracing::debug!("Ninguém escutando o aviso de atualização.");
        }
        SubmitOutcome::Saved
    }

    fn close(&mut self) {
        self.session += 1;
        self.open = false;
        self.mode = SaveMode::Create;
        self.form = ProductForm::default();
        self.error = None;
        self.loading_references = false;
        self.loaded_product_initial_data = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::ClientError,
        models::{
            product::ProductPayload,
            store::ViewerRole,
        },
    };
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct FakeApi {
        fail_references: bool,
        fail_detail: bool,
        fail_save: bool,
        categories: Vec<SelectOption>,
        selections: ProductSelections,
        reference_calls: AtomicUsize,
        saved: Mutex<Vec<(SaveMode, ProductPayload)>>,
    }

    #[async_trait]
    impl StoreApi for Arc<FakeApi> {
        async fn list_categories(&self, _store: Uuid) -> Result<Vec<SelectOption>, ClientError> {
            self.reference_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_references {
                return Err(ClientError::Status(500));
            }
            Ok(self.categories.clone())
        }

        async fn list_tags(&self, _store: Uuid) -> Result<Vec<SelectOption>, ClientError> {
            if self.fail_references {
                return Err(ClientError::Status(500));
            }
            Ok(vec![SelectOption { label: "Vegano".into(), value: Uuid::nil() }])
        }

        async fn product_selections(&self, _product: Uuid) -> Result<ProductSelections, ClientError> {
            if self.fail_detail {
                return Err(ClientError::Status(404));
            }
            Ok(self.selections.clone())
        }

        async fn save_product(&self, mode: SaveMode, payload: &ProductPayload) -> Result<(), ClientError> {
            self.saved.lock().unwrap().push((mode, payload.clone()));
            if self.fail_save {
                return Err(ClientError::Status(500));
            }
            Ok(())
        }

        async fn viewer_role(&self, _store: Uuid) -> Result<ViewerRole, ClientError> {
            Ok(ViewerRole::default())
        }
    }

    fn dialog(api: FakeApi) -> (ProductDialog<Arc<FakeApi>>, Arc<FakeApi>, mpsc::UnboundedReceiver<DialogEvent>) {
        let api = Arc::new(api);
        let (tx, rx) = mpsc::unbounded_channel();
        (ProductDialog::new(api.clone(), tx, "pt"), api, rx)
    }

    fn target(store: Uuid) -> EditTarget {
        EditTarget {
            id: Uuid::new_v4(),
            store,
            name: "Pastel".into(),
            price: Decimal::from(8),
            description: None,
            image: None,
        }
    }

    fn category() -> SelectOption {
        SelectOption { label: "Lanches".into(), value: Uuid::new_v4() }
    }

    #[tokio::test]
    async fn failed_reference_fetch_resolves_to_empty_lists() {
        let (mut dialog, _, _rx) = dialog(FakeApi { fail_references: true, ..Default::default() });

        dialog.dispatch(DialogCommand::OpenForCreate { store: Uuid::new_v4() }).await;

        assert!(dialog.is_open());
        assert!(dialog.categories().is_empty());
        assert!(dialog.tags().is_empty());
        assert!(!dialog.is_loading());
    }

    #[tokio::test]
    async fn create_without_category_never_calls_the_api() {
        let (mut dialog, api, _rx) = dialog(FakeApi::default());
        dialog.dispatch(DialogCommand::OpenForCreate { store: Uuid::new_v4() }).await;
        dialog.form_mut().set_name("Coxinha");

        match dialog.submit().await {
            SubmitOutcome::Invalid(errors) => assert!(errors.field_errors().contains_key("category")),
            other => panic!("esperava erro de validação, veio {other:?}"),
        }
        assert!(api.saved.lock().unwrap().is_empty());
        assert!(dialog.is_open());
    }

    #[tokio::test]
    async fn edit_preloads_selections_from_the_product() {
        let lanches = category();
        let tag = Uuid::new_v4();
        let (mut dialog, _, _rx) = dialog(FakeApi {
            categories: vec![lanches.clone()],
            selections: ProductSelections { category: Some(lanches.value), tags: vec![tag] },
            ..Default::default()
        });

        dialog.dispatch(DialogCommand::OpenForEdit(target(Uuid::new_v4()))).await;

        assert_eq!(dialog.mode(), SaveMode::Update);
        assert_eq!(dialog.form().selected_category(dialog.categories()), Some(&lanches));
        assert_eq!(dialog.form().tags(), &[tag]);
        assert_eq!(dialog.form().image(), None);
        assert!(!dialog.is_loading());
    }

    #[tokio::test]
    async fn failed_detail_fetch_still_finishes_loading() {
        let (mut dialog, _, _rx) = dialog(FakeApi { fail_detail: true, ..Default::default() });

        dialog.dispatch(DialogCommand::OpenForEdit(target(Uuid::new_v4()))).await;

        assert!(!dialog.is_loading());
        assert_eq!(dialog.form().category(), None);
        assert!(dialog.form().tags().is_empty());
    }

    #[tokio::test]
    async fn a_closed_edit_dialog_is_not_loading() {
        let (mut dialog, _, _rx) = dialog(FakeApi::default());

        dialog.handle(DialogCommand::OpenForEdit(target(Uuid::new_v4())));
        assert!(dialog.is_loading());

        dialog.handle(DialogCommand::Close);
        assert!(!dialog.is_open());
        assert!(!dialog.is_loading());
        assert_eq!(dialog.mode(), SaveMode::Create);
    }

    #[tokio::test]
    async fn results_from_a_closed_session_are_dropped() {
        let (mut dialog, _, _rx) = dialog(FakeApi { categories: vec![category()], ..Default::default() });

        let plan = dialog.handle(DialogCommand::OpenForCreate { store: Uuid::new_v4() }).unwrap();
        let stale = dialog.load(plan).await;
        dialog.handle(DialogCommand::Close);

        assert!(!dialog.apply(stale));
        assert!(dialog.categories().is_empty());
    }

    #[tokio::test]
    async fn reopening_for_the_same_store_reuses_reference_lists() {
        let store = Uuid::new_v4();
        let (mut dialog, api, _rx) = dialog(FakeApi { categories: vec![category()], ..Default::default() });

        dialog.dispatch(DialogCommand::OpenForCreate { store }).await;
        dialog.dispatch(DialogCommand::Close).await;
        dialog.dispatch(DialogCommand::OpenForCreate { store }).await;
        assert_eq!(api.reference_calls.load(Ordering::SeqCst), 1);

        dialog.dispatch(DialogCommand::OpenForCreate { store: Uuid::new_v4() }).await;
        assert_eq!(api.reference_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_save_keeps_the_dialog_open_with_one_message() {
        let lanches = category();
        let (mut dialog, _, mut rx) = dialog(FakeApi { fail_save: true, ..Default::default() });
        dialog.dispatch(DialogCommand::OpenForCreate { store: Uuid::new_v4() }).await;
        dialog.form_mut().set_name("Coxinha");
        dialog.form_mut().set_category(Some(lanches.value));

        match dialog.submit().await {
            SubmitOutcome::Failed(message) => assert_eq!(message, "Não foi possível salvar o produto :("),
            other => panic!("esperava falha, veio {other:?}"),
        }
        assert!(dialog.is_open());
        assert_eq!(dialog.error(), Some("Não foi possível salvar o produto :("));
        assert_eq!(dialog.form().name(), "Coxinha");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn successful_edit_closes_resets_and_asks_for_refresh() {
        let lanches = category();
        let (mut dialog, api, mut rx) = dialog(FakeApi {
            selections: ProductSelections { category: Some(lanches.value), tags: Vec::new() },
            ..Default::default()
        });
        let product = target(Uuid::new_v4());
        dialog.dispatch(DialogCommand::OpenForEdit(product.clone())).await;

        assert!(matches!(dialog.submit().await, SubmitOutcome::Saved));

        assert!(!dialog.is_open());
        assert_eq!(dialog.form(), &ProductForm::default());
        assert_eq!(rx.try_recv(), Ok(DialogEvent::Refresh));

        let saved = api.saved.lock().unwrap();
        let (mode, payload) = &saved[0];
        assert_eq!(*mode, SaveMode::Update);
        assert_eq!(payload.id, Some(product.id));
        assert_eq!(payload.image, None);
        assert_eq!(payload.tags, Some(Vec::new()));
    }
}
