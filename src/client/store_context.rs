// src/client/store_context.rs

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::{
    client::api::StoreApi,
    theme::{StyleChange, ThemeColors},
};

/// Onde as variáveis de cor são escritas (o elemento raiz, na casca de UI).
pub trait StyleScope {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

/// Escopo em memória, útil para renderização no servidor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    properties: BTreeMap<String, String>,
}

impl InlineStyle {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// `--nome: valor;` em ordem alfabética.
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl StyleScope for InlineStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }
}

/// Contexto de uma loja montada: tema aplicado no escopo e papel do usuário.
/// Ao desmontar (ou ao sair de escopo) as seis variáveis são removidas.
pub struct StoreContext<'a, S: StyleScope> {
    scope: &'a mut S,
    store: Uuid,
    colors: ThemeColors,
    is_manager: bool,
    role_loaded: bool,
    mounted: bool,
}

impl<'a, S: StyleScope> StoreContext<'a, S> {
    pub fn mount(scope: &'a mut S, store: Uuid, primary: Option<&str>, secondary: Option<&str>) -> Self {
        let mut context = Self {
            scope,
            store,
            colors: ThemeColors::derive(primary, secondary),
            is_manager: false,
            role_loaded: false,
            mounted: true,
        };
        context.apply();
        context
    }

    pub fn store(&self) -> Uuid {
        self.store
    }

    pub fn scope(&self) -> &S {
        &*self.scope
    }

    pub fn themed(&self) -> bool {
        self.colors.themed()
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn is_manager(&self) -> bool {
        self.is_manager
    }

    pub fn set_colors(&mut self, primary: Option<&str>, secondary: Option<&str>) {
        self.colors = ThemeColors::derive(primary, secondary);
        self.apply();
    }

    /// Busca o papel uma única vez por montagem. Falha mantém "não gerente".
    pub async fn load_role<A: StoreApi + ?Sized>(&mut self, api: &A) {
        if self.role_loaded {
            return;
        }
        self.role_loaded = true;

        match api.viewer_role(self.store).await {
            Ok(role) => {
                if role.manager {
                    self.is_manager = true;
                }
            }
            Err(e) => tracing::warn!(store = %self.store, error = %e, "Falha ao buscar o papel do usuário na loja."),
        }
    }

    pub fn unmount(mut self) {
        self.clear();
    }

    fn apply(&mut self) {
        for change in self.colors.style_changes() {
            match change {
                StyleChange::Set { name, value } => self.scope.set_property(name, &value),
                StyleChange::Remove { name } => self.scope.remove_property(name),
            }
        }
    }

    fn clear(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        for change in ThemeColors::default().style_changes() {
            if let StyleChange::Remove { name } = change {
                self.scope.remove_property(name);
            }
        }
    }
}

impl<S: StyleScope> Drop for StoreContext<'_, S> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::{
            api::{ProductSelections, SelectOption},
            ClientError,
        },
        models::{
            product::{ProductPayload, SaveMode},
            store::ViewerRole,
        },
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RoleApi {
        role: Result<bool, u16>,
        calls: AtomicUsize,
    }

    impl RoleApi {
        fn new(role: Result<bool, u16>) -> Self {
            Self { role, calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl StoreApi for RoleApi {
        async fn list_categories(&self, _store: Uuid) -> Result<Vec<SelectOption>, ClientError> {
            Ok(Vec::new())
        }

        async fn list_tags(&self, _store: Uuid) -> Result<Vec<SelectOption>, ClientError> {
            Ok(Vec::new())
        }

        async fn product_selections(&self, _product: Uuid) -> Result<ProductSelections, ClientError> {
            Ok(ProductSelections::default())
        }

        async fn save_product(&self, _mode: SaveMode, _payload: &ProductPayload) -> Result<(), ClientError> {
            Ok(())
        }

        async fn viewer_role(&self, _store: Uuid) -> Result<ViewerRole, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.role.map(|manager| ViewerRole { manager }).map_err(ClientError::Status)
        }
    }

    #[test]
    fn mounting_a_themed_store_writes_six_properties() {
        let mut style = InlineStyle::default();
        let context = StoreContext::mount(&mut style, Uuid::new_v4(), Some("#3366ff"), Some("#111111"));
        assert!(context.themed());
        assert_eq!(context.scope().len(), 6);
        assert_eq!(context.scope().get("--color-secondary-text"), Some("255 255 255"));
        drop(context);

        // Ao sair de escopo tudo é limpo.
        assert!(style.is_empty());
    }

    #[test]
    fn properties_follow_color_changes() {
        let mut style = InlineStyle::default();
        {
            let mut context = StoreContext::mount(&mut style, Uuid::new_v4(), None, None);
            assert!(!context.themed());

            context.set_colors(Some("#3366ff"), Some("#111111"));
            assert!(context.themed());
            assert_eq!(context.scope().get("--color-primary-hover"), Some("0 64 255"));

            context.set_colors(Some("#3366ff"), None);
            assert!(!context.themed());
            assert!(context.scope().is_empty());
            context.unmount();
        }
        assert!(style.is_empty());
    }

    #[test]
    fn inline_style_renders_the_channels() {
        let mut style = InlineStyle::default();
        style.set_property("--color-primary", "51 102 255");
        style.set_property("--color-primary-text", "24 24 27");

        assert_eq!(style.len(), 2);
        assert_eq!(style.get("--color-primary"), Some("51 102 255"));
        assert_eq!(style.to_css(), "--color-primary: 51 102 255; --color-primary-text: 24 24 27;");
    }

    #[tokio::test]
    async fn manager_role_is_fetched_once() {
        let api = RoleApi::new(Ok(true));
        let mut style = InlineStyle::default();
        let mut context = StoreContext::mount(&mut style, Uuid::new_v4(), None, None);

        context.load_role(&api).await;
        context.load_role(&api).await;

        assert!(context.is_manager());
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn role_failure_leaves_the_viewer_as_non_manager() {
        let api = RoleApi::new(Err(500));
        let mut style = InlineStyle::default();
        let mut context = StoreContext::mount(&mut style, Uuid::new_v4(), None, None);

        context.load_role(&api).await;

        assert!(!context.is_manager());
    }
}
