// src/client/form.rs

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::{
    client::api::{ProductSelections, SelectOption},
    models::product::{ListedProduct, ProductPayload, SaveMode},
};

/// Produto aberto para edição, como veio da listagem.
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub id: Uuid,
    pub store: Uuid,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<&ListedProduct> for EditTarget {
    fn from(product: &ListedProduct) -> Self {
        Self {
            id: product.id,
            store: product.store,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }
}

/// Estado do formulário de produto.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    values: ProductPayload,
    category: Option<Uuid>,
    tags: Vec<Uuid>,
    // Só envia `tags` quando a seleção é conhecida; senão o servidor mantém os vínculos.
    tags_known: bool,
}

impl ProductForm {
    pub fn for_create(store: Uuid) -> Self {
        Self {
            values: ProductPayload { store: Some(store), ..Default::default() },
            tags_known: true,
            ..Default::default()
        }
    }

    /// Copia só os campos presentes; imagem ausente continua ausente.
    pub fn for_edit(target: &EditTarget) -> Self {
        let mut values = ProductPayload {
            id: Some(target.id),
            store: Some(target.store),
            name: target.name.clone(),
            price: target.price,
            ..Default::default()
        };
        if let Some(description) = &target.description {
            values.description = Some(description.clone());
        }
        if let Some(image) = &target.image {
            values.image = Some(image.clone());
        }

        Self { values, ..Default::default() }
    }

    pub fn store(&self) -> Option<Uuid> {
        self.values.store
    }

    pub fn product_id(&self) -> Option<Uuid> {
        self.values.id
    }

    pub fn name(&self) -> &str {
        &self.values.name
    }

    pub fn image(&self) -> Option<&str> {
        self.values.image.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.values.description.as_deref()
    }

    pub fn price(&self) -> Decimal {
        self.values.price
    }

    pub fn category(&self) -> Option<Uuid> {
        self.category
    }

    pub fn tags(&self) -> &[Uuid] {
        &self.tags
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values.name = name.into();
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.values.price = price;
    }

    pub fn set_promotional_price(&mut self, price: Option<Decimal>) {
        self.values.promotional_price = price;
    }

    pub fn set_employee_commission(&mut self, commission: Option<Decimal>) {
        self.values.employee_commission = commission;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.values.description = Some(description.into());
    }

    /// Texto vazio remove a imagem gravada.
    pub fn set_image(&mut self, image: impl Into<String>) {
        self.values.image = Some(image.into());
    }

    pub fn set_active(&mut self, active: bool) {
        self.values.active = Some(active);
    }

    pub fn set_category(&mut self, category: Option<Uuid>) {
        self.category = category;
    }

    pub fn set_tags(&mut self, tags: Vec<Uuid>) {
        self.tags = tags;
        self.tags_known = true;
    }

    /// Seleções vindas do detalhe do produto.
    pub fn apply_selections(&mut self, selections: ProductSelections) {
        self.category = selections.category;
        self.set_tags(selections.tags);
    }

    pub fn selected_category<'a>(&self, options: &'a [SelectOption]) -> Option<&'a SelectOption> {
        let category = self.category?;
        options.iter().find(|option| option.value == category)
    }

    pub fn selected_tags<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        options.iter().filter(|option| self.tags.contains(&option.value)).collect()
    }

    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            category: self.category,
            tags: self.tags_known.then(|| self.tags.clone()),
            ..self.values.clone()
        }
    }

    pub fn validate(&self, mode: SaveMode) -> Result<ProductPayload, ValidationErrors> {
        let payload = self.to_payload();
        payload.validate_for(mode)?;
        Ok(payload)
    }
}
