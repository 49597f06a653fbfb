// src/common/i18n.rs

/// Tabela de mensagens: (chave, pt, en).
const MESSAGES: &[(&str, &str, &str)] = &[
    // --- Validação ---
    ("validation.invalid_fields", "Um ou mais campos são inválidos.", "One or more fields are invalid."),
    ("validation.name_required", "O nome é obrigatório.", "The name is required."),
    ("validation.price_negative", "O preço não pode ser negativo.", "The price cannot be negative."),
    ("validation.value_negative", "O valor não pode ser negativo.", "The value cannot be negative."),
    ("validation.category_required", "O campo 'category' é obrigatório.", "The 'category' field is required."),
    ("validation.store_required", "O campo 'store' é obrigatório.", "The 'store' field is required."),
    ("validation.id_required", "O campo 'id' é obrigatório para edição.", "The 'id' field is required to update."),
    ("validation.image_url", "A imagem deve ser uma URL válida.", "The image must be a valid URL."),
    // --- Produtos ---
    ("products.cannot_get", "Não foi possível buscar os produtos.", "Cannot get products."),
    ("products.not_found", "Produto não encontrado.", "Product not found."),
    ("products.save_failed", "Não foi possível salvar o produto :(", "Could not save the product :("),
    // --- Catálogo ---
    ("catalog.category_exists", "Já existe uma categoria com o nome '{name}'.", "A category named '{name}' already exists."),
    ("catalog.tag_exists", "Já existe uma tag com o nome '{name}'.", "A tag named '{name}' already exists."),
    ("catalog.tag_not_found", "Tag não encontrada.", "Tag not found."),
    ("catalog.category_not_in_store", "A categoria informada não pertence a esta loja.", "The category does not belong to this store."),
    ("catalog.tag_not_in_store", "Uma das tags informadas não pertence a esta loja.", "One of the tags does not belong to this store."),
    // --- Lojas / Acesso ---
    ("stores.not_found", "Loja não encontrada.", "Store not found."),
    ("auth.invalid_token", "Token de autenticação inválido ou ausente.", "Invalid or missing authentication token."),
    ("auth.not_manager", "Você precisa ser gerente desta loja para realizar esta ação.", "You must be a manager of this store to do this."),
    // --- Genérico ---
    ("server.unexpected", "Ocorreu um erro inesperado.", "An unexpected error occurred."),
];

const SUPPORTED: &[&str] = &["pt", "en"];

/// Catálogo de mensagens localizadas usado na borda da API e no cliente.
#[derive(Debug, Clone)]
pub struct I18nStore {
    default_lang: String,
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new("en")
    }
}

impl I18nStore {
    pub fn new(default_lang: &str) -> Self {
        let default_lang = if SUPPORTED.contains(&default_lang) {
            default_lang.to_string()
        } else {
            "en".to_string()
        };
        Self { default_lang }
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// Resolve a chave no idioma pedido, caindo para o idioma padrão.
    /// Chaves desconhecidas voltam como estão.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        let lang = if SUPPORTED.contains(&lang) { lang } else { self.default_lang.as_str() };

        MESSAGES
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, pt, en)| match lang {
                "pt" => (*pt).to_string(),
                _ => (*en).to_string(),
            })
            .unwrap_or_else(|| key.to_string())
    }

    /// Igual a `translate`, substituindo `{nome}` pelos valores dados.
    pub fn translate_with(&self, lang: &str, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.translate(lang, key), |msg, (name, value)| {
            msg.replace(&format!("{{{name}}}"), value)
        })
    }
}
