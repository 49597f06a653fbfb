// src/client/api.rs

use async_trait::async_trait;
use reqwest::{header, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    client::{ClientConfig, ClientError},
    models::{
        catalog::DataList,
        product::{ProductDetail, ProductPayload, SaveMode},
        store::ViewerRole,
    },
};

/// Item de um seletor: rótulo exibido e valor enviado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Uuid,
}

/// Categoria e tags como gravadas em um produto.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSelections {
    pub category: Option<Uuid>,
    pub tags: Vec<Uuid>,
}

impl From<ProductDetail> for ProductSelections {
    fn from(detail: ProductDetail) -> Self {
        Self {
            category: Some(detail.data.category_id),
            tags: detail.tags.into_iter().map(|tag| tag.id).collect(),
        }
    }
}

// Só o que os seletores precisam das listas de referência.
#[derive(Debug, Deserialize)]
struct NamedRef {
    id: Uuid,
    name: String,
}

impl From<NamedRef> for SelectOption {
    fn from(named: NamedRef) -> Self {
        Self { label: named.name, value: named.id }
    }
}

/// Chamadas que a vitrine faz à API.
#[async_trait]
pub trait StoreApi: Send + Sync {
    async fn list_categories(&self, store: Uuid) -> Result<Vec<SelectOption>, ClientError>;

    async fn list_tags(&self, store: Uuid) -> Result<Vec<SelectOption>, ClientError>;

    async fn product_selections(&self, product: Uuid) -> Result<ProductSelections, ClientError>;

    /// POST na criação, PUT na edição. Só o status importa.
    async fn save_product(&self, mode: SaveMode, payload: &ProductPayload) -> Result<(), ClientError>;

    async fn viewer_role(&self, store: Uuid) -> Result<ViewerRole, ClientError>;
}

#[derive(Clone)]
pub struct HttpStoreApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpStoreApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.base_url, path)
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(header::ACCEPT_LANGUAGE, self.config.lang.as_str());
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = self.prepare(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, url = %response.url(), "Resposta sem sucesso da API");
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ClientError> {
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        Ok(response.json().await?)
    }

    async fn options(&self, path: &str, store: Uuid) -> Result<Vec<SelectOption>, ClientError> {
        let list: DataList<NamedRef> = self.get_json(path, &[("id", store.to_string())]).await?;
        Ok(list.data.into_iter().map(SelectOption::from).collect())
    }
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn list_categories(&self, store: Uuid) -> Result<Vec<SelectOption>, ClientError> {
        self.options("/product/category", store).await
    }

    async fn list_tags(&self, store: Uuid) -> Result<Vec<SelectOption>, ClientError> {
        self.options("/tag", store).await
    }

    async fn product_selections(&self, product: Uuid) -> Result<ProductSelections, ClientError> {
        let detail: ProductDetail = self.get_json("/product", &[("id", product.to_string())]).await?;
        Ok(detail.into())
    }

    async fn save_product(&self, mode: SaveMode, payload: &ProductPayload) -> Result<(), ClientError> {
        let url = self.url("/product");
        let request = match mode {
            SaveMode::Create => self.http.post(url),
            SaveMode::Update => self.http.put(url),
        };
        self.send(request.json(payload)).await?;
        Ok(())
    }

    async fn viewer_role(&self, store: Uuid) -> Result<ViewerRole, ClientError> {
        self.get_json("/me", &[("store", store.to_string())]).await
    }
}
