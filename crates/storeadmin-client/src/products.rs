use serde::{Deserialize, Serialize};
use storeadmin_types::domain::product::{Product, ProductCategory};

use crate::error::{check, ClientError};
use crate::StoreApi;

/// Full field set for `PUT /products/{id}`; the edit form always submits
/// every field.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: ProductCategory,
}

/// Single-item fetch and update against `/products`.
#[derive(Clone)]
pub struct ProductsClient {
    api: StoreApi,
}

impl ProductsClient {
    pub(crate) fn new(api: StoreApi) -> Self {
        Self { api }
    }

    /// Returns `None` when the backend answers 2xx with an empty or `null`
    /// body, which is how it reports an unknown id.
    pub async fn get(&self, id: &str) -> Result<Option<Product>, ClientError> {
        let res = self
            .api
            .http()
            .get(self.api.url(&format!("products/{id}"))?)
            .send()
            .await?;
        let body = check(res).await?.text().await?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(trimmed)?))
    }

    pub async fn update(&self, id: &str, req: &UpdateProductRequest) -> Result<Product, ClientError> {
        let res = self
            .api
            .http()
            .put(self.api.url(&format!("products/{id}"))?)
            .json(req)
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }
}
