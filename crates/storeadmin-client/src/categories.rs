use serde::{Deserialize, Serialize};
use storeadmin_types::domain::category::Category;

use crate::error::{check, ClientError};
use crate::StoreApi;

#[derive(Serialize, Deserialize, Debug, Clone)]
struct SaveCategoryRequest<'a> {
    label: &'a str,
}

/// CRUD against `/categories`.
#[derive(Clone)]
pub struct CategoriesClient {
    api: StoreApi,
}

impl CategoriesClient {
    pub(crate) fn new(api: StoreApi) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Category>, ClientError> {
        let res = self
            .api
            .http()
            .get(self.api.url("categories")?)
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn create(&self, label: &str) -> Result<Category, ClientError> {
        let res = self
            .api
            .http()
            .post(self.api.url("categories")?)
            .json(&SaveCategoryRequest { label })
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn update(&self, id: &str, label: &str) -> Result<Category, ClientError> {
        let res = self
            .api
            .http()
            .put(self.api.url(&format!("categories/{id}"))?)
            .json(&SaveCategoryRequest { label })
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let res = self
            .api
            .http()
            .delete(self.api.url(&format!("categories/{id}"))?)
            .send()
            .await?;
        check(res).await?;
        Ok(())
    }
}
