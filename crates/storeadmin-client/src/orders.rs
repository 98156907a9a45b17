use serde::{Deserialize, Serialize};
use storeadmin_types::domain::order::{Order, OrderStatus, OrderedProduct};

use crate::error::{check, ClientError};
use crate::StoreApi;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub products: Vec<OrderedProduct>,
    pub total_price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct UpdateStatusRequest {
    status: OrderStatus,
}

/// CRUD against `/orders`. Status is the only order field the dashboard
/// ever writes; creation exists for seeding and tooling.
#[derive(Clone)]
pub struct OrdersClient {
    api: StoreApi,
}

impl OrdersClient {
    pub(crate) fn new(api: StoreApi) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Order>, ClientError> {
        let res = self.api.http().get(self.api.url("orders")?).send().await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn create(&self, req: &CreateOrderRequest) -> Result<Order, ClientError> {
        let res = self
            .api
            .http()
            .post(self.api.url("orders")?)
            .json(req)
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, ClientError> {
        let res = self
            .api
            .http()
            .put(self.api.url(&format!("orders/{id}"))?)
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let res = self
            .api
            .http()
            .delete(self.api.url(&format!("orders/{id}"))?)
            .send()
            .await?;
        check(res).await?;
        Ok(())
    }
}
