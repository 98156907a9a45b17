use std::sync::Arc;

use chrono::{DateTime, Utc};
use storeadmin_client::OrdersClient;
use storeadmin_types::domain::order::{Order, OrderStatus};
use storeadmin_types::ports::feedback::{ConfirmDialog, ConfirmPrompt, Confirmation, Notifier};

use crate::pages::mutate_then_reload;
use crate::view::{TableBody, EMPTY_ORDERS_ROW};

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersView {
    pub body: TableBody<OrderRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub product_names: Vec<String>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub status_select: StatusSelect,
    pub paid_at: Option<DateTime<Utc>>,
    /// Only pending orders expose a delete action.
    pub can_delete: bool,
}

/// Model of the status dropdown. The whole select is disabled for pending
/// orders; the "pending" option itself is never selectable.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSelect {
    pub enabled: bool,
    pub options: Vec<StatusOption>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusOption {
    pub status: OrderStatus,
    pub enabled: bool,
}

impl StatusSelect {
    fn for_order(order: &Order) -> Self {
        Self {
            enabled: !order.status.is_pending(),
            options: OrderStatus::ALL
                .iter()
                .map(|&status| StatusOption {
                    status,
                    enabled: status.user_selectable(),
                })
                .collect(),
        }
    }
}

/// Controller for the orders page.
pub struct OrdersPage {
    client: OrdersClient,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmDialog>,
    orders: Vec<Order>,
}

impl OrdersPage {
    pub fn new(
        client: OrdersClient,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmDialog>,
    ) -> Self {
        Self {
            client,
            notifier,
            confirm,
            orders: Vec::new(),
        }
    }

    /// Initial fetch; failures are logged and leave the empty table.
    pub async fn mount(&mut self) {
        match self.client.list().await {
            Ok(list) => self.orders = list,
            Err(err) => tracing::warn!(error = %err, "failed to load orders"),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Change an order's status through the usual update-then-reload cycle.
    /// Pending orders are display-only; requests touching "pending" on
    /// either side are ignored, mirroring the disabled dropdown.
    pub async fn set_status(&mut self, id: &str, status: OrderStatus) {
        let Some(order) = self.orders.iter().find(|o| o.id == id) else {
            tracing::debug!(%id, "status change for unknown order ignored");
            return;
        };
        if order.status.is_pending() || status.is_pending() {
            tracing::debug!(%id, %status, "pending is not user-transitionable");
            return;
        }

        let result = mutate_then_reload(
            async { self.client.update_status(id, status).await.map(|_| ()) },
            self.client.list(),
        )
        .await;
        match result {
            Ok(list) => self.orders = list,
            Err(err) => self.notifier.error(&err.to_string()),
        }
    }

    /// Delete behind the confirmation dialog.
    pub async fn remove(&mut self, id: &str) {
        let prompt = ConfirmPrompt::delete_warning();
        if self.confirm.confirm(&prompt).await != Confirmation::Confirmed {
            return;
        }

        let result = mutate_then_reload(self.client.delete(id), self.client.list()).await;
        match result {
            Ok(list) => {
                self.orders = list;
                self.notifier.success("Order has been removed");
            }
            Err(err) => self.notifier.error(&err.to_string()),
        }
    }

    pub fn view(&self) -> OrdersView {
        let rows = self
            .orders
            .iter()
            .map(|o| OrderRow {
                id: o.id.clone(),
                customer_name: o.customer_name.clone(),
                customer_email: o.customer_email.clone(),
                product_names: o.products.iter().map(|p| p.name.clone()).collect(),
                total_price: o.total_price,
                status: o.status,
                status_select: StatusSelect::for_order(o),
                paid_at: o.paid_at,
                can_delete: o.status.is_pending(),
            })
            .collect();
        OrdersView {
            body: TableBody::from_rows(rows, EMPTY_ORDERS_ROW),
        }
    }
}
