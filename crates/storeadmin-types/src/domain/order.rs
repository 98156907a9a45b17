use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle as the backend reports it. The wire format is the
/// lowercase string ("pending", "paid", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Failed,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Failed,
        OrderStatus::Completed,
    ];

    pub fn is_pending(self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Whether a user may pick this status in the dashboard. "pending" is a
    /// display-only state; once an order has left it, it cannot go back.
    pub fn user_selectable(self) -> bool {
        !self.is_pending()
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Failed => "Failed",
            OrderStatus::Completed => "Completed",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Failed => "failed",
            OrderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "failed" => Ok(OrderStatus::Failed),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// A product line inside an order. Price is optional on the wire; older
/// orders carry name-only entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderedProduct {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// An order as returned by `GET /orders`. Field names follow the backend:
/// camelCase except `paid_at`, which the backend stores snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub products: Vec<OrderedProduct>,
    pub total_price: f64,
    pub status: OrderStatus,
    #[serde(rename = "paid_at", default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}
