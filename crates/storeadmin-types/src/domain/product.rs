use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed category set the store sells into. Wire format is the
/// capitalised variant name ("Accessories", "Games", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductCategory {
    Accessories,
    Games,
    Consoles,
    Subscriptions,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Accessories,
        ProductCategory::Games,
        ProductCategory::Consoles,
        ProductCategory::Subscriptions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Accessories => "Accessories",
            ProductCategory::Games => "Games",
            ProductCategory::Consoles => "Consoles",
            ProductCategory::Subscriptions => "Subscriptions",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accessories" => Ok(ProductCategory::Accessories),
            "games" => Ok(ProductCategory::Games),
            "consoles" => Ok(ProductCategory::Consoles),
            "subscriptions" => Ok(ProductCategory::Subscriptions),
            other => Err(format!("unknown product category: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: ProductCategory,
}
