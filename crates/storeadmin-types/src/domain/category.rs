use serde::{Deserialize, Serialize};

/// A product category as stored by the backend. The identifier is the
/// backend's `_id` field and is treated as opaque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub label: String,
}
