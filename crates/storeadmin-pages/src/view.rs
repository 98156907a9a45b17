//! Shared renderer contract. View models are plain data derived from page
//! state; renderers draw them without any logic of their own.

/// Placeholder row text for an empty catalog table.
pub const EMPTY_CATALOG_ROW: &str = "No Product Added Yet!";
/// Placeholder row text for an empty orders table.
pub const EMPTY_ORDERS_ROW: &str = "No Order Added Yet!";

/// Body of a listing table. An empty collection is a distinct branch that
/// renders exactly one placeholder row, never zero rows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<R> {
    Empty { placeholder: &'static str },
    Rows(Vec<R>),
}

impl<R> TableBody<R> {
    pub fn from_rows(rows: Vec<R>, placeholder: &'static str) -> Self {
        if rows.is_empty() {
            TableBody::Empty { placeholder }
        } else {
            TableBody::Rows(rows)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TableBody::Empty { .. })
    }
}
