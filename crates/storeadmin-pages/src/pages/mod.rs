use std::future::Future;

use storeadmin_client::ClientError;

use crate::errors::PageError;

pub mod categories;
pub mod orders;
pub mod product_edit;

pub use categories::CategoriesPage;
pub use orders::OrdersPage;
pub use product_edit::{ProductEditPage, SubmitOutcome};

/// Runs a mutation, then unconditionally re-fetches the full collection.
///
/// This is the dashboard's one synchronisation rule: local state is never
/// patched after a write, it is replaced wholesale by the next `list()`
/// result. The first failure short-circuits; a failed reload after a
/// successful mutation leaves the caller's state untouched.
pub async fn mutate_then_reload<T, M, L>(mutate: M, reload: L) -> Result<Vec<T>, PageError>
where
    M: Future<Output = Result<(), ClientError>>,
    L: Future<Output = Result<Vec<T>, ClientError>>,
{
    mutate.await?;
    Ok(reload.await?)
}
