use storeadmin_client::ClientError;
use thiserror::Error;

/// Everything a page controller can run into. All variants are converted to
/// user-facing feedback at the controller boundary; none escape it.
#[derive(Error, Debug)]
pub enum PageError {
    /// A required field is missing; caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// The API rejected or never received a request. Transient; the user
    /// stays on the page.
    #[error(transparent)]
    Request(#[from] ClientError),

    /// A single-item fetch came back empty. Terminal for the page instance.
    #[error("{0}")]
    NotFound(String),
}
