use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Non-2xx response. The message is taken from the JSON error body when
    /// the backend sends one, otherwise from the raw body or the status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Connection or transport failure; no status ever arrived.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid header: {0}")]
    Header(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Network(err) => err.status(),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

/// Turns any non-success response into `ClientError::Status`, salvaging the
/// most human-readable message available.
pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.is_empty())
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
    tracing::debug!(%status, %message, "request rejected");
    Err(ClientError::Status { status, message })
}
