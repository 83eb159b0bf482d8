use thiserror::Error;

/// Failures at the remote task-store boundary.
///
/// The controllers only ever branch on "failed or not"; the variants exist so
/// the binary surface can report what actually went wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No usable response: connectivity, DNS, timeout at the transport layer.
    #[error("network error: {0}")]
    Transport(String),

    /// The store answered but rejected the request (bad field value, missing
    /// resource, server-side error).
    #[error("request rejected by server (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// The session token was missing, expired or refused. Not interpreted
    /// further here; the caller decides whether to re-login.
    #[error("not authorized - run `taskboard login` first")]
    Unauthorized,

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Shape(#[from] serde_json::Error),
}

impl From<ureq::Error> for StoreError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(401 | 403, _) => StoreError::Unauthorized,
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                StoreError::Rejected { status, body }
            }
            ureq::Error::Transport(transport) => StoreError::Transport(transport.to_string()),
        }
    }
}
