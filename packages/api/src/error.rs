use thiserror::Error;

/// Failure of an API round trip.
///
/// The client makes no distinction between a timeout, a server error status,
/// and a body that did not parse: every transport problem renders as the same
/// generic connectivity message, which views show verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No se pudo conectar al servidor")]
    Unreachable,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        tracing::warn!("request failed: {e}");
        ApiError::Unreachable
    }
}
