use thiserror::Error;

/// Failures talking to the host's callback endpoint.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bridge request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{endpoint} sent an unreadable body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type BridgeResult<T> = Result<T, BridgeError>;
