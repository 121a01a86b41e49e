use thiserror::Error;

/// Failure classes surfaced by every client operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured endpoint does not parse as a URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// Network-level failure sending the request or reading the body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A value in the request could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with an `error` member; carried verbatim.
    #[error("server error: {0}")]
    Rpc(serde_json::Value),

    /// The authenticate round-trip succeeded but returned no usable session.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The operation needs configuration fields that were not provided.
    #[error("missing configuration: {0}")]
    Config(String),
}

/// Uniform outcome of every public client operation.
pub type RpcResult<T> = std::result::Result<T, ClientError>;
