#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("couldn't reach the server: {0}")]
    Connection(#[source] reqwest::Error),
    /// Any non-2xx response, carrying the server's error message.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("couldn't read the server's response: {0}")]
    Response(#[source] reqwest::Error),
    #[error("{0}")]
    Validation(&'static str),
    #[error("note not found")]
    NotFound,
}
