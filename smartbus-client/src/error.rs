use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-success status
    #[error("Relay answered {status}: {body}")]
    Status { status: u16, body: String },

    /// The configured base URL cannot carry a path
    #[error("Invalid relay URL: {0}")]
    InvalidUrl(String),

    /// The trip draft cannot be turned into a request yet
    #[error("Incomplete trip: {0}")]
    Draft(#[from] crate::trip::DraftError),
}

pub type ClientResult<T> = Result<T, ClientError>;
