use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    // Local validation errors
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Overwrite target '{id}' is not a cached user or role")]
    InvalidOverwriteTarget { id: String },

    #[error("Unknown permission flag: {name}")]
    InvalidPermission { name: String },

    // Remote errors
    #[error("Discord API error: {0}")]
    Http(#[from] serenity::Error),

    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    // Post-processing errors
    #[error("Malformed channel payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    // Configuration errors
    #[error("Invalid config: {message}")]
    Config { message: String },
}

impl StoreError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        StoreError::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
