use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsletterError {
    #[error("Newsletter configuration error: {0}")]
    ConfigError(String),

    #[error("Newsletter provider error: {0}")]
    ProviderError(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
