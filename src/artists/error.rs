use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtistsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Data directory does not exist: {0}")]
    DataDirectoryMissing(String),

    #[error("Invalid artist file name: {0}")]
    InvalidFileName(String),
}
