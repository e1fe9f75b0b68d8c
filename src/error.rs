use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Invalid site content: {0}")]
    InvalidContent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
