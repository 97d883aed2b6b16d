use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecompressError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Input is not a file or directory: {0}")]
    InvalidTarget(PathBuf),

    #[error("Invalid quality value: {0}. Must be a decimal number, ideally between 0 and 1")]
    InvalidQuality(String),

    #[error("Walkdir error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, RecompressError>;
