//! Error handling for the profile scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A profile record had the wrong shape somewhere. The whole record is
    /// rejected; no partial report is produced.
    #[error("Malformed profile record: {0}")]
    MalformedInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ProfileScorerError>;

impl ProfileScorerError {
    /// True for errors caused by the shape of the submitted record, which a
    /// caller may fix and resubmit.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ProfileScorerError::MalformedInput(_))
    }
}
