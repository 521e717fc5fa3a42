//! Error types for cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Input contains no letters to analyse")]
    EmptyInput,

    #[error("Key length unobservable: no trigram repeats in the ciphertext")]
    KeyLengthUnobservable,

    #[error("Degenerate key length {key_length} for a text of {letters} letters")]
    DegenerateKeyLength { key_length: usize, letters: usize },

    #[error("Invalid reference distribution: {0}")]
    InvalidReference(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
