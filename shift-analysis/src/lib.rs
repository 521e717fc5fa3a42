//! # Shift Analysis Library
//!
//! Recovers plaintext from shift (Caesar) and Vigenère ciphertexts by letter
//! frequency analysis alone, without knowing the offset or keyword.
//!
//! ## Pipeline
//!
//! - **Normalization** - text is reduced to its lowercase letters
//! - **Distribution** - percentage frequency of every letter
//! - **Offset estimation** - the rotation that best lines a distribution up
//!   with a reference language
//! - **Kasiski examination** - key length from distances between repeated
//!   trigrams
//! - **Decoders** - shift decoding, and Vigenère decoding as one shift
//!   decoding per coset
//!
//! ## Usage
//!
//! ```rust
//! use shift_analysis::{Analyzer, Caesar, Cipher, Distribution};
//!
//! let analyzer = Analyzer::new(Distribution::english());
//! let ciphertext = Caesar::new(7)?.encrypt(
//!     "it was a bright cold day in april, and the clocks were striking thirteen",
//! );
//!
//! let solution = analyzer.decode_shift(&ciphertext)?;
//! assert_eq!(solution.offset, 7);
//! # Ok::<(), shift_analysis::AnalysisError>(())
//! ```

// Public modules
pub mod analyzer;
pub mod cipher;
pub mod distribution;
pub mod error;
pub mod kasiski;
pub mod offset;
pub mod utils;

// Re-exports for easy access
pub use analyzer::{Analyzer, ShiftSolution, VigenereSolution};
pub use cipher::{Caesar, Cipher, Vigenere};
pub use distribution::Distribution;
pub use error::{AnalysisError, Result};
pub use kasiski::{examine, find_key_length, KasiskiExamination};
pub use offset::estimate_offset;
pub use utils::{normalize, ALPHABET};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decodes a shift cipher against standard English frequencies
pub fn decode_shift(ciphertext: &str) -> Result<ShiftSolution> {
    Analyzer::default().decode_shift(ciphertext)
}

/// Decodes a Vigenère cipher against standard English frequencies
pub fn decode_vigenere(ciphertext: &str) -> Result<VigenereSolution> {
    Analyzer::default().decode_vigenere(ciphertext)
}
