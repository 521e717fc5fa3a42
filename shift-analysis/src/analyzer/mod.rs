//! Decoders built on top of the frequency analysis

pub mod shift;
pub mod vigenere;

pub use shift::ShiftSolution;
pub use vigenere::VigenereSolution;

use crate::distribution::Distribution;

/// Recovers shift and Vigenère plaintexts against a reference distribution
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    reference: Distribution,
}

impl Analyzer {
    /// Create an analyzer comparing ciphertexts against `reference`
    pub fn new(reference: Distribution) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &Distribution {
        &self.reference
    }
}
