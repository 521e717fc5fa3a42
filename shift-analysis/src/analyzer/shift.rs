//! Monoalphabetic shift decoding

use tracing::debug;

use crate::distribution::Distribution;
use crate::error::{AnalysisError, Result};
use crate::{offset, utils};

use super::Analyzer;

/// Plaintext and offset recovered from a shift ciphertext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSolution {
    pub plaintext: String,
    /// Ciphertext letter index = plaintext letter index + offset (mod 26)
    pub offset: usize,
}

impl ShiftSolution {
    /// Key letter corresponding to the offset (`a` for 0)
    pub fn key_letter(&self) -> char {
        utils::letter_at(self.offset)
    }
}

impl Analyzer {
    /// Offset of a shift ciphertext, estimated from its letter frequencies
    pub fn find_offset(&self, ciphertext: &str) -> Result<usize> {
        let observed = Distribution::of(ciphertext);
        if observed.total() == 0.0 {
            return Err(AnalysisError::EmptyInput);
        }

        Ok(offset::estimate_offset(&observed, self.reference()))
    }

    /// Decodes a shift cipher without knowing its offset.
    ///
    /// Letters are matched case-insensitively and always come out lowercase.
    /// Every other character keeps its place. A ciphertext that is too short
    /// or unnatural still decodes, just not necessarily correctly.
    pub fn decode_shift(&self, ciphertext: &str) -> Result<ShiftSolution> {
        let offset = self.find_offset(ciphertext)?;
        debug!(offset, "decoding shift cipher");

        let plaintext = ciphertext
            .chars()
            .map(|c| match utils::letter_index(c) {
                Some(index) => utils::letter_at(index + utils::ALPHABET_LEN - offset),
                None => c,
            })
            .collect();

        Ok(ShiftSolution { plaintext, offset })
    }
}
