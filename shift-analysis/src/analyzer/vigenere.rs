//! Polyalphabetic (Vigenère) decoding

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::{kasiski, utils};

use super::Analyzer;

/// Plaintext and keyword recovered from a Vigenère ciphertext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereSolution {
    pub plaintext: String,
    /// Lowercase keyword, one letter per coset
    pub key: String,
}

impl VigenereSolution {
    pub fn key_length(&self) -> usize {
        self.key.len()
    }
}

/// Splits `reduced` into `key_length` interleaved cosets.
///
/// Coset `o` holds the letters at positions `o, o + key_length, ...`.
pub fn cosets(reduced: &str, key_length: usize) -> Vec<String> {
    let mut cosets = vec![String::new(); key_length];

    for (i, c) in reduced.chars().enumerate() {
        cosets[i % key_length].push(c);
    }

    cosets
}

/// Interleaves decoded cosets back into one letter stream
fn interleave(cosets: &[String]) -> String {
    let columns: Vec<Vec<char>> = cosets.iter().map(|coset| coset.chars().collect()).collect();
    let rows = columns.first().map_or(0, Vec::len);
    let mut letters = String::with_capacity(columns.iter().map(Vec::len).sum());

    for i in 0..rows {
        for column in &columns {
            if let Some(&c) = column.get(i) {
                letters.push(c);
            }
        }
    }

    letters
}

impl Analyzer {
    /// Decodes a Vigenère cipher without knowing its keyword.
    ///
    /// The key length comes from a Kasiski examination; each coset is then
    /// decoded as a shift cipher. Letters come out lowercase, everything
    /// else keeps its place.
    pub fn decode_vigenere(&self, ciphertext: &str) -> Result<VigenereSolution> {
        let reduced = utils::normalize(ciphertext);
        if reduced.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let key_length = kasiski::find_key_length(ciphertext)?;
        self.decode_vigenere_with_length(ciphertext, key_length)
    }

    /// Decodes a Vigenère cipher whose key length is already known
    pub fn decode_vigenere_with_length(
        &self,
        ciphertext: &str,
        key_length: usize,
    ) -> Result<VigenereSolution> {
        let reduced = utils::normalize(ciphertext);
        if reduced.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if key_length == 0 || key_length > reduced.len() {
            return Err(AnalysisError::DegenerateKeyLength {
                key_length,
                letters: reduced.len(),
            });
        }

        let mut deciphered: Vec<String> = Vec::with_capacity(key_length);
        let mut key = String::with_capacity(key_length);

        for (o, coset) in cosets(&reduced, key_length).iter().enumerate() {
            let solution = self.decode_shift(coset)?;
            debug!(coset = o, offset = solution.offset, "decoded coset");

            key.push(solution.key_letter());
            deciphered.push(solution.plaintext);
        }

        let plaintext = utils::restore_layout(ciphertext, interleave(&deciphered).chars());

        Ok(VigenereSolution { plaintext, key })
    }
}
