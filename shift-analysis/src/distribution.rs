//! Letter frequency distributions
//!
//! A [`Distribution`] maps every alphabet letter to a percentage. The same
//! type carries both the expected frequencies of a reference language and the
//! observed frequencies of a piece of ciphertext.

use std::ops::Index;

use crate::error::{AnalysisError, Result};
use crate::utils::{self, ALPHABET, ALPHABET_LEN};

/// Standard English letter frequencies in percent, `a` through `z`
const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    8.2, 1.5, 2.8, 4.2, 12.7, 2.2, 2.0, 6.1, 7.0, 0.1, 0.8, 4.0, 2.4,
    6.7, 7.5, 1.9, 0.1, 6.0, 6.3, 9.0, 2.8, 1.0, 2.4, 0.1, 2.0, 0.1,
];

/// Percentage frequency of every alphabet letter
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    frequencies: [f64; ALPHABET_LEN],
}

impl Distribution {
    /// Builds a distribution from 26 percentages, `a` through `z`
    pub fn new(frequencies: [f64; ALPHABET_LEN]) -> Self {
        Self { frequencies }
    }

    /// Expected letter frequencies of English text
    pub fn english() -> Self {
        Self::new(ENGLISH_FREQUENCIES)
    }

    /// Observed distribution of the letters in `text`.
    ///
    /// The text is normalized first. Each letter adds `100 / n` to its
    /// bucket, so the values sum to 100 for any text with letters. Text
    /// without letters yields the all-zero distribution.
    pub fn of(text: &str) -> Self {
        let reduced = utils::normalize(text);
        let mut frequencies = [0.0; ALPHABET_LEN];

        if reduced.is_empty() {
            return Self::new(frequencies);
        }

        let share = 100.0 / reduced.len() as f64;
        for c in reduced.chars() {
            if let Some(index) = utils::letter_index(c) {
                frequencies[index] += share;
            }
        }

        Self::new(frequencies)
    }

    /// Parses a reference table.
    ///
    /// One `letter value` or `letter:value` pair per line. Blank lines and
    /// lines starting with `#` are skipped, letters not listed stay at 0.
    pub fn parse_reference(source: &str) -> Result<Self> {
        let mut frequencies = [0.0; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        for (number, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = |reason: &str| {
                AnalysisError::InvalidReference(format!("line {}: {}", number + 1, reason))
            };

            let (letter, value) = line
                .split_once(':')
                .or_else(|| line.split_once(char::is_whitespace))
                .ok_or_else(|| invalid("expected `letter value`"))?;

            let mut letter_chars = letter.trim().chars();
            let index = match (letter_chars.next(), letter_chars.next()) {
                (Some(c), None) => utils::letter_index(c),
                _ => None,
            }
            .ok_or_else(|| invalid(&format!("`{}` is not a single letter", letter.trim())))?;

            let value: f64 = value
                .trim()
                .parse()
                .map_err(|_| invalid(&format!("`{}` is not a number", value.trim())))?;
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(&format!("{} is not a valid percentage", value)));
            }

            if seen[index] {
                return Err(invalid(&format!("duplicate entry for `{}`", ALPHABET[index])));
            }
            seen[index] = true;
            frequencies[index] = value;
        }

        Ok(Self::new(frequencies))
    }

    /// Frequency of `letter`, case-insensitive; 0 for non-letters
    pub fn get(&self, letter: char) -> f64 {
        utils::letter_index(letter)
            .map(|index| self.frequencies[index])
            .unwrap_or(0.0)
    }

    /// Sum over all letters
    pub fn total(&self) -> f64 {
        self.frequencies.iter().sum()
    }

    /// Distribution whose entry `j` is this distribution's entry `j + offset`.
    ///
    /// Rotating a ciphertext distribution by the cipher's offset lines it up
    /// with the plaintext distribution.
    pub fn rotated(&self, offset: usize) -> Self {
        let mut frequencies = [0.0; ALPHABET_LEN];
        for (j, slot) in frequencies.iter_mut().enumerate() {
            *slot = self.frequencies[(j + offset) % ALPHABET_LEN];
        }
        Self::new(frequencies)
    }

    /// `(letter, percentage)` pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        ALPHABET.iter().copied().zip(self.frequencies.iter().copied())
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::english()
    }
}

impl Index<usize> for Distribution {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.frequencies[index]
    }
}
