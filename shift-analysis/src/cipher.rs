//! Keyed shift and Vigenère ciphers

use crate::error::{AnalysisError, Result};
use crate::utils::{self, ALPHABET_LEN};

/// Trait for a classical text cipher
pub trait Cipher {
    /// Encrypts `text`, keeping case and every non-letter
    fn encrypt(&self, text: &str) -> String;

    /// Decrypts `text`, keeping case and every non-letter
    fn decrypt(&self, text: &str) -> String;
}

/// Shifts an ASCII letter forward by `shift`, preserving case
fn shift_letter(c: char, shift: usize) -> char {
    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let index = (c as u8 - base) as usize;
    (((index + shift) % ALPHABET_LEN) as u8 + base) as char
}

/// Monoalphabetic shift (Caesar) cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    offset: usize,
}

impl Caesar {
    pub fn new(offset: usize) -> Result<Self> {
        if offset >= ALPHABET_LEN {
            return Err(AnalysisError::InvalidKey(format!(
                "offset {} is outside 0..{}",
                offset, ALPHABET_LEN
            )));
        }
        Ok(Self { offset })
    }

    /// Cipher whose offset is the alphabet position of `letter`
    pub fn from_letter(letter: char) -> Result<Self> {
        let offset = utils::letter_index(letter)
            .ok_or_else(|| AnalysisError::InvalidKey(format!("`{}` is not a letter", letter)))?;
        Self::new(offset)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Cipher for Caesar {
    fn encrypt(&self, text: &str) -> String {
        text.chars()
            .map(|c| if c.is_ascii_alphabetic() { shift_letter(c, self.offset) } else { c })
            .collect()
    }

    fn decrypt(&self, text: &str) -> String {
        let inverse = (ALPHABET_LEN - self.offset) % ALPHABET_LEN;
        text.chars()
            .map(|c| if c.is_ascii_alphabetic() { shift_letter(c, inverse) } else { c })
            .collect()
    }
}

/// Polyalphabetic shift cipher with a repeating keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vec<usize>,
}

impl Vigenere {
    /// Builds the cipher from a keyword made only of ASCII letters
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(AnalysisError::InvalidKey("key cannot be empty".to_string()));
        }

        let shifts = key
            .chars()
            .map(|c| {
                utils::letter_index(c).ok_or_else(|| {
                    AnalysisError::InvalidKey(format!("`{}` in key is not a letter", c))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(Self { shifts })
    }

    /// Lowercase keyword
    pub fn key(&self) -> String {
        self.shifts.iter().map(|&shift| utils::letter_at(shift)).collect()
    }

    /// Applies the keyword shifts; the key position only advances on letters
    fn apply(&self, text: &str, invert: bool) -> String {
        let mut key_index = 0;

        text.chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() {
                    return c;
                }
                let shift = self.shifts[key_index % self.shifts.len()];
                key_index += 1;

                if invert {
                    shift_letter(c, (ALPHABET_LEN - shift) % ALPHABET_LEN)
                } else {
                    shift_letter(c, shift)
                }
            })
            .collect()
    }
}

impl Cipher for Vigenere {
    fn encrypt(&self, text: &str) -> String {
        self.apply(text, false)
    }

    fn decrypt(&self, text: &str) -> String {
        self.apply(text, true)
    }
}
