//! Alphabet helpers and text normalization

/// The 26 lowercase Latin letters; a letter's position is its rotation unit.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Position of an ASCII letter in the alphabet, ignoring case
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Letter at `index`, wrapping around the alphabet
pub fn letter_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN]
}

/// Reduces text to its lowercase letters, in order.
///
/// Only ASCII letters survive; whitespace, punctuation, digits and
/// non-ASCII characters are dropped. Normalizing twice is a no-op.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Replaces every letter of `original` with the next char of `letters`,
/// leaving all other characters where they are.
///
/// Letters left over once `letters` runs dry are dropped.
pub fn restore_layout<I>(original: &str, letters: I) -> String
where
    I: IntoIterator<Item = char>,
{
    let mut letters = letters.into_iter();
    let mut result = String::with_capacity(original.len());

    for c in original.chars() {
        if c.is_ascii_alphabetic() {
            if let Some(replacement) = letters.next() {
                result.push(replacement);
            }
        } else {
            result.push(c);
        }
    }

    result
}
