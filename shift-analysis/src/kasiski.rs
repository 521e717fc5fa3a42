//! Kasiski examination
//!
//! Repeated trigrams in a Vigenère ciphertext usually come from repeated
//! plaintext enciphered under the same key alignment, which only happens
//! when their distance is a multiple of the key length. Every factor of
//! every such distance gets a vote and the most voted factor is taken as
//! the key length.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::utils;

/// Length of the repeated sequences looked for
pub const WINDOW: usize = 3;

/// Intermediate results of a Kasiski examination
#[derive(Debug, Clone, PartialEq)]
pub struct KasiskiExamination {
    /// Trigrams occurring at least twice with their start positions, in
    /// order of first occurrence
    pub repeats: Vec<(String, Vec<usize>)>,
    /// `(factor, votes)` in ascending factor order
    pub votes: Vec<(usize, usize)>,
}

impl KasiskiExamination {
    /// Most voted factor, the smallest one on ties
    pub fn key_length(&self) -> Result<usize> {
        let mut best: Option<(usize, usize)> = None;

        for &(factor, count) in &self.votes {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((factor, count));
            }
        }

        best.map(|(factor, _)| factor)
            .ok_or(AnalysisError::KeyLengthUnobservable)
    }
}

/// Divisors of `value` excluding 1, ascending (includes `value` itself)
pub fn factors(value: usize) -> Vec<usize> {
    (2..=value).filter(|i| value % i == 0).collect()
}

/// Groups every trigram of the normalized text with its start positions
fn trigram_positions(reduced: &str) -> Vec<(String, Vec<usize>)> {
    let bytes = reduced.as_bytes();
    let mut index: HashMap<&[u8], usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();

    if bytes.len() < WINDOW {
        return groups;
    }

    for (position, window) in bytes.windows(WINDOW).enumerate() {
        match index.get(window) {
            Some(&slot) => groups[slot].1.push(position),
            None => {
                index.insert(window, groups.len());
                groups.push((String::from_utf8_lossy(window).into_owned(), vec![position]));
            }
        }
    }

    groups
}

/// Runs the examination on `ciphertext` without choosing a key length
pub fn examine(ciphertext: &str) -> KasiskiExamination {
    let reduced = utils::normalize(ciphertext);

    let repeats: Vec<(String, Vec<usize>)> = trigram_positions(&reduced)
        .into_iter()
        .filter(|(_, positions)| positions.len() > 1)
        .collect();

    let mut tally: BTreeMap<usize, usize> = BTreeMap::new();
    for (_, positions) in &repeats {
        for pair in positions.windows(2) {
            for factor in factors(pair[1] - pair[0]) {
                *tally.entry(factor).or_insert(0) += 1;
            }
        }
    }

    debug!(
        letters = reduced.len(),
        repeated_trigrams = repeats.len(),
        factors = tally.len(),
        "kasiski examination"
    );

    KasiskiExamination {
        repeats,
        votes: tally.into_iter().collect(),
    }
}

/// Most probable Vigenère key length of `ciphertext`.
///
/// Fails with [`AnalysisError::KeyLengthUnobservable`] when no trigram
/// repeats.
pub fn find_key_length(ciphertext: &str) -> Result<usize> {
    let key_length = examine(ciphertext).key_length()?;
    debug!(key_length, "kasiski key length");
    Ok(key_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        assert_eq!(factors(12), vec![2, 3, 4, 6, 12]);
        assert_eq!(factors(7), vec![7]);
        assert!(factors(1).is_empty());
    }

    #[test]
    fn test_trigram_positions() {
        let groups = trigram_positions("abcabcx");
        assert_eq!(groups[0], ("abc".to_string(), vec![0, 3]));
        assert_eq!(groups[1], ("bca".to_string(), vec![1]));
        assert_eq!(groups.len(), 4);
        assert!(trigram_positions("ab").is_empty());
    }

    #[test]
    fn test_examine_counts_adjacent_distances() {
        // "abc" at 0, 6 and 18: distances 6 and 12
        let examination = examine("abcdefabcghijklmnoabc");
        assert_eq!(examination.repeats, vec![("abc".to_string(), vec![0, 6, 18])]);
        assert_eq!(
            examination.votes,
            vec![(2, 2), (3, 2), (4, 1), (6, 2), (12, 1)]
        );
        assert_eq!(examination.key_length(), Ok(2));
    }

    #[test]
    fn test_examine_ignores_layout() {
        assert_eq!(
            examine("ABC def, abc!").votes,
            examine("abcdefabc").votes
        );
    }

    #[test]
    fn test_tie_goes_to_smallest_factor() {
        let examination = KasiskiExamination {
            repeats: Vec::new(),
            votes: vec![(3, 4), (5, 4), (7, 2)],
        };
        assert_eq!(examination.key_length(), Ok(3));
    }

    #[test]
    fn test_no_repeats_is_unobservable() {
        assert_eq!(
            find_key_length("abcdefghijklmnopqrstuvwxyz"),
            Err(AnalysisError::KeyLengthUnobservable)
        );
        assert_eq!(find_key_length(""), Err(AnalysisError::KeyLengthUnobservable));
    }
}
