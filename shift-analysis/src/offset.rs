//! Shift offset estimation between two distributions

use tracing::{debug, trace};

use crate::distribution::Distribution;
use crate::utils::ALPHABET_LEN;

/// Half the total absolute deviation between `candidate` rotated by
/// `offset` and `reference`
pub fn distance(candidate: &Distribution, reference: &Distribution, offset: usize) -> f64 {
    let mut distance = 0.0;

    for j in 0..ALPHABET_LEN {
        distance += (candidate[(j + offset) % ALPHABET_LEN] - reference[j]).abs() / 2.0;
    }

    distance
}

/// Most probable offset between a candidate and a reference distribution.
///
/// Every offset in `0..26` is scored with [`distance`]; the smallest wins and
/// ties go to the lowest offset.
pub fn estimate_offset(candidate: &Distribution, reference: &Distribution) -> usize {
    let mut best_offset = 0;
    let mut best_distance = f64::INFINITY;

    for offset in 0..ALPHABET_LEN {
        let distance = distance(candidate, reference, offset);
        trace!(offset, distance, "offset distance");

        if distance < best_distance {
            best_distance = distance;
            best_offset = offset;
        }
    }

    debug!(offset = best_offset, distance = best_distance, "estimated offset");
    best_offset
}
