//! Pure guess-distance function and proximity classification.

/// Distance at or beyond which a miss is treated as evidence of scripted
/// probing rather than human error.
pub const FAR_MISS_DISTANCE: usize = 2;

/// Distance between a stored secret and a guess.
///
/// Length difference plus per-position mismatches over the common prefix,
/// compared per byte, case-sensitively. Not a true edit distance: there is
/// no insertion/deletion alignment beyond the fixed length-difference term,
/// so a single dropped leading byte shifts every later position.
pub fn guess_distance(secret: &[u8], guess: &[u8]) -> usize {
    let length_gap = secret.len().abs_diff(guess.len());
    let mismatches = secret
        .iter()
        .zip(guess.iter())
        .filter(|(s, g)| s != g)
        .count();
    length_gap + mismatches
}

/// Classification of a guess by its distance from the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Proximity {
    /// Distance 0: the guess equals the retained secret.
    Exact,
    /// Distance exactly 1: a single typo or one-byte length slip.
    Close,
    /// Distance [`FAR_MISS_DISTANCE`] or more.
    Far,
}

impl Proximity {
    /// Classify a raw distance.
    pub fn of(distance: usize) -> Self {
        match distance {
            0 => Proximity::Exact,
            d if d < FAR_MISS_DISTANCE => Proximity::Close,
            _ => Proximity::Far,
        }
    }
}
