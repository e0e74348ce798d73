//! Reporting types for a single guess submission.

use serde::{Deserialize, Serialize};

/// What a single guess submission did to the verifier.
///
/// Carries no secret or guess material, only the classification, so an
/// embedding gate can log or persist outcomes directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Exact match confirmed; the attempt budget was refilled.
    Accepted,
    /// Wrong by exactly one unit; one attempt consumed.
    CloseMiss,
    /// Wrong by two or more units; one attempt consumed and the lockout
    /// permanently engaged.
    FarMiss,
    /// The guess was exact but the verifier can no longer confirm success.
    /// One attempt consumed.
    Refused(RefusalReason),
}

/// Why an exact guess was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefusalReason {
    /// A far miss was observed earlier in this instance's lifetime.
    LockedOut,
    /// The attempt budget was already spent.
    Exhausted,
}

impl GuessOutcome {
    /// Whether this outcome confirms the guess.
    pub fn is_success(self) -> bool {
        matches!(self, GuessOutcome::Accepted)
    }
}
