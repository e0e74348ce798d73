//! The attempt-accounting verification state machine.

use serde::{Deserialize, Serialize};

use crate::distance::{guess_distance, Proximity};
use crate::outcome::{GuessOutcome, RefusalReason};
use crate::secret::StoredSecret;

/// Number of misses tolerated before the verifier exhausts.
pub const MAX_ATTEMPTS: u32 = 3;

/// Derived three-state view of a verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifierPhase {
    /// Budget remains and no lockout: success is still possible.
    Active,
    /// Budget spent without a lockout. Absorbing.
    Exhausted,
    /// A far miss was observed. Absorbing regardless of remaining budget.
    Locked,
}

/// Guarded verifier for a single protected secret.
///
/// Construct once per secret, then feed it guesses. Wrong guesses consume the
/// attempt budget; a guess two or more units away from the secret permanently
/// locks the instance out of ever confirming success again, even if the
/// numeric budget still shows remaining attempts. Discard and recreate the
/// verifier when the protected secret changes.
pub struct GuardedVerifier {
    secret: StoredSecret,
    attempts_left: u32,
    locked_out: bool,
}

impl GuardedVerifier {
    /// Create a verifier for `secret`, keeping at most
    /// [`MAX_SECRET_LEN`](crate::secret::MAX_SECRET_LEN) bytes of it.
    ///
    /// The empty string is a valid secret. Guesses are never truncated, so
    /// with an over-length secret only the truncated prefix can match.
    pub fn new(secret: &str) -> Self {
        Self {
            secret: StoredSecret::capture(secret),
            attempts_left: MAX_ATTEMPTS,
            locked_out: false,
        }
    }

    /// Check a guess against the stored secret.
    ///
    /// Returns true only for an exact match while the verifier is unlocked
    /// with budget remaining. See [`submit_guess`](Self::submit_guess) for
    /// the outcome-level variant. Total over all inputs; never panics.
    pub fn verify(&mut self, guess: &str) -> bool {
        self.submit_guess(guess).is_success()
    }

    /// Check a guess and report what happened.
    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        let distance = guess_distance(self.secret.as_bytes(), guess.as_bytes());
        match Proximity::of(distance) {
            Proximity::Exact if !self.locked_out && self.attempts_left > 0 => {
                self.attempts_left = MAX_ATTEMPTS;
                tracing::debug!("exact match accepted, attempt budget refilled");
                GuessOutcome::Accepted
            }
            proximity => self.miss(proximity, distance),
        }
    }

    fn miss(&mut self, proximity: Proximity, distance: usize) -> GuessOutcome {
        self.attempts_left = self.attempts_left.saturating_sub(1);
        match proximity {
            Proximity::Exact => {
                // Exact guess while locked out or exhausted: still costs an
                // attempt, never confirms.
                if self.locked_out {
                    GuessOutcome::Refused(RefusalReason::LockedOut)
                } else {
                    GuessOutcome::Refused(RefusalReason::Exhausted)
                }
            }
            Proximity::Close => {
                if self.attempts_left == 0 && !self.locked_out {
                    tracing::debug!("attempt budget exhausted");
                }
                GuessOutcome::CloseMiss
            }
            Proximity::Far => {
                if !self.locked_out {
                    tracing::warn!(distance, "far miss observed, engaging permanent lockout");
                }
                self.locked_out = true;
                GuessOutcome::FarMiss
            }
        }
    }

    /// Remaining attempt budget, in `[0, MAX_ATTEMPTS]`. No side effects.
    pub fn remaining_attempts(&self) -> u32 {
        self.attempts_left
    }

    /// Whether a far miss has permanently disabled this verifier.
    pub fn is_locked_out(&self) -> bool {
        self.locked_out
    }

    /// Current phase. `Locked` wins over `Exhausted` when both hold.
    pub fn phase(&self) -> VerifierPhase {
        if self.locked_out {
            VerifierPhase::Locked
        } else if self.attempts_left == 0 {
            VerifierPhase::Exhausted
        } else {
            VerifierPhase::Active
        }
    }
}
