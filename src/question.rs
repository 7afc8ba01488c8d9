//! Multiplication question generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated multiplication question. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    /// Prompt shown to the player, e.g. "What is 3 x 4?"
    pub text: String,
    /// The two factors that were drawn.
    pub factors: (u32, u32),
    /// Product of the factors, widened so any pair of `u32` factors fits.
    pub answer: u64,
}

impl Question {
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: format!("What is {} x {}?", a, b),
            factors: (a, b),
            answer: u64::from(a) * u64::from(b),
        }
    }

    pub fn is_correct(&self, guess: i64) -> bool {
        u64::try_from(guess).map_or(false, |guess| guess == self.answer)
    }
}

/// Generate `count` questions with both factors drawn uniformly from `1..=max_multiplier`.
///
/// Returns an empty list when `max_multiplier` is 0. Generation order carries no meaning;
/// callers shuffle the result.
pub fn generate_questions<R: Rng + ?Sized>(
    max_multiplier: u32,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    if max_multiplier == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let a = rng.gen_range(1..=max_multiplier);
            let b = rng.gen_range(1..=max_multiplier);
            Question::new(a, b)
        })
        .collect()
}
