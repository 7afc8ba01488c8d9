//! Lifetime statistics across finished sessions.

use serde::{Deserialize, Serialize};

/// Outcome of one finished session, recorded when the player moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub correct_answers: u32,
    pub question_count: usize,
    pub won: bool,
    pub perfect: bool,
    pub new_high_score: bool,
}

impl GameSummary {
    pub fn new(correct_answers: u32, question_count: usize, previous_high_score: u32) -> Self {
        let correct = correct_answers as usize;
        Self {
            correct_answers,
            question_count,
            // Half or better counts as a win
            won: correct * 2 >= question_count,
            perfect: question_count > 0 && correct == question_count,
            new_high_score: correct_answers > previous_high_score,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    /// Sum of final scores, used for the average.
    pub total_score: u64,
    pub perfect_games: u32,
    #[serde(default)]
    pub best_score: u32,
}

impl UserStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, summary: &GameSummary) {
        self.games_played += 1;
        if summary.won {
            self.games_won += 1;
        } else {
            self.games_lost += 1;
        }
        if summary.perfect {
            self.perfect_games += 1;
        }
        self.total_score += u64::from(summary.correct_answers);
        self.best_score = self.best_score.max(summary.correct_answers);
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.games_played as f64
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.games_played as f64
    }
}
