//! Quiz session state machine.
//!
//! A `Game` moves `NotStarted -> InProgress -> Finished` and returns to
//! `NotStarted` only through [`Game::play_again`]. Every operation completes
//! immediately; the advisory text for the player comes back as a [`Feedback`].

use crate::constants::{
    DEFAULT_MAX_MULTIPLIER, DEFAULT_QUESTION_COUNT, MAX_INPUT_LEN, MAX_MULTIPLIER,
    MIN_MULTIPLIER, QUESTION_CHOICES, STARTING_SKIPS,
};
use crate::question::{generate_questions, Question};
use crate::stats::{GameSummary, UserStats};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// Why a submitted answer was not scored. The question does not advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("Empty input, please enter a number.")]
    EmptyInput,
    #[error("Invalid Input please enter a valid number")]
    InvalidNumber,
}

/// Advisory message produced by answering or skipping a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    /// Wrong answer, one point taken away.
    IncorrectPenalized,
    /// Wrong answer with the score already at zero.
    IncorrectNoPenalty,
    Skipped,
    LastQuestionSkipped,
    SkipDenied,
    Rejected(AnswerError),
}

impl Feedback {
    /// True for messages that leave the current question unchanged.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Feedback::SkipDenied | Feedback::Rejected(_))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => f.write_str("Correct +1 Point"),
            Feedback::IncorrectPenalized => f.write_str("Incorrect -1 Point"),
            Feedback::IncorrectNoPenalty => f.write_str("Incorrect No Point"),
            Feedback::Skipped => f.write_str("Question Skipped Successfully No Point"),
            Feedback::LastQuestionSkipped => f.write_str("Last Question skipped game over"),
            Feedback::SkipDenied => f.write_str("Question can't be skipped"),
            Feedback::Rejected(err) => write!(f, "{}", err),
        }
    }
}

/// One play-through from setup to game over, plus the high score and
/// lifetime stats carried across play-throughs.
#[derive(Debug, Clone)]
pub struct Game {
    /// Largest factor used when generating questions (2..=12).
    pub max_multiplier: u32,
    /// Number of questions per session, one of `QUESTION_CHOICES`.
    pub question_count: usize,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub correct_answers: u32,
    pub skips_remaining: u32,
    /// Raw text typed for the current question.
    pub pending_input: String,
    pub high_score: u32,
    pub game_state: GameState,
    pub stats: UserStats,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
            question_count: DEFAULT_QUESTION_COUNT,
            questions: Vec::new(),
            current_index: 0,
            correct_answers: 0,
            skips_remaining: STARTING_SKIPS,
            pending_input: String::new(),
            high_score: 0,
            game_state: GameState::NotStarted,
            stats: UserStats::new(),
        }
    }

    // ---- setup ------------------------------------------------------------

    /// Set the difficulty, clamped to the supported range.
    /// Returns false (and changes nothing) once a session has started.
    pub fn set_max_multiplier(&mut self, value: u32) -> bool {
        if self.game_state != GameState::NotStarted {
            return false;
        }
        self.max_multiplier = value.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER);
        true
    }

    pub fn increase_max_multiplier(&mut self) -> bool {
        self.set_max_multiplier(self.max_multiplier.saturating_add(1))
    }

    pub fn decrease_max_multiplier(&mut self) -> bool {
        self.set_max_multiplier(self.max_multiplier.saturating_sub(1))
    }

    /// Set the question count. Only values from `QUESTION_CHOICES` are accepted.
    pub fn set_question_count(&mut self, count: usize) -> bool {
        if self.game_state != GameState::NotStarted || !QUESTION_CHOICES.contains(&count) {
            return false;
        }
        self.question_count = count;
        true
    }

    pub fn next_question_count(&mut self) -> bool {
        let idx = self.question_choice_index();
        let next = (idx + 1).min(QUESTION_CHOICES.len() - 1);
        self.set_question_count(QUESTION_CHOICES[next])
    }

    pub fn previous_question_count(&mut self) -> bool {
        let idx = self.question_choice_index();
        self.set_question_count(QUESTION_CHOICES[idx.saturating_sub(1)])
    }

    fn question_choice_index(&self) -> usize {
        QUESTION_CHOICES
            .iter()
            .position(|&c| c == self.question_count)
            .unwrap_or(0)
    }

    // ---- lifecycle --------------------------------------------------------

    /// Generate and shuffle a fresh set of questions and begin answering.
    ///
    /// Valid from any state. Progress, score and skips of the previous
    /// session are discarded; the high score is left alone.
    pub fn start_game<R: Rng>(&mut self, rng: &mut R) {
        let mut questions = generate_questions(self.max_multiplier, self.question_count, rng);
        questions.shuffle(rng);

        self.questions = questions;
        self.current_index = 0;
        self.correct_answers = 0;
        self.skips_remaining = STARTING_SKIPS;
        self.pending_input.clear();
        self.game_state = GameState::InProgress;

        info!(
            max_multiplier = self.max_multiplier,
            question_count = self.question_count,
            "game started"
        );

        if self.questions.is_empty() {
            self.finish();
        }
    }

    /// Score the pending answer, or skip the current question when `is_skipping`.
    ///
    /// Returns `None` when the answer finished the game (the game-over summary
    /// replaces the per-question message) or when no session is in progress.
    pub fn process_answer(&mut self, is_skipping: bool) -> Option<Feedback> {
        if self.game_state != GameState::InProgress {
            warn!(state = ?self.game_state, "answer processed outside of a running game");
            return None;
        }

        if is_skipping {
            return Some(self.skip());
        }

        let guess = match self.validate_input() {
            Ok(guess) => guess,
            Err(err) => {
                debug!(input = %self.pending_input, error = %err, "answer rejected");
                return Some(Feedback::Rejected(err));
            }
        };

        let correct = self.current_question()?.is_correct(guess);
        let feedback = self.score(correct);

        self.current_index += 1;
        if self.current_index == self.total_questions() {
            self.finish();
            return None;
        }

        self.pending_input.clear();
        Some(feedback)
    }

    pub fn submit_answer(&mut self) -> Option<Feedback> {
        self.process_answer(false)
    }

    pub fn skip_question(&mut self) -> Option<Feedback> {
        self.process_answer(true)
    }

    /// Fold the score into the high score, record a finished session in the
    /// lifetime stats, and reset everything back to setup.
    ///
    /// Returns the summary of the recorded session, or `None` when the session
    /// was abandoned before it finished (or never started).
    pub fn play_again(&mut self) -> Option<GameSummary> {
        let summary = (self.game_state == GameState::Finished).then(|| {
            GameSummary::new(self.correct_answers, self.total_questions(), self.high_score)
        });

        if let Some(summary) = &summary {
            self.stats.record(summary);
            info!(
                score = summary.correct_answers,
                total = summary.question_count,
                won = summary.won,
                "game recorded"
            );
        }

        if self.correct_answers > self.high_score {
            info!(
                old = self.high_score,
                new = self.correct_answers,
                "new high score"
            );
            self.high_score = self.correct_answers;
        }

        self.questions.clear();
        self.current_index = 0;
        self.correct_answers = 0;
        self.pending_input.clear();
        self.skips_remaining = STARTING_SKIPS;
        self.game_state = GameState::NotStarted;

        summary
    }

    fn skip(&mut self) -> Feedback {
        if self.skips_remaining == 0 {
            return Feedback::SkipDenied;
        }

        self.current_index += 1;
        if self.current_index == self.total_questions() {
            // Skipping the final question does not spend a skip.
            self.finish();
            return Feedback::LastQuestionSkipped;
        }

        self.skips_remaining -= 1;
        self.pending_input.clear();
        debug!(skips_remaining = self.skips_remaining, "question skipped");
        Feedback::Skipped
    }

    fn validate_input(&self) -> Result<i64, AnswerError> {
        if self.pending_input.is_empty() {
            return Err(AnswerError::EmptyInput);
        }
        self.pending_input
            .parse::<i64>()
            .map_err(|_| AnswerError::InvalidNumber)
    }

    fn score(&mut self, correct: bool) -> Feedback {
        if correct {
            self.correct_answers += 1;
            Feedback::Correct
        } else if self.correct_answers > 0 {
            self.correct_answers -= 1;
            Feedback::IncorrectPenalized
        } else {
            Feedback::IncorrectNoPenalty
        }
    }

    fn finish(&mut self) {
        self.game_state = GameState::Finished;
        info!(
            score = self.correct_answers,
            total = self.total_questions(),
            "game finished"
        );
    }

    // ---- answer entry -----------------------------------------------------

    /// Append a typed character. Validation waits until the answer is submitted.
    pub fn push_char(&mut self, c: char) {
        if self.game_state != GameState::InProgress
            || c.is_control()
            || self.pending_input.chars().count() >= MAX_INPUT_LEN
        {
            return;
        }
        self.pending_input.push(c);
    }

    pub fn backspace(&mut self) {
        self.pending_input.pop();
    }

    pub fn clear_input(&mut self) {
        self.pending_input.clear();
    }

    // ---- queries ----------------------------------------------------------

    pub fn current_question(&self) -> Option<&Question> {
        if self.game_state != GameState::InProgress {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions_left(&self) -> usize {
        self.total_questions().saturating_sub(self.current_index)
    }

    /// 1-based number of the question being answered.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn is_finished(&self) -> bool {
        self.game_state == GameState::Finished
    }
}
