//! Command-line configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{MAX_MULTIPLIER, MIN_MULTIPLIER, QUESTION_CHOICES};
use crate::game::Game;

pub const USAGE: &str = "\
Edutainment - Terminal Times Tables Quiz

Usage: edutainment [options]

Options:
  -m, --max <2-12>        Starting max multiplier
  -q, --questions <n>     Number of questions (5, 10, 15, 20, 25, 30)
      --seed <n>          Seed question generation
      --data-dir <path>   Save directory (default ~/.edutainment)
      --stats             Show lifetime stats and exit
      --reset-stats       Clear high score and stats, then exit
  -v, --version           Show version information
  -h, --help              Show this help message";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid value '{value}' for {option}")]
    InvalidValue { option: String, value: String },
    #[error("Max multiplier must be between 2 and 12, got {0}")]
    MultiplierOutOfRange(u32),
    #[error("Question count must be one of 5, 10, 15, 20, 25, 30, got {0}")]
    UnsupportedQuestionCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Play,
    PrintStats,
    ResetStats,
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub command: Command,
    pub max_multiplier: Option<u32>,
    pub question_count: Option<usize>,
    pub seed: Option<u64>,
    pub data_dir: Option<PathBuf>,
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-m" | "--max" => {
                    let value: u32 = parse_value(&arg, args.next())?;
                    if !(MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&value) {
                        return Err(ConfigError::MultiplierOutOfRange(value));
                    }
                    options.max_multiplier = Some(value);
                }
                "-q" | "--questions" => {
                    let value: usize = parse_value(&arg, args.next())?;
                    if !QUESTION_CHOICES.contains(&value) {
                        return Err(ConfigError::UnsupportedQuestionCount(value));
                    }
                    options.question_count = Some(value);
                }
                "--seed" => options.seed = Some(parse_value(&arg, args.next())?),
                "--data-dir" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    options.data_dir = Some(PathBuf::from(value));
                }
                "--stats" => options.command = Command::PrintStats,
                "--reset-stats" => options.command = Command::ResetStats,
                "-v" | "--version" => options.command = Command::Version,
                "-h" | "--help" => options.command = Command::Help,
                _ => return Err(ConfigError::UnknownOption(arg.clone())),
            }
        }

        Ok(options)
    }

    /// Override the remembered setup with values given on the command line.
    pub fn apply_to(&self, game: &mut Game) {
        if let Some(max) = self.max_multiplier {
            game.set_max_multiplier(max);
        }
        if let Some(count) = self.question_count {
            game.set_question_count(count);
        }
    }
}

fn parse_value<T: std::str::FromStr>(option: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(option.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        option: option.to_string(),
        value,
    })
}
