//! Player profile persistence: high score, lifetime stats and last setup,
//! stored as pretty JSON in ~/.edutainment/profile.json.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DATA_DIR_NAME, DEFAULT_MAX_MULTIPLIER, DEFAULT_QUESTION_COUNT, MAX_MULTIPLIER,
    MIN_MULTIPLIER, PROFILE_FILENAME, PROFILE_VERSION, QUESTION_CHOICES,
};
use crate::game::Game;
use crate::stats::UserStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub version: u32,
    pub high_score: u32,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default = "default_max_multiplier")]
    pub max_multiplier: u32,
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// Unix timestamp of the last save, 0 if never saved.
    #[serde(default)]
    pub last_played: i64,
}

fn default_max_multiplier() -> u32 {
    DEFAULT_MAX_MULTIPLIER
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            high_score: 0,
            stats: UserStats::default(),
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
            question_count: DEFAULT_QUESTION_COUNT,
            last_played: 0,
        }
    }
}

impl Profile {
    /// Snapshot the persistent parts of a game.
    pub fn from_game(game: &Game, now: i64) -> Self {
        Self {
            version: PROFILE_VERSION,
            high_score: game.high_score,
            stats: game.stats.clone(),
            max_multiplier: game.max_multiplier,
            question_count: game.question_count,
            last_played: now,
        }
    }

    /// Build a fresh game seeded with this profile.
    /// Out-of-range settings from a hand-edited file fall back to defaults.
    pub fn into_game(self) -> Game {
        let mut game = Game::new();
        game.high_score = self.high_score.max(self.stats.best_score);
        game.stats = self.stats;
        game.max_multiplier = self.max_multiplier.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER);
        if QUESTION_CHOICES.contains(&self.question_count) {
            game.question_count = self.question_count;
        }
        game
    }
}

pub struct ProfileStore {
    data_dir: PathBuf,
}

impl ProfileStore {
    /// Store rooted at ~/.edutainment, creating the directory if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::with_dir(home_dir.join(DATA_DIR_NAME))
    }

    pub fn with_dir(data_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILENAME)
    }

    pub fn exists(&self) -> bool {
        self.profile_path().exists()
    }

    /// Load the profile. A missing file is a fresh profile; an unreadable one is an error.
    pub fn load(&self) -> io::Result<Profile> {
        let json = match fs::read_to_string(self.profile_path()) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Profile::default()),
            Err(e) => return Err(e),
        };

        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self, profile: &Profile) -> io::Result<()> {
        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.profile_path(), json)
    }

    /// Remove the saved profile. Succeeds if there was nothing to remove.
    pub fn reset(&self) -> io::Result<()> {
        match fs::remove_file(self.profile_path()) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
