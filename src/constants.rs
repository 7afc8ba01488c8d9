// Setup bounds
pub const MIN_MULTIPLIER: u32 = 2;
pub const MAX_MULTIPLIER: u32 = 12;
pub const QUESTION_CHOICES: [usize; 6] = [5, 10, 15, 20, 25, 30];

// Defaults for a fresh profile
pub const DEFAULT_MAX_MULTIPLIER: u32 = 2;
pub const DEFAULT_QUESTION_COUNT: usize = 5;

// Skips granted at the start of every session
pub const STARTING_SKIPS: u32 = 3;

// Terminal loop
pub const INPUT_POLL_MS: u64 = 50;

// Longest answer the input field accepts (144 is the largest product)
pub const MAX_INPUT_LEN: usize = 6;

// Save system constants
pub const DATA_DIR_NAME: &str = ".edutainment";
pub const PROFILE_FILENAME: &str = "profile.json";
pub const PROFILE_VERSION: u32 = 1;
pub const LOG_FILENAME: &str = "edutainment.log";
pub const LOG_ENV_VAR: &str = "EDUTAINMENT_LOG";
