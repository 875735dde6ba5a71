// src/config/consts.rs

// Net config
pub const PLATFORM_HOST: &str = "na1.api.riotgames.com";
pub const REGIONAL_HOST: &str = "americas.api.riotgames.com";
pub const API_KEY_ENV: &str = "RIOT_API_KEY";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const USER_AGENT: &str = "match_crawler/0.3";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Normalizer
pub const REQUIRED_GAME_MODE: &str = "ARAM";
pub const SLOTS: usize = 10;
pub const PERKS_PER_PLAYER: usize = 6;

// Crawl
/// Known to play the required mode almost exclusively, so the first window nearly always yields a row.
pub const SEED_PLAYER: &str = "Shiera";
pub const SEED_WINDOW: u32 = 20;
pub const WINDOW_MIN: u32 = 5;
pub const WINDOW_MAX: u32 = 10;

// Runner
pub const DEFAULT_STEPS: usize = 20;
pub const DEFAULT_PAUSE_SECS: u64 = 120;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "training_dataset.csv";
