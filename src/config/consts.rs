// src/config/consts.rs

// Feed
pub const FEED_ENV: &str = "SORTEOS_FEED";
pub const DEFAULT_FEED_FILE: &str = "resultados.csv";
pub const DEFAULT_HTTP_PORT: u16 = 80;
pub const NET_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "sorteos/0.3";

// Categories
pub const CATEGORY_LOTERIA: &str = "loteria";
pub const CATEGORY_ANIMALITOS: &str = "animalitos";
pub const DEFAULT_CATEGORY: &str = CATEGORY_LOTERIA;
pub const KNOWN_CATEGORIES: [&str; 2] = [CATEGORY_LOTERIA, CATEGORY_ANIMALITOS];

// Local state
pub const LOG_FILE: &str = ".sorteos/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "resultados";
