//! Constants used throughout the dayforge application

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["dayforge.json", "dayforge.yaml", "dayforge.yml"];

/// Default template file suffix
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Ignore file name for user-supplied template packs
pub const IGNORE_FILE: &str = ".forgeignore";

/// Directory holding downloaded puzzle inputs
pub const DATA_DIR: &str = "data";

/// Cached instruction page in the working directory
pub const INSTRUCTIONS_FILE: &str = "instructions.html";

/// Base URL of the puzzle site
pub const AOC_BASE_URL: &str = "https://adventofcode.com";

/// Environment variable holding the session cookie
pub const SESSION_TOKEN_VAR: &str = "AOC_SESSION_TOKEN";

/// Environment variable holding the 32-byte input mirror key
pub const AES_KEY_VAR: &str = "AOC_AES_KEY";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
