use std::env;
use std::path::PathBuf;

/// Dataset name expected in the working directory.
pub const DEFAULT_INPUT: &str = "CIE_cc_1931_2deg.csv";

/// Overrides the input path.
pub const INPUT_VAR: &str = "CIE_TABLE_INPUT";
/// Turns on wavelength monotonicity checking.
pub const STRICT_VAR: &str = "CIE_TABLE_STRICT";

// ---------------------------------------------------------------------------
// Generator configuration
// ---------------------------------------------------------------------------

/// Settings for one generator run. There are no command-line flags; the
/// environment is the only configuration surface, like `RUST_LOG`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV dataset, relative paths resolve against the working directory.
    pub input: PathBuf,
    /// Reject rows whose wavelength does not strictly increase.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            strict: false,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(INPUT_VAR).ok(), env::var(STRICT_VAR).ok())
    }

    fn from_vars(input: Option<String>, strict: Option<String>) -> Self {
        let mut config = Config::default();
        if let Some(path) = input.filter(|p| !p.is_empty()) {
            config.input = PathBuf::from(path);
        }
        if let Some(flag) = strict {
            config.strict = parse_flag(&flag);
        }
        config
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
