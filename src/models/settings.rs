use serde::{Deserialize, Serialize};

pub const DEFAULT_RATE: i64 = 1500;
pub const DEFAULT_ADVANCE: i64 = 500;
pub const DEFAULT_JAZZCASH: &str = "0300-1234567";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Ground rate in rupees per hour.
    #[serde(default = "default_rate")]
    pub rate: i64,
    /// JazzCash / EasyPaisa number the advance is sent to.
    #[serde(default = "default_jazzcash")]
    pub jazzcash: String,
    #[serde(default = "default_advance")]
    pub advance: i64,
}

fn default_rate() -> i64 {
    DEFAULT_RATE
}

fn default_jazzcash() -> String {
    DEFAULT_JAZZCASH.to_string()
}

fn default_advance() -> i64 {
    DEFAULT_ADVANCE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            jazzcash: DEFAULT_JAZZCASH.to_string(),
            advance: DEFAULT_ADVANCE,
        }
    }
}
