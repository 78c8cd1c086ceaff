use serde::{Deserialize, Serialize};

/// Report output settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print the ASCII banner before the report
    #[serde(default = "default_true")]
    pub banner: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            banner: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
