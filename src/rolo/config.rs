use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "rolo.json";
const DEFAULT_LINE_WIDTH: usize = 100;

/// Configuration for rolo, read from rolo.json in the working directory or
/// the user config dir. Everything here is presentation/startup tuning; the
/// directory itself is never written anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// Width the list rendering pads to.
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Seed the built-in demo contacts when no contacts file is given.
    #[serde(default = "default_demo_seed")]
    pub demo_seed: bool,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_demo_seed() -> bool {
    true
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            demo_seed: true,
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RoloConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
