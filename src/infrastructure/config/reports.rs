//! Report output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the dashboard writes exports.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportsConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

fn default_directory() -> PathBuf {
    PathBuf::from("reports")
}

impl ReportsConfig {
    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.directory.join("last_analysis.json")
    }

    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.directory.join("last_analysis.csv")
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}
