//! Rate book source configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where destination rate tiers are loaded from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// YAML or JSON rate book file
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl RatesConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.file.is_some() {
            self.file = other.file;
        }
        self
    }
}
