//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::servo::ServoConfig;

/// Maximum number of servos in one configuration file.
pub const MAX_SERVOS: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named servo configurations.
    #[serde(default)]
    pub servos: FnvIndexMap<String<32>, ServoConfig, MAX_SERVOS>,
}

impl SystemConfig {
    /// Get a servo configuration by key.
    pub fn servo(&self, key: &str) -> Option<&ServoConfig> {
        self.servos
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    /// List all servo keys.
    pub fn servo_names(&self) -> impl Iterator<Item = &str> {
        self.servos.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            servos: FnvIndexMap::new(),
        }
    }
}
