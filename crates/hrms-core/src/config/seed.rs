//! Startup seeding configuration.

use serde::{Deserialize, Serialize};

/// Controls the demo data inserted into an empty store at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed the default accounts and sample employees when no user exists.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
