//! Launcher configuration, read from the environment.

use std::collections::BTreeMap;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Environment variables the launcher reads.
pub const ENV_KEYS: [&str; 4] = ["REDIS_URL", "REBooT_config", "REBooT_section", "DATABASE_URL"];

pub const DEFAULT_DATABASE_URL: &str = ":memory:";

/// Keys are the lowercased environment variable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub redis_url: Option<String>,
    pub reboot_config: Option<String>,
    pub reboot_section: Option<String>,
    pub database_url: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            reboot_config: None,
            reboot_section: None,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl LaunchConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        Self::figment().extract().map_err(Box::new)
    }

    /// Environment values are taken verbatim as strings, so a section named
    /// `2021` or a config named `true` is not parsed into a number or bool.
    pub fn figment() -> Figment {
        let vars: BTreeMap<String, String> = Env::raw()
            .only(&ENV_KEYS)
            .iter()
            .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
            .collect();

        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Serialized::defaults(vars))
    }

    /// The configured section, unless it is missing or blank.
    pub fn section(&self) -> Option<&str> {
        self.reboot_section
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// `(name, value)` pairs for display.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("REDIS_URL", self.redis_url.as_deref()),
            ("REBooT_config", self.reboot_config.as_deref()),
            ("REBooT_section", self.reboot_section.as_deref()),
            ("DATABASE_URL", Some(self.database_url.as_str())),
        ]
    }
}
