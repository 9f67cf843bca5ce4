//! Server configuration with multi-source merging

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Deserializer, Serialize};

/// Project-level config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "raqt.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Sessions idle for longer than this are discarded.
    pub session_ttl_secs: u64,
    /// Title of the survey page.
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,
}

/// Accept numbers and booleans as text; figment parses `RAQT_TITLE=2024` as an integer.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            session_ttl_secs: 60 * 60,
            title: raqt::overview::TITLE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from all sources.
    ///
    /// Priority (highest to lowest):
    /// 1. `RAQT_*` environment variables, e.g. `RAQT_PORT`
    /// 2. Explicit config path (if provided)
    /// 3. `./raqt.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if Path::new(CONFIG_FILE).exists() {
            figment = figment.merge(Toml::file(CONFIG_FILE));
        }
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("RAQT_"))
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = ServerConfig::load(None).map_err(|e| *e)?;
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.address(), "127.0.0.1:8501");
            Ok(())
        });
    }

    #[test]
    fn test_project_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                port = 9000
                title = "Ice throw review"
                "#,
            )?;
            jail.set_env("RAQT_PORT", "9100");
            jail.set_env("RAQT_SESSION_TTL_SECS", "30");

            let config = ServerConfig::load(None).map_err(|e| *e)?;
            assert_eq!(config.port, 9100);
            assert_eq!(config.session_ttl_secs, 30);
            assert_eq!(config.title, "Ice throw review");
            assert_eq!(config.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "port = 9000")?;
            jail.create_file("other.toml", "port = 9200\nhost = \"0.0.0.0\"")?;

            let config = ServerConfig::load(Some(Path::new("other.toml"))).map_err(|e| *e)?;
            assert_eq!(config.port, 9200);
            assert_eq!(config.address(), "0.0.0.0:9200");
            Ok(())
        });
    }

    #[test]
    fn test_numeric_title_is_text() {
        Jail::expect_with(|jail| {
            jail.set_env("RAQT_TITLE", "2024");
            let config = ServerConfig::load(None).map_err(|e| *e)?;
            assert_eq!(config.title, "2024");

            jail.set_env("RAQT_TITLE", "true");
            let config = ServerConfig::load(None).map_err(|e| *e)?;
            assert_eq!(config.title, "true");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("RAQT_PORT", "not-a-port");
            assert!(ServerConfig::load(None).is_err());
            Ok(())
        });
    }
}
