use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

const CONFIG_DIR: &str = "memphis-console";
const CONFIG_FILE: &str = "console.toml";
const FLAGS_FILE: &str = "flags.toml";

/// Set to any non-empty value to mark a sandbox deployment
pub const SANDBOX_ENV_VAR: &str = "MEMPHIS_SANDBOX_ENV";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub general: GeneralConfig,
    pub api: ApiConfig,
    pub console: ConsoleUrlConfig,
    pub flags: FlagsConfig,
    pub environment: EnvironmentConfig,
}

impl ConsoleConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => {
                info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ConsoleConfig = toml::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Sandbox deployments are flagged either in config or through the
    /// environment, matching how the hosted console is built.
    pub fn is_sandbox(&self) -> bool {
        self.environment.sandbox
            || std::env::var(SANDBOX_ENV_VAR)
                .map(|v| !v.is_empty())
                .unwrap_or(false)
    }

    pub fn flags_path(&self) -> PathBuf {
        if let Some(ref path) = self.flags.path {
            return path.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(CONFIG_DIR)
            .join(FLAGS_FILE)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub title: String,
    /// Name shown in the "Welcome, <username>" greeting
    pub username: String,
    /// Sentence shown under the greeting
    pub data_sentence: String,
    /// Dry run mode - every broker call succeeds with canned data and
    /// nothing is sent over the network
    pub dryrun: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: "Memphis".to_string(),
            username: "root".to_string(),
            data_sentence: "Let's get you started".to_string(),
            dryrun: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the management API, e.g. http://localhost:9000/api
    pub url: String,
    /// Bearer token from a console login
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000/api".to_string(),
            token: None,
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleUrlConfig {
    /// Base URL that navigation paths are resolved against
    pub url: String,
}

impl Default for ConsoleUrlConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub sandbox: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConsoleConfig::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.api.url, "http://localhost:9000/api");
        assert!(!config.general.dryrun);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nurl = \"https://broker.example.com/api\"\ntoken = \"abc\"\n\n[general]\ndryrun = true"
        )
        .unwrap();

        let config = ConsoleConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api.url, "https://broker.example.com/api");
        assert_eq!(config.api.token.as_deref(), Some("abc"));
        assert_eq!(config.api.timeout_secs, 15);
        assert!(config.general.dryrun);
        assert_eq!(config.general.username, "root");
    }

    #[test]
    fn explicit_flags_path_wins() {
        let mut config = ConsoleConfig::default();
        config.flags.path = Some(PathBuf::from("/tmp/flags.toml"));
        assert_eq!(config.flags_path(), PathBuf::from("/tmp/flags.toml"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nurl=").unwrap();
        assert!(ConsoleConfig::load_from(file.path()).is_err());
    }
}
