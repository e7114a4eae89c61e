use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::Result;

/// Durable keys the console consults across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Set once the wizard is finished or skipped; the wizard is not shown again
    SkipGetStarted,
    /// Mirrors the last analytics preference the broker accepted
    AllowAnalytics,
    /// Deployment kind reported at login ("docker", "k8s")
    Env,
    /// Kubernetes namespace the broker runs in
    Namespace,
}

impl Flag {
    pub fn key(&self) -> &'static str {
        match self {
            Flag::SkipGetStarted => "skip_get_started",
            Flag::AllowAnalytics => "allow_analytics",
            Flag::Env => "env",
            Flag::Namespace => "namespace",
        }
    }
}

/// File-backed string flags. Every `set` rewrites the whole file; concurrent
/// writers are last-write-wins.
#[derive(Debug)]
pub struct FlagStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FlagStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            debug!("Flag file {:?} does not exist yet", path);
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn get(&self, flag: Flag) -> Option<&str> {
        self.values.get(flag.key()).map(String::as_str)
    }

    pub fn get_bool(&self, flag: Flag) -> bool {
        self.get(flag).map(|v| v == "true").unwrap_or(false)
    }

    /// Write the flag through to the file. Memory only changes once the
    /// write succeeded.
    pub fn set(&mut self, flag: Flag, value: impl ToString) -> Result<()> {
        let mut values = self.values.clone();
        values.insert(flag.key().to_string(), value.to_string());
        self.persist(&values)?;
        self.values = values;
        info!("Flag {} set", flag.key());
        Ok(())
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_flag_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("flags.toml");

        let mut store = FlagStore::open(&path).unwrap();
        assert!(!store.get_bool(Flag::SkipGetStarted));
        store.set(Flag::SkipGetStarted, true).unwrap();
        store.set(Flag::Namespace, "streaming").unwrap();

        let reopened = FlagStore::open(&path).unwrap();
        assert!(reopened.get_bool(Flag::SkipGetStarted));
        assert_eq!(reopened.get(Flag::Namespace), Some("streaming"));
        assert_eq!(reopened.get(Flag::Env), None);
    }

    #[test]
    fn later_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flags.toml");

        let mut first = FlagStore::open(&path).unwrap();
        let mut second = FlagStore::open(&path).unwrap();
        first.set(Flag::AllowAnalytics, true).unwrap();
        second.set(Flag::AllowAnalytics, false).unwrap();

        let reopened = FlagStore::open(&path).unwrap();
        assert!(!reopened.get_bool(Flag::AllowAnalytics));
    }

    #[test]
    fn non_boolean_value_reads_false() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FlagStore::open(dir.path().join("flags.toml")).unwrap();
        store.set(Flag::Env, "docker").unwrap();
        assert!(!store.get_bool(Flag::Env));
    }

    #[test]
    fn failed_write_leaves_value_unset() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut store = FlagStore::open(blocker.join("flags.toml")).unwrap();
        assert!(store.set(Flag::AllowAnalytics, true).is_err());
        assert_eq!(store.get(Flag::AllowAnalytics), None);
    }
}
