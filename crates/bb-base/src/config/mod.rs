//! Runtime configuration read from the process environment.
//!
//! There is no config file. Values come from environment variables, which
//! the binary may populate from a `.env` file before calling [`AppConfig::load`].
pub mod constants;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use constants::{
    DEFAULT_LOG_FILTER, ENV_FORM_FACTOR, ENV_LOG, ENV_STORE_DIR, ERRORS_DIR, LOG_FILE, LOGS_DIR, STORE_DIR,
};

/// Requested layout branch. `Auto` defers to terminal size at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFactorPreference {
    #[default]
    Auto,
    Desktop,
    Touch,
}

impl FromStr for FormFactorPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "desktop" | "macos" => Ok(Self::Desktop),
            "touch" | "ios" => Ok(Self::Touch),
            other => Err(format!("unknown form factor '{}' (expected desktop, touch or auto)", other)),
        }
    }
}

impl fmt::Display for FormFactorPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Desktop => write!(f, "desktop"),
            Self::Touch => write!(f, "touch"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_dir: PathBuf,
    pub form_factor: FormFactorPreference,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(STORE_DIR),
            form_factor: FormFactorPreference::Auto,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    /// Also returns a warning for each value that was rejected.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to defaults and are reported in the
    /// returned warnings. Config is read before any log subscriber exists.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(dir) = lookup(ENV_STORE_DIR).filter(|d| !d.trim().is_empty()) {
            config.store_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(ENV_FORM_FACTOR) {
            match raw.parse() {
                Ok(pref) => config.form_factor = pref,
                Err(e) => warnings.push(format!("{}: {}, using auto", ENV_FORM_FACTOR, e)),
            }
        }

        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        (config, warnings)
    }

    pub fn log_path(&self) -> PathBuf {
        self.store_dir.join(LOGS_DIR).join(LOG_FILE)
    }

    pub fn errors_dir(&self) -> PathBuf {
        self.store_dir.join(ERRORS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_empty() {
        let (config, warnings) = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(config.store_dir, PathBuf::from(STORE_DIR));
        assert_eq!(config.form_factor, FormFactorPreference::Auto);
    }

    #[test]
    fn overrides_are_applied() {
        let (config, warnings) = AppConfig::from_lookup(lookup_from(&[
            (ENV_STORE_DIR, "/tmp/bb"),
            (ENV_FORM_FACTOR, "Touch"),
            (ENV_LOG, "bookbrain=debug"),
        ]));
        assert!(warnings.is_empty());
        assert_eq!(config.store_dir, PathBuf::from("/tmp/bb"));
        assert_eq!(config.form_factor, FormFactorPreference::Touch);
        assert_eq!(config.log_filter, "bookbrain=debug");
        assert_eq!(config.log_path(), PathBuf::from("/tmp/bb/logs/bookbrain.log"));
        assert_eq!(config.errors_dir(), PathBuf::from("/tmp/bb/errors"));
    }

    #[test]
    fn bad_form_factor_falls_back_to_auto() {
        let (config, warnings) = AppConfig::from_lookup(lookup_from(&[(ENV_FORM_FACTOR, "watch")]));
        assert_eq!(config.form_factor, FormFactorPreference::Auto);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with(ENV_FORM_FACTOR), "{}", warnings[0]);
        assert!(warnings[0].contains("'watch'"), "{}", warnings[0]);
    }

    #[test]
    fn blank_store_dir_is_ignored() {
        let (config, _) = AppConfig::from_lookup(lookup_from(&[(ENV_STORE_DIR, "  ")]));
        assert_eq!(config.store_dir, PathBuf::from(STORE_DIR));
    }

    #[test]
    fn form_factor_parse_accepts_platform_aliases() {
        assert_eq!("macos".parse::<FormFactorPreference>(), Ok(FormFactorPreference::Desktop));
        assert_eq!("ios".parse::<FormFactorPreference>(), Ok(FormFactorPreference::Touch));
        assert_eq!("".parse::<FormFactorPreference>(), Ok(FormFactorPreference::Auto));
        assert!("tv".parse::<FormFactorPreference>().is_err());
    }
}
