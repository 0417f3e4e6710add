use std::{env, str::FromStr};
use types::{Result, err};

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/dashboard";
pub const DEFAULT_SESSION_KEY: &str = "clinic-auth-token";
pub const DEFAULT_MAX_REDIRECTS: usize = 8;

/// Whether the navigation guard applies the authorization policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardMode {
    #[default]
    Enforce,
    /// Every navigation is allowed without looking at the session.
    Bypass,
}

impl FromStr for GuardMode {
    type Err = types::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enforce" => Ok(Self::Enforce),
            "bypass" => Ok(Self::Bypass),
            other => Err(err!("unknown guard mode `{}` (expected `enforce` or `bypass`)", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub guard_mode: GuardMode,
    pub login_path: String,
    pub home_path: String,
    pub max_redirects: usize,
    /// Local storage key the browser client keeps the session under.
    pub session_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            guard_mode: GuardMode::Enforce,
            login_path: DEFAULT_LOGIN_PATH.into(),
            home_path: DEFAULT_HOME_PATH.into(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            session_key: DEFAULT_SESSION_KEY.into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let guard_mode = match lookup("CLINIC_GUARD_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|e| err!("invalid CLINIC_GUARD_MODE: {}", e))?,
            None => defaults.guard_mode,
        };
        let max_redirects = match lookup("CLINIC_MAX_REDIRECTS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| err!("invalid CLINIC_MAX_REDIRECTS `{}`: {}", raw, e))?,
            None => defaults.max_redirects,
        };

        Ok(Self {
            guard_mode,
            login_path: path_var(&lookup, "CLINIC_LOGIN_PATH")?.unwrap_or(defaults.login_path),
            home_path: path_var(&lookup, "CLINIC_HOME_PATH")?.unwrap_or(defaults.home_path),
            max_redirects,
            session_key: lookup("CLINIC_SESSION_KEY").unwrap_or(defaults.session_key),
        })
    }
}

fn path_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<String>> {
    match lookup(name) {
        Some(path) if !path.starts_with('/') => {
            Err(err!("invalid {}: `{}` is not an absolute path", name, path))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
