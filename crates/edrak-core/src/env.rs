//! Read-only view of process environment variables.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;

/// Key-value pairs visible to the process at one moment.
///
/// Captured once at the entry point and passed by reference to everything
/// that needs configuration, so the consumers stay pure functions of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment. Values are opaque: non-UTF-8
    /// bytes are replaced lossily rather than dropped. Entries with a
    /// non-UTF-8 name are skipped.
    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        vars.into_iter()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.to_string_lossy().into_owned())))
            .collect()
    }

    /// Merge entries from a dotenv file. Keys already in the snapshot win.
    pub fn merge_env_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let env_file_error = |reason: String| ConfigError::EnvFile {
            path: path.to_path_buf(),
            reason,
        };
        let entries = dotenv::from_path_iter(path).map_err(|e| env_file_error(e.to_string()))?;
        let mut merged = 0usize;
        for entry in entries {
            let (key, value) = entry.map_err(|e| env_file_error(e.to_string()))?;
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value);
                merged += 1;
            }
        }
        ::tracing::debug!(path = %path.display(), merged, "merged env file");
        Ok(())
    }

    /// Value of `key` if it is set to a non-empty string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Whether `key` is set to a non-empty string.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parse `key` into `T`, or return `default` when unset or empty.
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_owned(),
                value: raw.to_owned(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
