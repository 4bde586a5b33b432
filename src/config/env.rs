//! Process environment snapshot.
//!
//! # Responsibilities
//! - Capture the ambient environment into an immutable key/value map
//! - Merge a dotenv file underneath it (file provides defaults, the real
//!   environment wins)
//! - Treat empty values the same as absent ones
//!
//! # Design Decisions
//! - Validation and the sequencer take `&Environment`, never the ambient
//!   environment directly, so tests can construct one without touching
//!   real process state
//! - A missing .env file is not an error; set variables are enough

use std::collections::BTreeMap;
use std::path::Path;

/// Immutable snapshot of the configuration environment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Snapshot the ambient process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Look up a variable. Empty values are reported as absent, so every
    /// consumer treats `FOO=` and an unset `FOO` the same way.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Merge a dotenv file into the snapshot. Keys already present keep
    /// their ambient value. Returns the number of keys taken from the file.
    ///
    /// A missing file yields `Ok(0)`; only a malformed file is an error.
    pub fn merge_env_file(&mut self, path: &Path) -> Result<usize, dotenvy::Error> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => return Ok(0),
            Err(e) => return Err(e),
        };

        let mut merged = 0;
        for item in iter {
            let (key, value) = item?;
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value);
                merged += 1;
            }
        }
        Ok(merged)
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_value_is_absent() {
        let env = Environment::from_iter([("PORT", "8080"), ("CORS_ORIGIN", "")]);
        assert_eq!(env.get("PORT"), Some("8080"));
        assert_eq!(env.get("CORS_ORIGIN"), None);
        assert_eq!(env.get("MONGODB_URI"), None);
    }

    #[test]
    fn test_env_file_does_not_override_ambient() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PORT=9999").unwrap();
        writeln!(file, "CORS_ORIGIN=https://example.com").unwrap();

        let mut env = Environment::from_iter([("PORT", "3000")]);
        let merged = env.merge_env_file(file.path()).unwrap();

        assert_eq!(merged, 1);
        assert_eq!(env.get("PORT"), Some("3000"));
        assert_eq!(env.get("CORS_ORIGIN"), Some("https://example.com"));
    }

    #[test]
    fn test_missing_env_file_is_ok() {
        let mut env = Environment::default();
        let merged = env.merge_env_file(Path::new("/nonexistent/.env")).unwrap();
        assert_eq!(merged, 0);
    }
}
