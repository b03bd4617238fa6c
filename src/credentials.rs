//! Access key sources for the exchange rate service.
//!
//! The service authenticates with a static key passed as a query-string
//! parameter. Where that key comes from is the caller's business, so the
//! client takes any [`AccessKeySource`]; the implementations here cover
//! the common cases (a `.properties` file kept out of version control,
//! an environment variable, or a literal string in tests).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RateError, Result};

/// Key name the rate service's credential is stored under by default.
pub const DEFAULT_KEY_NAME: &str = "fixer_io";

/// Environment variable consulted by [`EnvVar::default`].
pub const DEFAULT_ENV_VAR: &str = "FIXER_IO_ACCESS_KEY";

/// Something that can produce the service access key.
///
/// Resolved exactly once, when the client is constructed; a source that
/// fails aborts construction.
pub trait AccessKeySource {
    fn access_key(&self) -> Result<String>;
}

/// Reads the access key from a Java-style `key=value` properties file.
///
/// Lines starting with `#` or `!` are comments; blank lines are skipped;
/// whitespace around key and value is trimmed. The first `=` on a line
/// separates key from value.
#[derive(Debug, Clone)]
pub struct PropertiesFile {
    path: PathBuf,
    key: String,
}

impl PropertiesFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_key(path, DEFAULT_KEY_NAME)
    }

    pub fn with_key<P: AsRef<Path>>(path: P, key: &str) -> Self {
        PropertiesFile {
            path: path.as_ref().to_path_buf(),
            key: key.to_string(),
        }
    }
}

impl AccessKeySource for PropertiesFile {
    fn access_key(&self) -> Result<String> {
        debug!("Reading access key from {}", self.path.display());
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            RateError::configuration_io(
                format!("could not read properties file {}", self.path.display()),
                e,
            )
        })?;

        parse_property(&contents, &self.key).ok_or_else(|| {
            RateError::configuration(format!(
                "key '{}' not found in {}",
                self.key,
                self.path.display()
            ))
        })
    }
}

fn parse_property(contents: &str, key: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().to_string())
}

/// Reads the access key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvVar {
    name: String,
}

impl EnvVar {
    pub fn new(name: &str) -> Self {
        EnvVar {
            name: name.to_string(),
        }
    }
}

impl Default for EnvVar {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_VAR)
    }
}

impl AccessKeySource for EnvVar {
    fn access_key(&self) -> Result<String> {
        std::env::var(&self.name).map_err(|_| {
            RateError::configuration(format!("environment variable '{}' is not set", self.name))
        })
    }
}

/// A literal access key, for tests or callers that manage credentials
/// themselves.
#[derive(Debug, Clone)]
pub struct StaticKey(pub String);

impl AccessKeySource for StaticKey {
    fn access_key(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
