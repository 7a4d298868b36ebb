use std::collections::BTreeMap;
use std::env;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{AppError, AppResult};

const DEFAULT_ENV_FILE: &str = ".env";

/// Where `${NAME}` references in a networks file are resolved.
pub trait SecretSource {
    fn lookup(&self, key: &str) -> AppResult<Option<String>>;
}

/// Process environment, optionally seeded from a `.env` file.
#[derive(Debug, Default)]
pub struct EnvSecretSource;

impl EnvSecretSource {
    /// Loads `env_file` if given (it must exist), otherwise a `.env` in the
    /// current directory when there is one. Variables already set in the
    /// process environment win over file entries.
    pub fn load(env_file: Option<&Path>) -> AppResult<Self> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path).map_err(|err| {
                    AppError::Config(format!("failed to load {}: {err}", path.display()))
                })?;
                debug!(path = %path.display(), "loaded env file");
            }
            None => return Self::load_default_in(&env::current_dir()?),
        }

        Ok(Self)
    }

    /// Loads `dir/.env` when it exists. A missing file is not an error.
    pub fn load_default_in(dir: &Path) -> AppResult<Self> {
        let path = dir.join(DEFAULT_ENV_FILE);
        match dotenvy::from_path(&path) {
            Ok(()) => debug!(path = %path.display(), "loaded env file"),
            Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(AppError::Config(format!(
                    "failed to load {}: {err}",
                    path.display()
                )));
            }
        }

        Ok(Self)
    }
}

impl SecretSource for EnvSecretSource {
    fn lookup(&self, key: &str) -> AppResult<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(AppError::Config(format!(
                "environment variable {key} is not valid unicode"
            ))),
        }
    }
}

/// Fixed in-memory values, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MapSecretSource {
    values: BTreeMap<String, String>,
}

impl MapSecretSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SecretSource for MapSecretSource {
    fn lookup(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}
