use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "netprofiles";
const NETWORKS_FILE: &str = "networks.toml";
pub const CONFIG_ENV_VAR: &str = "NETPROFILES_CONFIG";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: Option<PathBuf>,
    working_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_dir = dirs::config_dir().map(|root| root.join(APP_DIR));
        let working_dir = env::current_dir()?;

        Ok(Self::new(working_dir, config_dir))
    }

    pub fn new(working_dir: PathBuf, config_dir: Option<PathBuf>) -> Self {
        Self {
            config_dir,
            working_dir,
        }
    }

    /// Candidate networks files, highest priority first. An explicit path
    /// and `NETPROFILES_CONFIG` are handled by [`AppPaths::select`].
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.working_dir.join(NETWORKS_FILE)];
        if let Some(dir) = &self.config_dir {
            candidates.push(dir.join(NETWORKS_FILE));
        }
        candidates
    }

    pub fn networks_file(&self, explicit: Option<&Path>) -> AppResult<PathBuf> {
        let from_env = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        self.select(explicit, from_env)
    }

    /// Picks the networks file: `explicit`, then `from_env`, then the first
    /// existing candidate. A requested path that is missing is an error, not
    /// a fallthrough.
    pub fn select(
        &self,
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
    ) -> AppResult<PathBuf> {
        let requested = explicit.map(Path::to_path_buf).or(from_env);

        if let Some(path) = requested {
            if !path.is_file() {
                return Err(AppError::Config(format!(
                    "networks file {} does not exist",
                    path.display()
                )));
            }
            return Ok(path);
        }

        let candidates = self.candidates();
        candidates
            .iter()
            .find(|path| path.is_file())
            .cloned()
            .ok_or_else(|| {
                let searched = candidates
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                AppError::Config(format!(
                    "no networks file found (searched {searched}). \
                     pass --config or set {CONFIG_ENV_VAR}"
                ))
            })
    }
}
