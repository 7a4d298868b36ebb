use std::path::{Path, PathBuf};

use crate::config::{self, AppPaths, EnvSecretSource};
use crate::error::AppResult;
use crate::network::NetworkProfileRegistry;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub networks_file: PathBuf,
    pub registry: NetworkProfileRegistry,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        config_path: Option<&Path>,
        env_file: Option<&Path>,
        json: bool,
    ) -> AppResult<Self> {
        let secrets = EnvSecretSource::load(env_file)?;
        let paths = AppPaths::discover()?;
        let networks_file = paths.networks_file(config_path)?;
        let registry = config::load_registry(&networks_file, &secrets)?;
        let output = Output::new(json);

        Ok(Self {
            networks_file,
            registry,
            output,
        })
    }
}
