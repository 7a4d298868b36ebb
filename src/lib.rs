pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod network;
pub mod output;

use cli::Cli;
use error::AppResult;

pub use network::{GasPricePolicy, NetworkProfile, NetworkProfileRegistry, Secret};

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
