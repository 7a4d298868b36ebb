use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "netprofiles",
    version,
    about = "Inspect and validate deployment network profiles"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Networks file (TOML or JSON)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Load secrets from this env file instead of ./.env")]
    pub env_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List,
    Show(ShowArgs),
    Gas(GasArgs),
    Check,
    Verification,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Network profile name")]
    pub network: String,
}

#[derive(Debug, Args)]
pub struct GasArgs {
    #[arg(help = "Network profile name")]
    pub network: String,
    #[arg(long, help = "Gas price reported by the network, in wei")]
    pub reported: u128,
}
