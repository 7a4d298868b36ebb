use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config,
        env_file,
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(config.as_deref(), env_file.as_deref(), json)?;

    match command {
        Command::List => commands::list::run(&ctx),
        Command::Show(args) => commands::show::run(&ctx, args),
        Command::Gas(args) => commands::gas::run(&ctx, args),
        Command::Check => commands::check::run(&ctx),
        Command::Verification => commands::verification::run(&ctx),
    }
}
