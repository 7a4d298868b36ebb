use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = netprofiles::cli::Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = netprofiles::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
