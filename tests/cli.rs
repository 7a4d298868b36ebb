use clap::Parser;
use netprofiles::cli::{Cli, Command};

#[test]
fn parses_list() {
    let cli = Cli::try_parse_from(["netprofiles", "list"]).expect("cli parse should work");
    assert!(matches!(cli.command, Command::List));
    assert!(!cli.json);
    assert!(cli.config.is_none());
}

#[test]
fn parses_show() {
    let cli =
        Cli::try_parse_from(["netprofiles", "show", "ropsten"]).expect("cli parse should work");
    match cli.command {
        Command::Show(show) => assert_eq!(show.network, "ropsten"),
        _ => panic!("expected show command"),
    }
}

#[test]
fn parses_gas_with_large_reported_price() {
    let cli = Cli::try_parse_from([
        "netprofiles",
        "gas",
        "testnet_aurora",
        "--reported",
        "340282366920938463463374607431768211455",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Gas(gas) => {
            assert_eq!(gas.network, "testnet_aurora");
            assert_eq!(gas.reported, u128::MAX);
        }
        _ => panic!("expected gas command"),
    }
}

#[test]
fn gas_requires_reported_price() {
    assert!(Cli::try_parse_from(["netprofiles", "gas", "ropsten"]).is_err());
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "netprofiles",
        "check",
        "--config",
        "deploy/networks.toml",
        "--env-file",
        "deploy/.env",
        "--json",
        "-vv",
    ])
    .expect("cli parse should work");
    assert!(matches!(cli.command, Command::Check));
    assert_eq!(
        cli.config.as_deref().and_then(|path| path.to_str()),
        Some("deploy/networks.toml")
    );
    assert_eq!(
        cli.env_file.as_deref().and_then(|path| path.to_str()),
        Some("deploy/.env")
    );
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
}
