mod cli {
    pub use netprofiles::cli::*;
}

mod context {
    pub use netprofiles::context::*;
}

mod error {
    pub use netprofiles::error::*;
}

mod network {
    pub use netprofiles::network::*;
}

mod views {
    pub use netprofiles::commands::views::*;
}

mod fixtures {
    use netprofiles::{GasPricePolicy, NetworkProfile, NetworkProfileRegistry, Secret};

    pub const KEY: &str = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    pub fn aurora() -> NetworkProfile {
        NetworkProfile::new("https://testnet.aurora.dev", 1_313_161_555)
            .with_accounts(vec![Secret::new(KEY)])
            .with_gas_price_policy(GasPricePolicy::Fixed {
                wei: 120_000_000_000,
            })
    }

    pub fn ropsten() -> NetworkProfile {
        NetworkProfile::new("https://ropsten.infura.io/v3/project-key", 3)
            .with_accounts(vec![Secret::new(KEY)])
            .with_gas_price_policy(GasPricePolicy::Multiplier { factor: 2.0 })
            .live(true)
    }

    pub fn registry(verification: Option<&str>) -> NetworkProfileRegistry {
        let mut registry = NetworkProfileRegistry::new()
            .with_verification_credential(verification.map(Secret::new));
        registry
            .register("testnet_aurora", aurora())
            .expect("valid profile");
        registry.register("ropsten", ropsten()).expect("valid profile");
        registry
    }
}

mod list_under_test {
    #![allow(dead_code)]

    include!("../src/commands/list.rs");

    use crate::fixtures;

    #[test]
    fn lists_profiles_in_name_order() {
        let registry = fixtures::registry(None);
        let views = registry
            .profiles()
            .map(|(name, profile)| ProfileView::new(name, profile))
            .collect::<Vec<_>>();

        assert_eq!(
            render_lines(&views),
            [
                "1. ropsten (chain 3) live | network price x2",
                "2. testnet_aurora (chain 1313161555) | fixed 120000000000 wei",
            ]
        );
    }

    #[test]
    fn reports_empty_registry() {
        assert_eq!(render_lines(&[]), ["0 networks"]);
    }
}

mod show_under_test {
    #![allow(dead_code)]

    include!("../src/commands/show.rs");

    use crate::fixtures;

    #[test]
    fn shows_redacted_profile() {
        let view = ProfileView::new("ropsten", &fixtures::ropsten());
        let lines = render_lines(&view);

        assert_eq!(lines[0], "ropsten");
        assert_eq!(lines[1], "   endpoint: https://ropsten.infura.io/...");
        assert_eq!(lines[2], "   chain id: 3");
        assert_eq!(lines[3], "   live: yes");
        assert_eq!(lines[4], "   gas price: network price x2");
        assert_eq!(lines[5], "   accounts: 1");
        assert!(lines[6].starts_with("     - sha256:"));

        let text = lines.join("\n");
        assert!(!text.contains(fixtures::KEY));
        assert!(!text.contains("project-key"));
    }

    #[test]
    fn shows_missing_accounts() {
        let profile = netprofiles::NetworkProfile::new("http://localhost:8545", 1337);
        let lines = render_lines(&ProfileView::new("local", &profile));
        assert_eq!(lines.last().map(String::as_str), Some("   accounts: (none)"));
    }
}

mod gas_under_test {
    #![allow(dead_code)]

    include!("../src/commands/gas.rs");

    use crate::fixtures;

    #[test]
    fn quotes_multiplied_price() {
        let quote = build_quote("ropsten".to_string(), &fixtures::ropsten(), 50_000_000_000);
        assert_eq!(quote.effective_wei, 100_000_000_000);
        assert_eq!(
            render_line(&quote),
            "ropsten: 100000000000 wei (network price x2, reported 50000000000 wei)"
        );
    }

    #[test]
    fn quote_json_carries_policy_and_prices() {
        let quote = build_quote("testnet_aurora".to_string(), &fixtures::aurora(), 7);
        let json = serde_json::to_value(&quote).expect("quote should serialize");
        assert_eq!(json["effective_wei"], 120_000_000_000_u64);
        assert_eq!(json["reported_wei"], 7);
        assert_eq!(json["policy"]["policy"], "fixed");
        assert_eq!(json["policy"]["wei"], 120_000_000_000_u64);
    }
}

mod check_under_test {
    #![allow(dead_code)]

    include!("../src/commands/check.rs");

    use crate::fixtures;

    #[test]
    fn summarizes_registry() {
        let registry = fixtures::registry(Some("explorer-key"));
        let report = build_report(Path::new("networks.toml"), &registry);

        assert_eq!(report.profiles, 2);
        assert_eq!(report.live_profiles, 1);
        assert!(report.verification_enabled);
        assert_eq!(
            render_lines(&report),
            [
                "networks.toml: ok",
                "   2 profiles (1 live), verification enabled",
            ]
        );
    }

    #[test]
    fn reports_disabled_verification() {
        let report = build_report(Path::new("networks.toml"), &fixtures::registry(None));
        assert!(render_lines(&report)[1].ends_with("verification disabled"));
    }
}

mod verification_under_test {
    #![allow(dead_code)]

    include!("../src/commands/verification.rs");

    use crate::fixtures;

    #[test]
    fn reports_fingerprint_not_key() {
        let status = build_status(&fixtures::registry(Some("explorer-key")));
        assert!(status.enabled);

        let line = render_line(&status);
        assert!(line.starts_with("verification enabled (sha256:"));
        assert!(!line.contains("explorer-key"));

        let json = serde_json::to_string(&status).expect("status should serialize");
        assert!(!json.contains("explorer-key"));
    }

    #[test]
    fn reports_disabled_without_key() {
        let status = build_status(&fixtures::registry(None));
        assert!(!status.enabled);
        assert_eq!(render_line(&status), "verification disabled");
    }
}

mod output_modes {
    use netprofiles::output::Output;
    use serde_json::json;

    #[test]
    fn text_mode_joins_lines() {
        let output = Output::new(false);
        let rendered = output
            .render(&["a".to_string(), "b".to_string()], &json!({ "ignored": true }))
            .expect("render");
        assert_eq!(rendered, "a\nb");
    }

    #[test]
    fn json_mode_renders_value() {
        let output = Output::new(true);
        let rendered = output
            .render(&["ignored".to_string()], &json!({ "profiles": 2 }))
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["profiles"], 2);
    }
}
