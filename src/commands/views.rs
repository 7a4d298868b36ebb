use serde::Serialize;

use crate::network::{GasPricePolicy, NetworkProfile, Secret};

/// What the CLI is allowed to reveal about a profile: no credential values
/// and no endpoint path or query.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub endpoint: String,
    pub chain_id: u64,
    pub live: bool,
    pub accounts: Vec<String>,
    pub gas_price: GasPricePolicy,
}

impl ProfileView {
    pub fn new(name: &str, profile: &NetworkProfile) -> Self {
        Self {
            name: name.to_string(),
            endpoint: profile.redacted_endpoint(),
            chain_id: profile.chain_id(),
            live: profile.is_live(),
            accounts: profile.accounts().iter().map(Secret::fingerprint).collect(),
            gas_price: profile.gas_price_policy(),
        }
    }

    pub fn summary_line(&self) -> String {
        let live = if self.live { " live" } else { "" };
        format!(
            "{} (chain {}){} | {}",
            self.name, self.chain_id, live, self.gas_price
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GasQuote {
    pub network: String,
    pub policy: GasPricePolicy,
    pub reported_wei: u128,
    pub effective_wei: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub networks_file: String,
    pub profiles: usize,
    pub live_profiles: usize,
    pub verification_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationStatus {
    pub enabled: bool,
    pub fingerprint: Option<String>,
}
