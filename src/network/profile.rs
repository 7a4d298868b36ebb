use url::Url;

use super::gas::GasPricePolicy;
use super::secret::Secret;

/// Connection and signing parameters for one target network.
///
/// Fields are private so that a profile, once built, cannot be altered;
/// validation happens when it is registered.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkProfile {
    endpoint_url: String,
    chain_id: u64,
    accounts: Vec<Secret>,
    gas_price_policy: GasPricePolicy,
    is_live: bool,
}

impl NetworkProfile {
    pub fn new(endpoint_url: impl Into<String>, chain_id: u64) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            chain_id,
            accounts: Vec::new(),
            gas_price_policy: GasPricePolicy::default(),
            is_live: false,
        }
    }

    pub fn with_accounts(mut self, accounts: Vec<Secret>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_gas_price_policy(mut self, policy: GasPricePolicy) -> Self {
        self.gas_price_policy = policy;
        self
    }

    pub fn live(mut self, is_live: bool) -> Self {
        self.is_live = is_live;
        self
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn accounts(&self) -> &[Secret] {
        &self.accounts
    }

    pub fn gas_price_policy(&self) -> GasPricePolicy {
        self.gas_price_policy
    }

    pub fn is_live(&self) -> bool {
        self.is_live
    }

    /// Endpoint reduced to its origin. Hosted RPC providers put API keys in
    /// the path or query, so anything past the origin is elided.
    pub fn redacted_endpoint(&self) -> String {
        let Ok(url) = Url::parse(&self.endpoint_url) else {
            return "(unparseable endpoint)".to_string();
        };

        let origin = url.origin().ascii_serialization();
        let has_tail = url.path() != "/" || url.query().is_some() || url.fragment().is_some();
        if has_tail {
            format!("{origin}/...")
        } else {
            origin
        }
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if self.endpoint_url.trim().is_empty() {
            return Err("endpoint url is empty".to_string());
        }

        let url = Url::parse(&self.endpoint_url)
            .map_err(|err| format!("endpoint url is not a valid url: {err}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "endpoint url must use http or https, got `{}`",
                url.scheme()
            ));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err("endpoint url has no host".to_string());
        }

        if self.chain_id == 0 {
            return Err("chain id must be a positive integer".to_string());
        }

        self.gas_price_policy.validate()?;

        if self.is_live && self.accounts.is_empty() {
            return Err("live networks need at least one signing account".to_string());
        }
        if self.accounts.iter().any(Secret::is_blank) {
            return Err("account credentials must not be blank".to_string());
        }

        Ok(())
    }
}
