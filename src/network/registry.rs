use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

use super::gas::GasPricePolicy;
use super::profile::NetworkProfile;
use super::secret::Secret;

/// Named network profiles plus the optional block-explorer verification key.
///
/// Populated once during start-up and then shared as `&NetworkProfileRegistry`;
/// there is no way to alter a profile after it has been registered.
#[derive(Debug, Default)]
pub struct NetworkProfileRegistry {
    profiles: BTreeMap<String, NetworkProfile>,
    chain_ids: HashMap<u64, String>,
    verification_credential: Option<Secret>,
}

impl NetworkProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verification_credential(mut self, credential: Option<Secret>) -> Self {
        self.verification_credential = credential;
        self
    }

    pub fn register(&mut self, name: &str, profile: NetworkProfile) -> AppResult<()> {
        if name.trim().is_empty() {
            return Err(AppError::invalid(name, "profile name must not be empty"));
        }
        if self.contains(name) {
            return Err(AppError::DuplicateProfile(name.to_string()));
        }

        profile
            .check()
            .map_err(|reason| AppError::invalid(name, reason))?;

        if let Some(existing) = self.chain_ids.get(&profile.chain_id()) {
            return Err(AppError::invalid(
                name,
                format!(
                    "chain id {} is already used by profile `{existing}`",
                    profile.chain_id()
                ),
            ));
        }

        if profile.is_live() && profile.gas_price_policy() == GasPricePolicy::NetworkDefault {
            warn!(profile = name, "live network submits the network-reported gas price as-is");
        }

        debug!(
            profile = name,
            chain_id = profile.chain_id(),
            accounts = profile.accounts().len(),
            live = profile.is_live(),
            "registered network profile"
        );

        self.chain_ids.insert(profile.chain_id(), name.to_string());
        self.profiles.insert(name.to_string(), profile);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> AppResult<&NetworkProfile> {
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| AppError::UnknownProfile(name.to_string()))?;
        debug!(profile = name, chain_id = profile.chain_id(), "resolved network profile");
        Ok(profile)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn effective_gas_price(profile: &NetworkProfile, reported_wei: u128) -> u128 {
        profile.gas_price_policy().effective_gas_price(reported_wei)
    }

    pub fn verification_credential(&self) -> Option<&str> {
        self.verification_credential.as_ref().map(Secret::expose)
    }

    pub fn profiles(&self) -> impl Iterator<Item = (&str, &NetworkProfile)> {
        self.profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
