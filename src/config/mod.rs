pub mod interpolate;
pub mod paths;
pub mod secrets;
pub mod settings;

use std::path::Path;

use tracing::info;

pub use paths::AppPaths;
pub use secrets::{EnvSecretSource, MapSecretSource, SecretSource};
pub use settings::{GasPriceSettings, NetworkSettings, NetworksFile, VerificationSettings};

use crate::error::{AppError, AppResult};
use crate::network::{GasPricePolicy, NetworkProfile, NetworkProfileRegistry, Secret};

pub fn load_registry(
    path: &Path,
    source: &dyn SecretSource,
) -> AppResult<NetworkProfileRegistry> {
    let file = settings::load(path)?;
    let registry = build_registry(file, source)?;
    info!(
        path = %path.display(),
        profiles = registry.len(),
        verification = registry.verification_credential().is_some(),
        "loaded network profiles"
    );
    Ok(registry)
}

/// Resolves every secret reference in `file` and registers its networks in
/// file order. Stops at the first profile that fails.
pub fn build_registry(
    file: NetworksFile,
    source: &dyn SecretSource,
) -> AppResult<NetworkProfileRegistry> {
    let credential = file
        .verification
        .map(|verification| {
            resolve_secret("verification.api_key", &verification.api_key, source)
        })
        .transpose()?;

    let mut registry = NetworkProfileRegistry::new().with_verification_credential(credential);
    for (name, network) in file.networks {
        if registry.contains(&name) {
            return Err(AppError::DuplicateProfile(name));
        }
        let profile = build_profile(&name, network, source)?;
        registry.register(&name, profile)?;
    }

    Ok(registry)
}

fn build_profile(
    name: &str,
    network: NetworkSettings,
    source: &dyn SecretSource,
) -> AppResult<NetworkProfile> {
    let url = interpolate::expand(&network.url, source)?;
    let chain_id = u64::try_from(network.chain_id)
        .map_err(|_| AppError::invalid(name, "chain id must be a positive integer"))?;

    let accounts = network
        .accounts
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let field = format!("networks.{name}.accounts[{index}]");
            resolve_secret(&field, raw, source)
        })
        .collect::<AppResult<Vec<_>>>()?;

    let policy = match network.gas_price.unwrap_or(GasPriceSettings::NetworkDefault) {
        GasPriceSettings::Fixed { wei } => {
            let wei = u128::try_from(wei)
                .map_err(|_| AppError::invalid(name, "fixed gas price must not be negative"))?;
            GasPricePolicy::Fixed { wei }
        }
        GasPriceSettings::Multiplier { factor } => GasPricePolicy::Multiplier { factor },
        GasPriceSettings::NetworkDefault => GasPricePolicy::NetworkDefault,
    };

    Ok(NetworkProfile::new(url, chain_id)
        .with_accounts(accounts)
        .with_gas_price_policy(policy)
        .live(network.live))
}

fn resolve_secret(field: &str, raw: &str, source: &dyn SecretSource) -> AppResult<Secret> {
    if !interpolate::has_reference(raw) {
        return Err(AppError::Config(format!(
            "{field} must reference an environment variable like ${{NAME}}; \
             literal secrets are not accepted"
        )));
    }

    for name in interpolate::references(raw) {
        let empty = source
            .lookup(name)?
            .is_some_and(|value| value.trim().is_empty());
        if empty {
            return Err(AppError::Config(format!(
                "{field} references {name}, which is empty"
            )));
        }
    }

    let secret = Secret::new(interpolate::expand(raw, source)?);
    if secret.is_blank() {
        return Err(AppError::Config(format!("{field} resolves to an empty value")));
    }
    Ok(secret)
}
