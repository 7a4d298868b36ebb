use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::AppResult;

/// On-disk shape of a networks file. Secret-bearing fields hold `${VAR}`
/// references, never the secrets themselves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworksFile {
    #[serde(default)]
    pub verification: Option<VerificationSettings>,
    /// In file order. Repeated names are kept so that registration rejects them.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub networks: Vec<(String, NetworkSettings)>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerificationSettings {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkSettings {
    pub url: String,
    pub chain_id: i64,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub gas_price: Option<GasPriceSettings>,
    #[serde(default)]
    pub live: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum GasPriceSettings {
    Fixed { wei: i64 },
    Multiplier { factor: f64 },
    NetworkDefault,
}

pub fn load(path: &Path) -> AppResult<NetworksFile> {
    let raw = fs::read_to_string(path)?;
    parse(&raw, is_json(path))
}

pub fn parse(raw: &str, json: bool) -> AppResult<NetworksFile> {
    if json {
        return Ok(serde_json::from_str(raw)?);
    }

    Ok(toml::from_str(raw)?)
}

fn ordered_entries<'de, D>(deserializer: D) -> Result<Vec<(String, NetworkSettings)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, NetworkSettings)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a table of network profiles keyed by name")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, NetworkSettings>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
