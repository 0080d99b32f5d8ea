//! XML configuration support.
//! - Loads settings from an explicitly given file (quick_xml + serde).
//! - All elements are optional; surrounding whitespace is trimmed.
//!
//! Notes:
//! - Unknown elements are rejected so typos surface instead of being ignored.
//! - Directory checks happen in `PoolConfig::validate`, not here.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::{LogLevel, PoolConfig};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "tempfiles")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "parent_dir")]
    parent_dir: Option<String>,
    #[serde(rename = "prefix")]
    prefix: Option<String>,
    #[serde(rename = "seed", default, deserialize_with = "de_u64_trimmed_opt")]
    seed: Option<u64>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

// Trims surrounding whitespace for an optional u64; an empty element is None,
// anything else that does not parse is an error.
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    let opt: Option<String> = Option::deserialize(deserializer)?;
    match non_empty(opt.as_deref()) {
        None => Ok(None),
        Some(s) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid seed '{s}': {e}"))),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

/// Parse an XML document into a PoolConfig.
pub fn parse_config_xml(content: &str) -> Result<PoolConfig> {
    let parsed: XmlConfig = from_xml_str(content).context("parse tempfiles config xml")?;

    let log_level = match non_empty(parsed.log_level.as_deref()) {
        Some(s) => s.parse::<LogLevel>().map_err(anyhow::Error::msg)?,
        None => LogLevel::default(),
    };

    Ok(PoolConfig {
        parent_dir: non_empty(parsed.parent_dir.as_deref()).map(PathBuf::from),
        prefix: non_empty(parsed.prefix.as_deref()).map(str::to_owned),
        seed: parsed.seed,
        log_level,
        log_file: non_empty(parsed.log_file.as_deref()).map(PathBuf::from),
    })
}

/// Read and parse the config file at `path`.
pub fn load_config_from_xml(path: &Path) -> Result<PoolConfig> {
    if !path.is_file() {
        bail!("Config file not found: {}", path.display());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = parse_config_xml(&content)
        .with_context(|| format!("invalid config '{}'", path.display()))?;
    debug!(path = %path.display(), ?cfg, "Loaded config");
    Ok(cfg)
}
