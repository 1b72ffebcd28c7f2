use crate::error::{InvestabilityError, Result};
use crate::types::config::InvestabilityConfig;
use std::fmt;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "investability.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".investability/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/investability/config.toml";

// Later layers win key by key; nested tables are combined rather than replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigLayer {
    Global,
    Project,
    Local,
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigLayer::Global => "global",
            ConfigLayer::Project => "project",
            ConfigLayer::Local => "local",
        })
    }
}

pub fn load_config(root: &Path) -> Result<Option<InvestabilityConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<InvestabilityConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.is_file() {
        tracing::debug!(path = %project_path.display(), "no project config, using defaults");
        return Ok(None);
    }

    let mut layers = Vec::with_capacity(3);
    if let Some(path) = global_path {
        layers.push((ConfigLayer::Global, path.to_path_buf()));
    }
    layers.push((ConfigLayer::Project, project_path));
    layers.push((ConfigLayer::Local, root.join(DEFAULT_LOCAL_FILE)));

    let mut settings = Table::new();
    for (layer, path) in &layers {
        if !path.is_file() {
            continue;
        }
        overlay(&mut settings, read_layer(*layer, path)?);
        tracing::debug!(%layer, path = %path.display(), "applied config layer");
    }

    let cfg: InvestabilityConfig = Value::Table(settings)
        .try_into()
        .map_err(|e: toml::de::Error| InvestabilityError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    tracing::info!(root = %root.display(), "loaded investability config");
    Ok(Some(cfg))
}

fn read_layer(layer: ConfigLayer, path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content.parse::<Table>().map_err(|e| {
        InvestabilityError::ConfigParse(format!("{layer} config {}: {e}", path.display()))
    })
}

fn overlay(settings: &mut Table, layer: Table) {
    for (key, value) in layer {
        match value {
            Value::Table(section) => {
                let slot = settings
                    .entry(key)
                    .or_insert_with(|| Value::Table(Table::new()));
                match slot {
                    Value::Table(existing) => overlay(existing, section),
                    other => *other = Value::Table(section),
                }
            }
            value => {
                settings.insert(key, value);
            }
        }
    }
}
