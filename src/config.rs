use crate::error::{HealthError, Result};
use crate::types::config::SiteConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Read and validate the site config. A missing file is an error here, not a
/// silent default: a run without an organization has nothing to do.
pub fn load(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        return Err(HealthError::ConfigNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let cfg: SiteConfig = toml::from_str(&content)
        .map_err(|e| HealthError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    cfg.validate()?;
    Ok(cfg)
}
