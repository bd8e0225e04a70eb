use crate::config::toml_config::{TomlConfig, DEFAULT_CONFIG_FILE};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;

/// 載入 TOML 配置；未指定時嘗試讀取 `search_dir` 下的 demo.toml
pub fn load(explicit: Option<&str>, search_dir: &Path) -> Result<TomlConfig> {
    let implicit = search_dir.join(DEFAULT_CONFIG_FILE);
    let config = match explicit {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None if implicit.is_file() => {
            tracing::debug!("Loading configuration from {}", implicit.display());
            TomlConfig::from_file(&implicit)?
        }
        None => TomlConfig::default(),
    };

    config.validate()?;
    Ok(config)
}
