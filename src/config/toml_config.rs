use crate::core::presets::{DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
use crate::domain::model::{PlatformSpec, Region};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "demo.toml";
pub const DEFAULT_PLATFORM: &str = "rp2040";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub size: Option<SizeConfig>,
    pub presets: Option<PresetsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizeConfig {
    pub default_platform: Option<String>,
    pub size_tool: Option<String>,
    pub platforms: Option<HashMap<String, PlatformSpec>>,
    pub regions: Option<Vec<Region>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetsConfig {
    pub template: Option<String>,
    pub output: Option<String>,
    pub generator: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CMAKE_GENERATOR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得平台名稱
    pub fn default_platform(&self) -> &str {
        self.size
            .as_ref()
            .and_then(|s| s.default_platform.as_deref())
            .unwrap_or(DEFAULT_PLATFORM)
    }

    pub fn size_tool(&self) -> Option<&str> {
        self.size.as_ref().and_then(|s| s.size_tool.as_deref())
    }

    /// 依名稱取得平台容量，設定檔中的平台優先於內建平台
    pub fn resolve_platform(&self, name: &str) -> Result<PlatformSpec> {
        if let Some(spec) = self
            .size
            .as_ref()
            .and_then(|s| s.platforms.as_ref())
            .and_then(|p| p.get(name))
        {
            return Ok(*spec);
        }

        PlatformSpec::builtin(name).ok_or_else(|| DemoError::InvalidConfigValueError {
            field: "platform".to_string(),
            value: name.to_string(),
            reason: format!("Unknown platform. Known platforms: {}", self.known_platforms().join(", ")),
        })
    }

    pub fn known_platforms(&self) -> Vec<String> {
        let mut names: Vec<String> = PlatformSpec::builtin_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        if let Some(platforms) = self.size.as_ref().and_then(|s| s.platforms.as_ref()) {
            for name in platforms.keys() {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names.sort();
        names
    }

    pub fn regions(&self) -> Vec<Region> {
        self.size
            .as_ref()
            .and_then(|s| s.regions.clone())
            .unwrap_or_else(Region::default_layout)
    }

    pub fn presets_template(&self) -> &str {
        self.presets
            .as_ref()
            .and_then(|p| p.template.as_deref())
            .unwrap_or(DEFAULT_TEMPLATE)
    }

    pub fn presets_output(&self) -> &str {
        self.presets
            .as_ref()
            .and_then(|p| p.output.as_deref())
            .unwrap_or(DEFAULT_OUTPUT)
    }

    /// 取得 generator；空值或含未替換環境變數的值視為未設定
    pub fn presets_generator(&self) -> Option<&str> {
        let generator = self.presets.as_ref().and_then(|p| p.generator.as_deref())?;
        if generator.trim().is_empty() {
            tracing::debug!("presets.generator is empty, falling back to host default");
            return None;
        }
        if generator.contains("${") {
            tracing::warn!("Ignoring unresolved presets.generator '{}'", generator);
            return None;
        }
        Some(generator)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(size) = &self.size {
            if let Some(platforms) = &size.platforms {
                for (name, spec) in platforms {
                    validation::validate_non_empty_string("size.platforms", name)?;
                    validation::validate_positive_number(
                        &format!("size.platforms.{}.flash", name),
                        spec.flash,
                        1,
                    )?;
                    validation::validate_positive_number(
                        &format!("size.platforms.{}.ram", name),
                        spec.ram,
                        1,
                    )?;
                    validation::validate_positive_number(
                        &format!("size.platforms.{}.irq", name),
                        spec.irq,
                        1,
                    )?;
                }
            }

            if let Some(regions) = &size.regions {
                if regions.is_empty() {
                    return Err(DemoError::InvalidConfigValueError {
                        field: "size.regions".to_string(),
                        value: "[]".to_string(),
                        reason: "At least one region is required".to_string(),
                    });
                }
                for region in regions {
                    validation::validate_non_empty_string("size.regions.name", &region.name)?;
                }
            }

            if let Some(tool) = &size.size_tool {
                validation::validate_non_empty_string("size.size_tool", tool)?;
            }

            // 預設平台必須存在
            self.resolve_platform(self.default_platform())?;
        }

        if let Some(presets) = &self.presets {
            if let Some(template) = &presets.template {
                validation::validate_path("presets.template", template)?;
            }
            if let Some(output) = &presets.output {
                validation::validate_path("presets.output", output)?;
            }
        }

        Ok(())
    }
}
