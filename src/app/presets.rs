use crate::config::cli::LocalStorage;
use crate::config::toml_config::TomlConfig;
use crate::core::presets::{default_generator, PresetsGenerator};
use crate::utils::error::Result;

#[derive(Debug, Clone, Default)]
pub struct PresetsOptions {
    pub template: Option<String>,
    pub output: Option<String>,
    pub generator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPresets {
    pub template: String,
    pub output: String,
    pub generator: String,
}

impl PresetsOptions {
    pub fn resolve(&self, config: &TomlConfig) -> ResolvedPresets {
        let generator = self
            .generator
            .clone()
            .filter(|g| !g.trim().is_empty())
            .or_else(|| config.presets_generator().map(str::to_string))
            .unwrap_or_else(|| {
                let generator = default_generator();
                tracing::debug!("No generator given, using host default '{}'", generator);
                generator.to_string()
            });

        ResolvedPresets {
            template: self
                .template
                .clone()
                .unwrap_or_else(|| config.presets_template().to_string()),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| config.presets_output().to_string()),
            generator,
        }
    }
}

pub async fn generate(storage: LocalStorage, resolved: &ResolvedPresets) -> Result<usize> {
    PresetsGenerator::new(storage)
        .generate(&resolved.template, &resolved.output, &resolved.generator)
        .await
}
