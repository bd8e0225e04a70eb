use crate::domain::ports::Storage;
use crate::utils::error::{DemoError, Result};
use serde_json::Value;

pub const DEFAULT_TEMPLATE: &str = "CMakePresets.json.def";
pub const DEFAULT_OUTPUT: &str = "CMakePresets.json";

/// CMake generator used when none is given, picked from the host OS.
pub fn default_generator() -> &'static str {
    generator_for_os(std::env::consts::OS)
}

pub fn generator_for_os(os: &str) -> &'static str {
    match os {
        "windows" => "MinGW Makefiles",
        "macos" | "linux" => "Unix Makefiles",
        _ => "Ninja",
    }
}

/// Sets `generator` on every object in `configurePresets`.
///
/// Returns how many presets were updated. A document without
/// `configurePresets` is left as is.
pub fn inject_generator(document: &mut Value, generator: &str) -> Result<usize> {
    let root = document
        .as_object_mut()
        .ok_or_else(|| DemoError::ValidationError {
            message: "presets template root must be a JSON object".to_string(),
        })?;

    let Some(Value::Array(presets)) = root.get_mut("configurePresets") else {
        return Ok(0);
    };

    let mut updated = 0;
    for preset in presets.iter_mut() {
        if let Value::Object(fields) = preset {
            fields.insert("generator".to_string(), Value::String(generator.to_string()));
            updated += 1;
        }
    }
    Ok(updated)
}

pub fn render_presets(template: &str, generator: &str) -> Result<(String, usize)> {
    let mut document: Value = serde_json::from_str(template)?;
    let updated = inject_generator(&mut document, generator)?;
    let rendered = serde_json::to_string_pretty(&document)?;
    Ok((rendered, updated))
}

pub struct PresetsGenerator<S: Storage> {
    storage: S,
}

impl<S: Storage> PresetsGenerator<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn generate(&self, template_path: &str, output_path: &str, generator: &str) -> Result<usize> {
        tracing::debug!("Reading presets template {}", template_path);
        let raw = self.storage.read_file(template_path).await?;
        let template = String::from_utf8(raw).map_err(|e| DemoError::ValidationError {
            message: format!("template '{}' is not valid UTF-8: {}", template_path, e),
        })?;

        let (rendered, updated) = render_presets(&template, generator)?;
        if updated == 0 {
            tracing::warn!("Template {} has no configure presets", template_path);
        }

        self.storage.write_file(output_path, rendered.as_bytes()).await?;
        tracing::info!(
            "Generated {} using generator '{}' ({} presets)",
            output_path,
            generator,
            updated
        );
        Ok(updated)
    }
}
