use crate::config::cli::{CapturedSizeOutput, SizeCommand, DEFAULT_SIZE_TOOL};
use crate::config::toml_config::TomlConfig;
use crate::core::size_report::SizeReporter;
use crate::core::{PlatformSpec, Region, SectionSource, SizeReport};
use crate::utils::error::Result;

/// Command line choices for a size report; `None` falls back to the config file.
#[derive(Debug, Clone, Default)]
pub struct SizeOptions {
    pub platform: Option<String>,
    pub flash_size: Option<u64>,
    pub size_tool: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResolvedSize {
    pub platform_name: String,
    pub platform: PlatformSpec,
    pub regions: Vec<Region>,
    pub size_tool: String,
}

impl SizeOptions {
    pub fn resolve(&self, config: &TomlConfig) -> Result<ResolvedSize> {
        let platform_name = self
            .platform
            .clone()
            .unwrap_or_else(|| config.default_platform().to_string());
        let mut platform = config.resolve_platform(&platform_name)?;

        // 0 或未指定時使用平台預設值
        if let Some(flash) = self.flash_size.filter(|f| *f > 0) {
            platform.flash = flash;
        }

        let size_tool = self
            .size_tool
            .clone()
            .or_else(|| config.size_tool().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_SIZE_TOOL.to_string());

        Ok(ResolvedSize {
            platform_name,
            platform,
            regions: config.regions(),
            size_tool,
        })
    }
}

pub async fn report_with<S: SectionSource>(source: S, resolved: &ResolvedSize, elf: &str) -> Result<SizeReport> {
    tracing::info!(
        "Summarizing {} for {} (flash {} B)",
        elf,
        resolved.platform_name,
        resolved.platform.flash
    );
    let reporter = SizeReporter::new(source, resolved.platform, resolved.regions.clone());
    reporter.run(elf).await
}

pub async fn report(resolved: &ResolvedSize, elf: &str) -> Result<SizeReport> {
    report_with(SizeCommand::new(resolved.size_tool.clone()), resolved, elf).await
}

/// Builds the report from `size -A` output saved earlier (e.g. by CI).
pub async fn report_from_file(resolved: &ResolvedSize, elf: &str, size_output: &str) -> Result<SizeReport> {
    let text = tokio::fs::read_to_string(size_output).await?;
    report_with(CapturedSizeOutput::new(text), resolved, elf).await
}

pub fn render(report: &SizeReport, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(&report.regions)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(report.render_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = SizeOptions::default().resolve(&TomlConfig::default()).unwrap();
        assert_eq!(resolved.platform_name, "rp2040");
        assert_eq!(resolved.platform.ram, 256 * 1024);
        assert_eq!(resolved.size_tool, "size");
        assert_eq!(resolved.regions.len(), 3);
    }

    #[test]
    fn test_flash_override() {
        let options = SizeOptions {
            platform: Some("rp2350".to_string()),
            flash_size: Some(4_194_304),
            size_tool: Some("arm-none-eabi-size".to_string()),
        };
        let resolved = options.resolve(&TomlConfig::default()).unwrap();
        assert_eq!(resolved.platform.flash, 4_194_304);
        assert_eq!(resolved.platform.ram, 520 * 1024);
        assert_eq!(resolved.size_tool, "arm-none-eabi-size");
    }

    #[test]
    fn test_zero_flash_keeps_default() {
        let options = SizeOptions {
            flash_size: Some(0),
            ..SizeOptions::default()
        };
        let resolved = options.resolve(&TomlConfig::default()).unwrap();
        assert_eq!(resolved.platform.flash, 2 * 1024 * 1024);
    }

    #[test]
    fn test_render_json_shape() {
        let report = SizeReport {
            regions: vec![crate::core::RegionUsage {
                region: "FLASH".to_string(),
                used: 1024,
                total: 2048,
                percent: 50.0,
            }],
        };
        let out = render(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"region": "FLASH", "used": 1024, "total": 2048, "percent": 50.0}])
        );
        assert!(render(&report, false).unwrap().contains("FLASH:"));
    }

    #[test]
    fn test_unknown_platform() {
        let options = SizeOptions {
            platform: Some("atmega".to_string()),
            ..SizeOptions::default()
        };
        assert!(options.resolve(&TomlConfig::default()).is_err());
    }
}
