use crate::domain::model::{PlatformSpec, Region, RegionUsage, SectionSizes, SizeReport};
use crate::domain::ports::SectionSource;
use crate::utils::error::Result;
use std::fmt::Write;

const HEADER_RULE: &str = "===================== ELF size =====================";
const MID_RULE: &str = "----------------------------------------------------";
const FOOTER_RULE: &str = "====================================================";

/// Parses `size -A` output into section sizes.
///
/// The first whitespace token is the section name, the first following
/// token that parses as an unsigned integer is its size, so negative tokens
/// are skipped too. Lines without one (titles, the column header) are skipped.
pub fn parse_sections(output: &str) -> SectionSizes {
    let mut sizes = SectionSizes::new();
    for line in output.lines() {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };
        if let Some(size) = parts.find_map(|token| token.parse::<u64>().ok()) {
            sizes.insert(name.to_string(), size);
        }
    }
    sizes
}

/// Formats a byte count with thousands separators, e.g. `2,097,152 B`.
pub fn units(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{} B", grouped)
}

impl SizeReport {
    pub fn build(sections: &SectionSizes, regions: &[Region], platform: &PlatformSpec) -> Self {
        let regions = regions
            .iter()
            .map(|region| {
                let used: u64 = region
                    .sections
                    .iter()
                    .map(|name| sections.get(name).copied().unwrap_or(0))
                    .sum();
                let total = platform.capacity(region.capacity);
                let percent = if total > 0 {
                    used as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                RegionUsage {
                    region: region.name.clone(),
                    used,
                    total,
                    percent,
                }
            })
            .collect();

        Self { regions }
    }

    pub fn render_table(&self) -> String {
        let mut out = String::new();
        // write! 到 String 不會失敗
        let _ = writeln!(out, "{}", HEADER_RULE);
        let _ = writeln!(
            out,
            "{:<15}{:>12}  {:>12}  {:>9}",
            "Memory region", "Used Size", "Region Size", "Used %"
        );
        let _ = writeln!(out, "{}", MID_RULE);
        for usage in &self.regions {
            let _ = writeln!(
                out,
                "{:<15}{:>12}  {:>12} {:9.2}%",
                format!("{}:", usage.region),
                units(usage.used),
                units(usage.total),
                usage.percent
            );
        }
        let _ = writeln!(out, "{}", FOOTER_RULE);
        out
    }
}

/// Reads the sections of `elf` from `source` and summarises them per region.
pub struct SizeReporter<S: SectionSource> {
    source: S,
    platform: PlatformSpec,
    regions: Vec<Region>,
}

impl<S: SectionSource> SizeReporter<S> {
    pub fn new(source: S, platform: PlatformSpec, regions: Vec<Region>) -> Self {
        Self {
            source,
            platform,
            regions,
        }
    }

    pub async fn run(&self, elf: &str) -> Result<SizeReport> {
        tracing::debug!("Reading sections of {}", elf);
        let sections = self.source.sections(elf).await?;
        tracing::debug!("Found {} sections", sections.len());

        for region in &self.regions {
            if !region.sections.iter().any(|s| sections.contains_key(s)) {
                tracing::warn!("No sections found for region {}", region.name);
            }
        }

        Ok(SizeReport::build(&sections, &self.regions, &self.platform))
    }
}
