use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;

/// Section name -> size in bytes, as reported by `size -A`.
pub type SectionSizes = BTreeMap<String, u64>;

/// Memory capacities of a target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub flash: u64,
    pub ram: u64,
    pub irq: u64,
}

impl PlatformSpec {
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "rp2040" => Some(Self {
                flash: 2 * MIB,
                ram: 256 * KIB,
                irq: 2 * KIB,
            }),
            "rp2350" => Some(Self {
                flash: 2 * MIB,
                ram: 520 * KIB,
                irq: 2 * KIB,
            }),
            _ => None,
        }
    }

    pub fn builtin_names() -> &'static [&'static str] {
        &["rp2040", "rp2350"]
    }

    pub fn capacity(&self, kind: CapacityKind) -> u64 {
        match kind {
            CapacityKind::Flash => self.flash,
            CapacityKind::Ram => self.ram,
            CapacityKind::Irq => self.irq,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityKind {
    Flash,
    Ram,
    Irq,
}

/// A memory region and the ELF sections that count against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub sections: Vec<String>,
    pub capacity: CapacityKind,
}

impl Region {
    pub fn new(name: &str, sections: &[&str], capacity: CapacityKind) -> Self {
        Self {
            name: name.to_string(),
            sections: sections.iter().map(|s| s.to_string()).collect(),
            capacity,
        }
    }

    pub fn default_layout() -> Vec<Region> {
        vec![
            Region::new(
                "FLASH",
                &[".text", ".rodata", ".vectors", ".init", ".fini"],
                CapacityKind::Flash,
            ),
            Region::new("SRAM", &[".data", ".bss"], CapacityKind::Ram),
            Region::new("IDT_LIST", &[".intlist"], CapacityKind::Irq),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionUsage {
    pub region: String,
    pub used: u64,
    pub total: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeReport {
    pub regions: Vec<RegionUsage>,
}
