pub mod arith;
pub mod presets;
pub mod size_report;

pub use crate::domain::model::{PlatformSpec, Region, RegionUsage, SectionSizes, SizeReport};
pub use crate::domain::ports::{SectionSource, Storage};
pub use crate::utils::error::Result;
