pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::{LocalStorage, SizeCommand};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::arith::{add, try_add};
pub use crate::core::presets::PresetsGenerator;
pub use crate::core::size_report::SizeReporter;
pub use crate::utils::error::{DemoError, Result};
