// Application layer: resolves command line choices against the config file
// and drives the core services with concrete adapters.

pub mod add;
pub mod presets;
pub mod size;
pub mod tools_config;
