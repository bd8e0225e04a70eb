pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::{AddArgs, CliConfig, Command, PresetsArgs, SizeArgs};

#[cfg(feature = "cli")]
mod args {
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::{Args, Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "demo")]
    #[command(about = "Demo arithmetic plus Pico firmware helper tools")]
    pub struct CliConfig {
        /// Enable verbose output
        #[arg(short, long, global = true)]
        pub verbose: bool,

        /// Emit logs as JSON
        #[arg(long, global = true)]
        pub log_json: bool,

        /// Path to TOML configuration file (defaults to ./demo.toml when present)
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Add two integers
        Add(AddArgs),
        /// Summarize memory usage by region for a firmware ELF
        Size(SizeArgs),
        /// Generate CMakePresets.json from a .def template
        Presets(PresetsArgs),
    }

    #[derive(Debug, Clone, Args)]
    pub struct AddArgs {
        #[arg(allow_negative_numbers = true)]
        pub a: i32,

        #[arg(allow_negative_numbers = true)]
        pub b: i32,

        /// Fail instead of wrapping on overflow
        #[arg(long)]
        pub checked: bool,
    }

    #[derive(Debug, Clone, Args)]
    pub struct SizeArgs {
        /// Path to the compiled ELF file
        pub elf: String,

        /// Total FLASH region size in bytes (0 keeps the platform default)
        #[arg(short, long)]
        pub flash_size: Option<u64>,

        /// Target platform name (rp2040, rp2350 or one from the config file)
        #[arg(short, long)]
        pub platform: Option<String>,

        /// `size` program to run, e.g. arm-none-eabi-size
        #[arg(long)]
        pub size_tool: Option<String>,

        /// Read saved `size -A` output from FILE instead of running the size tool
        #[arg(long, value_name = "FILE", conflicts_with = "size_tool")]
        pub size_output: Option<String>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        pub json: bool,
    }

    #[derive(Debug, Clone, Args)]
    pub struct PresetsArgs {
        /// Path to the template file (default: CMakePresets.json.def)
        #[arg(long = "def")]
        pub def_file: Option<String>,

        /// Output CMakePresets.json file (default: CMakePresets.json)
        #[arg(long = "out")]
        pub out_file: Option<String>,

        /// CMake generator, e.g. Ninja, "Unix Makefiles" (default depends on the host OS)
        #[arg(long)]
        pub generator: Option<String>,
    }

    impl Validate for SizeArgs {
        fn validate(&self) -> Result<()> {
            validation::validate_path("elf", &self.elf)?;
            if let Some(tool) = &self.size_tool {
                validation::validate_non_empty_string("size_tool", tool)?;
            }
            if let Some(output) = &self.size_output {
                validation::validate_path("size_output", output)?;
            }
            Ok(())
        }
    }

    impl Validate for PresetsArgs {
        fn validate(&self) -> Result<()> {
            if let Some(def) = &self.def_file {
                validation::validate_path("def", def)?;
            }
            if let Some(out) = &self.out_file {
                validation::validate_path("out", out)?;
            }
            Ok(())
        }
    }

}
