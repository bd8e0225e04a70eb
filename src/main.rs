use clap::Parser;
use demo::app::presets::PresetsOptions;
use demo::app::size::SizeOptions;
use demo::config::toml_config::TomlConfig;
use demo::config::{CliConfig, Command, PresetsArgs, SizeArgs};
use demo::utils::{logger, validation::Validate};
use demo::{app, DemoError, LocalStorage};
use std::path::Path;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<(), DemoError> {
    let tools_config = app::tools_config::load(config.config.as_deref(), Path::new("."))?;

    match config.command {
        Command::Add(args) => {
            println!("{}", app::add::evaluate(args.a, args.b, args.checked)?);
            Ok(())
        }
        Command::Size(args) => run_size(&args, &tools_config).await,
        Command::Presets(args) => run_presets(&args, &tools_config).await,
    }
}

async fn run_size(args: &SizeArgs, tools_config: &TomlConfig) -> Result<(), DemoError> {
    args.validate()?;

    let options = SizeOptions {
        platform: args.platform.clone(),
        flash_size: args.flash_size,
        size_tool: args.size_tool.clone(),
    };
    let resolved = options.resolve(tools_config)?;
    let report = match &args.size_output {
        Some(path) => app::size::report_from_file(&resolved, &args.elf, path).await?,
        None => app::size::report(&resolved, &args.elf).await?,
    };

    print!("{}", app::size::render(&report, args.json)?);
    Ok(())
}

async fn run_presets(args: &PresetsArgs, tools_config: &TomlConfig) -> Result<(), DemoError> {
    args.validate()?;

    let options = PresetsOptions {
        template: args.def_file.clone(),
        output: args.out_file.clone(),
        generator: args.generator.clone(),
    };
    let resolved = options.resolve(tools_config);
    app::presets::generate(LocalStorage::default(), &resolved).await?;

    println!(
        "✅ Generated '{}' using generator: {}",
        resolved.output, resolved.generator
    );
    Ok(())
}
