use anyhow::Context;
use clap::Parser;
use vaccine_registry::app::commands;
use vaccine_registry::utils::{logger, validation::Validate};
use vaccine_registry::{CliConfig, SeedConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting vaccine-registry");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {} ({:?})", e, e.kind());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("📁 Loading seed file: {}", config.seed);
    let seed = SeedConfig::from_file(&config.seed)
        .with_context(|| format!("failed to load seed file '{}'", config.seed))?;
    tracing::info!("🏥 Registry: {}", seed.registry_name());
    let mut registry = seed.into_registry().context("failed to populate registry")?;

    match commands::execute(&mut registry, &config.command, config.format) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {} ({:?})", e, e.kind());
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }
}
