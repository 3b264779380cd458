use clap::Parser;
use kiosk_patterns::utils::error::ErrorSeverity;
use kiosk_patterns::utils::{logger, validation::Validate};
use kiosk_patterns::{CliConfig, DemoEngine, KioskError, MenuConfig, StdoutSink};
use std::sync::Arc;

fn load_menu(config: &CliConfig) -> Result<MenuConfig, KioskError> {
    let menu = match &config.menu {
        Some(path) => {
            tracing::info!("Loading menu from: {}", path);
            MenuConfig::from_file(path)?
        }
        None => MenuConfig::default(),
    };
    menu.validate()?;
    Ok(menu)
}

fn run(config: &CliConfig) -> Result<(), KioskError> {
    config.validate()?;
    let menu = load_menu(config)?;

    let engine = DemoEngine::new(Arc::new(StdoutSink), menu, config.kiosks.clone())
        .with_price_format(config.price_format())
        .with_output_format(config.output_format());
    engine.run()?;
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "Kiosk demo failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}
