use clap::Parser;
use std::io::Write;
use urlbar::app::{Settings, UrlBarApp};
use urlbar::config::cli::collect_inputs;
use urlbar::utils::error::{ErrorSeverity, UrlBarError};
use urlbar::utils::logger;
use urlbar::{CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌，JSON 輸出時日誌也用 JSON
    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ urlbar failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), UrlBarError> {
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    let settings = Settings::from_sources(config, &file_config)?;
    let app = UrlBarApp::from_settings(settings).await?;

    let inputs = collect_inputs(config.command.inputs(), std::io::stdin().lock())?;
    if inputs.is_empty() {
        return Err(UrlBarError::EmptyInput);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = app.run(&config.command, &inputs, &mut out)?;
    out.flush()?;

    if summary.processed == 0 {
        return Err(UrlBarError::EmptyInput);
    }

    Ok(())
}
