use biz_directory::core::ConfigProvider;
use biz_directory::utils::error::{DirectoryError, ErrorSeverity};
use biz_directory::utils::{logger, validation::Validate};
use biz_directory::{app, CliConfig, ConsoleAlert, LoadState, LocalStorage, TomlConfig};
use clap::Parser;

fn exit_code(e: &DirectoryError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(e: &DirectoryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(exit_code(e).max(1));
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        report_failure(&e);
    }

    let storage = LocalStorage::new(".".to_string());
    match app::init(config, &storage, ConsoleAlert).await {
        Ok(LoadState::Rendered(report)) => {
            println!(
                "✅ Rendered {} listings into {}",
                report.rendered_items(),
                config.output_path()
            );
            Ok(())
        }
        Ok(LoadState::Failed(e)) | Err(e) => {
            // 載入失敗的提示已由 ConsoleAlert 顯示
            if !e.is_load_failure() {
                eprintln!("❌ {}", e.user_friendly_message());
            }
            report_failure(&e);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(exit_code(&e));
            }
        },
        None => None,
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(TomlConfig::verbose);
    let json_logs = cli.json_logs || file_config.as_ref().is_some_and(TomlConfig::json_logs);
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting biz-directory");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match &file_config {
        Some(config) => run(config).await,
        None => run(&cli).await,
    }
}
