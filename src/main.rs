use clap::Parser;
use uk_election_dashboard::utils::logger;
use uk_election_dashboard::{CliConfig, DashboardEngine, DashboardPipeline, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting uk-election-dashboard");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併並驗證配置
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code().max(1));
        }
    };

    tracing::info!("📁 Dataset: {}", settings.data_path);
    tracing::info!("📁 Output directory: {}", settings.output_path);

    // 相對路徑以目前工作目錄為準
    let storage = LocalStorage::new(".".to_string());
    let pipeline = DashboardPipeline::new(storage, settings);
    let engine = DashboardEngine::new(pipeline);

    match engine.run().await {
        Ok(paths) => {
            tracing::info!("✅ Dashboard built successfully!");
            println!("✅ Dashboard built successfully!");
            for path in paths {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Dashboard build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
