use clap::Parser;
use uk_election_dashboard::config::toml_config::TomlConfig;
use uk_election_dashboard::config::DashboardSettings;
use uk_election_dashboard::core::views::build_view;
use uk_election_dashboard::core::Storage;
use uk_election_dashboard::render::{render_text, render_view_json};
use uk_election_dashboard::utils::{logger, validation::Validate};
use uk_election_dashboard::{Dataset, LocalStorage, RegionFilter};

#[derive(Parser)]
#[command(name = "region-summary")]
#[command(about = "Prints the dashboard figures for one region selection")]
struct Args {
    /// Region name, or "All" for every region
    #[arg(short, long, default_value = "All")]
    region: String,

    /// Cleaned results CSV
    #[arg(long)]
    data: Option<String>,

    /// Optional TOML configuration file (dataset path and colours)
    #[arg(short, long)]
    config: Option<String>,

    /// Print the view as JSON instead of text
    #[arg(long)]
    json: bool,

    /// List the selectable regions and exit
    #[arg(long)]
    list_regions: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    // 載入 TOML 配置（選填）
    let settings = match &args.config {
        Some(path) => {
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            if let Err(e) = config.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            DashboardSettings::from_toml(&config)
        }
        None => DashboardSettings::default(),
    };

    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| settings.data_path.clone());
    tracing::debug!("📁 Dataset: {}", data_path);

    let storage = LocalStorage::new(".".to_string());
    let dataset = match storage.read_file(&data_path).await {
        Ok(bytes) => Dataset::from_csv_bytes(&bytes),
        Err(e) => Err(e),
    };
    let dataset = match dataset {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("❌ Failed to load dataset '{}': {}", data_path, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code().max(1));
        }
    };

    if args.list_regions {
        for option in dataset.region_options() {
            println!("{}\t{}", option.value(), option.label());
        }
        return Ok(());
    }

    let filter = RegionFilter::from_selection(&args.region);
    let view = build_view(&dataset, &filter, &settings.colors);

    if args.json {
        println!("{}", render_view_json(&view)?);
    } else {
        print!("{}", render_text(&view));
    }

    if !view.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}
