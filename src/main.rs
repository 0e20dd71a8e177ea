use clap::Parser;
use space_images::utils::{logger, validation::Validate};
use space_images::{
    build_sources, AppConfig, CliArgs, Downloader, FetchEngine, FetchSummary, LocalStorage, Result,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 先讀取 .env (若存在)，讓其中的 RUST_LOG 也能生效
    let dotenv_path = dotenvy::dotenv().ok();

    logger::init_logger(args.verbose, args.log_json);

    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    tracing::info!("Starting space-images");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    match run(&args).await {
        Ok(summary) => {
            for (kind, count) in &summary.per_source {
                println!("📁 {}: {} images", kind.dir_name(), count);
            }
            println!("✅ Downloaded {} images into {}/", summary.total(), args.images_dir);
        }
        Err(e) => {
            tracing::error!("❌ Download failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

async fn run(args: &CliArgs) -> Result<FetchSummary> {
    // 驗證配置，在任何網路請求之前失敗
    let config = args.apply(AppConfig::from_env()?);
    config.validate()?;

    let selected: Vec<String> = config.sources.iter().map(|s| s.to_string()).collect();
    tracing::info!("📋 Sources: {}", selected.join(", "));

    let storage = LocalStorage::new(config.images_dir.clone());
    storage.ensure_root()?;

    let downloader = Downloader::new(storage);
    let sources = build_sources(&config, downloader.client());
    let engine = FetchEngine::with_sources(downloader, sources);

    engine.run().await
}
