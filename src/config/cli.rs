use crate::config::AppConfig;
use crate::domain::model::SourceKind;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "space-images")]
#[command(about = "Download SpaceX launch and NASA APOD/EPIC images into per-source folders")]
pub struct CliArgs {
    /// Sources to fetch, in order (spacex, nasa-apod, nasa-epic)
    #[arg(long, value_delimiter = ',', default_value = "spacex,nasa-apod,nasa-epic")]
    pub sources: Vec<SourceKind>,

    /// Number of random APOD images to request (API default when omitted)
    #[arg(long)]
    pub apod_count: Option<usize>,

    /// Root directory for downloaded images
    #[arg(long, default_value = "images")]
    pub images_dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliArgs {
    /// 套用命令列覆蓋設定
    pub fn apply(&self, config: AppConfig) -> AppConfig {
        config
            .with_sources(self.sources.clone())
            .with_apod_count(self.apod_count)
            .with_images_dir(self.images_dir.clone())
    }
}
