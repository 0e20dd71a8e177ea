pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::storage::LocalStorage;
pub use config::AppConfig;
pub use core::{downloader::Downloader, engine::FetchEngine, sources::build_sources};
pub use domain::model::{FetchSummary, ImageRef, SourceKind};
pub use utils::error::{FetchError, Result};
