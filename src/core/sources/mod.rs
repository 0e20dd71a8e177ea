//! One fetcher per upstream API.

pub mod apod;
pub mod epic;
pub mod spacex;

pub use apod::ApodSource;
pub use epic::EpicSource;
pub use spacex::SpacexSource;

use crate::config::AppConfig;
use crate::core::{ImageSource, SourceKind};
use reqwest::Client;

/// Builds the fetchers selected in `config`, keeping their order.
pub fn build_sources(config: &AppConfig, client: &Client) -> Vec<Box<dyn ImageSource>> {
    config
        .sources
        .iter()
        .map(|kind| -> Box<dyn ImageSource> {
            match kind {
                SourceKind::Spacex => Box::new(SpacexSource::new(
                    client.clone(),
                    &config.spacex_api_base,
                    &config.flight_id,
                )),
                SourceKind::NasaApod => Box::new(ApodSource::new(
                    client.clone(),
                    &config.nasa_api_base,
                    &config.nasa_api_token,
                    config.apod_count,
                )),
                SourceKind::NasaEpic => Box::new(EpicSource::new(
                    client.clone(),
                    &config.nasa_api_base,
                    &config.nasa_api_token,
                )),
            }
        })
        .collect()
}
