use crate::utils::error::FetchError;
use std::fmt;
use std::str::FromStr;

/// One of the upstream image APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Spacex,
    NasaApod,
    NasaEpic,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Spacex, SourceKind::NasaApod, SourceKind::NasaEpic];

    /// Directory under the images root, also used as the file name prefix.
    pub fn dir_name(&self) -> &'static str {
        match self {
            SourceKind::Spacex => "space",
            SourceKind::NasaApod => "nasa_apod",
            SourceKind::NasaEpic => "nasa_epic",
        }
    }

    /// Sequential file stem for the `index`-th image of this source.
    ///
    /// EPIC files carry no separator between prefix and index (`nasa_epic0`),
    /// existing download folders rely on that layout.
    pub fn image_name(&self, index: usize) -> String {
        match self {
            SourceKind::NasaEpic => format!("{}{}", self.dir_name(), index),
            _ => format!("{}_{}", self.dir_name(), index),
        }
    }

    pub fn cli_name(&self) -> &'static str {
        match self {
            SourceKind::Spacex => "spacex",
            SourceKind::NasaApod => "nasa-apod",
            SourceKind::NasaEpic => "nasa-epic",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for SourceKind {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "spacex" | "space" => Ok(SourceKind::Spacex),
            "nasa-apod" | "apod" => Ok(SourceKind::NasaApod),
            "nasa-epic" | "epic" => Ok(SourceKind::NasaEpic),
            _ => Err(FetchError::InvalidConfigValueError {
                field: "sources".to_string(),
                value: s.to_string(),
                reason: "Expected one of: spacex, nasa-apod, nasa-epic".to_string(),
            }),
        }
    }
}

/// Everything needed to download and name a single image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub source: SourceKind,
    pub index: usize,
    pub url: String,
}

impl ImageRef {
    pub fn new(source: SourceKind, index: usize, url: impl Into<String>) -> Self {
        Self {
            source,
            index,
            url: url.into(),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.dir_name()
    }

    pub fn image_name(&self) -> String {
        self.source.image_name(self.index)
    }
}

/// Files written per source, in the order the sources ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub per_source: Vec<(SourceKind, usize)>,
}

impl FetchSummary {
    pub fn record(&mut self, source: SourceKind, downloaded: usize) {
        self.per_source.push((source, downloaded));
    }

    pub fn total(&self) -> usize {
        self.per_source.iter().map(|(_, count)| count).sum()
    }
}
