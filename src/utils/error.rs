use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status} returned by {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing field '{field}' in {source_name} entry #{index}")]
    MissingFieldError {
        source_name: String,
        field: String,
        index: usize,
    },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDateError { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Parse,
    Io,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::ConfigError { .. }
            | FetchError::MissingConfigError { .. }
            | FetchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FetchError::ApiError(_) | FetchError::HttpStatusError { .. } => ErrorCategory::Network,
            FetchError::SerializationError(_)
            | FetchError::MissingFieldError { .. }
            | FetchError::InvalidDateError { .. } => ErrorCategory::Parse,
            FetchError::IoError(_) => ErrorCategory::Io,
        }
    }

    /// 程序結束碼，依錯誤類別區分
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Network => 3,
            ErrorCategory::Parse => 4,
            ErrorCategory::Io => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::MissingConfigError { field } => {
                format!("Required setting {} is not set", field)
            }
            FetchError::HttpStatusError { status, url } => {
                format!("Server answered {} for {}", status, url)
            }
            FetchError::ApiError(e) if e.is_connect() => {
                "Could not connect to the remote API".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::MissingConfigError { .. } => {
                "Export FLIGHT_ID and NASA_API_TOKEN or add them to a .env file"
            }
            FetchError::ConfigError { .. } | FetchError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and environment overrides"
            }
            FetchError::HttpStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Verify that NASA_API_TOKEN is a valid api.nasa.gov key"
            }
            FetchError::HttpStatusError { status, .. } if *status == 404 => {
                "Verify the FLIGHT_ID or the requested resource exists"
            }
            FetchError::HttpStatusError { .. } | FetchError::ApiError(_) => {
                "Check network connectivity and try again later"
            }
            FetchError::SerializationError(_)
            | FetchError::MissingFieldError { .. }
            | FetchError::InvalidDateError { .. } => {
                "The upstream API returned unexpected data; try a different source or date"
            }
            FetchError::IoError(_) => "Check that the images directory is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
