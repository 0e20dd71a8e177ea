use crate::utils::error::{FetchError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> FetchError {
    FetchError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// API base overrides must be absolute http(s) URLs without a query, since
/// endpoint paths get appended to them.
pub fn validate_api_base(field: &str, base: &str) -> Result<()> {
    let url = Url::parse(base).map_err(|e| invalid(field, base, format!("Invalid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(field, base, format!("Unsupported scheme: {}", url.scheme())));
    }
    if url.query().is_some() {
        return Err(invalid(field, base, "Base URL must not carry a query string"));
    }
    Ok(())
}

pub fn validate_images_dir(dir: &str) -> Result<()> {
    if dir.trim().is_empty() {
        return Err(invalid("images_dir", dir, "Directory cannot be empty"));
    }
    if dir.contains('\0') {
        return Err(invalid("images_dir", dir, "Directory contains null bytes"));
    }
    Ok(())
}

/// `count=0` 會讓 APOD 回傳錯誤，所以在送出請求前擋下
pub fn validate_apod_count(count: Option<usize>) -> Result<()> {
    match count {
        Some(0) => Err(invalid("apod_count", 0, "Count must be at least 1")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base() {
        assert!(validate_api_base("nasa_api_base", "https://api.nasa.gov").is_ok());
        assert!(validate_api_base("nasa_api_base", "http://127.0.0.1:8080").is_ok());
        assert!(validate_api_base("nasa_api_base", "").is_err());
        assert!(validate_api_base("nasa_api_base", "api.nasa.gov").is_err());
        assert!(validate_api_base("nasa_api_base", "ftp://example.com").is_err());

        let err = validate_api_base("nasa_api_base", "https://api.nasa.gov?api_key=x").unwrap_err();
        assert!(matches!(err, FetchError::InvalidConfigValueError { ref field, .. } if field == "nasa_api_base"));
    }

    #[test]
    fn test_images_dir() {
        assert!(validate_images_dir("images").is_ok());
        assert!(validate_images_dir("  ").is_err());
        assert!(validate_images_dir("bad\0path").is_err());
    }

    #[test]
    fn test_apod_count() {
        assert!(validate_apod_count(None).is_ok());
        assert!(validate_apod_count(Some(30)).is_ok());
        assert!(validate_apod_count(Some(0)).is_err());
    }
}
