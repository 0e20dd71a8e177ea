use crate::utils::error::{FetchError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// 查詢字串可能含有 api_key，日誌與錯誤訊息只保留到 path
pub fn redacted(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.to_string()
        }
        Err(_) => url.split('?').next().unwrap_or_default().to_string(),
    }
}

/// Sends a GET and turns 4xx/5xx answers into `HttpStatusError`.
pub async fn get_checked(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<Response> {
    tracing::debug!("GET {}", redacted(url));
    let response = client.get(url).query(query).send().await?;

    let status = response.status();
    tracing::debug!("Response status: {}", status);

    if status.is_client_error() || status.is_server_error() {
        return Err(FetchError::HttpStatusError {
            status: status.as_u16(),
            url: redacted(response.url().as_str()),
        });
    }

    Ok(response)
}

/// GET `url` and decode the JSON body into `T`.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T> {
    let response = get_checked(client, url, query).await?;
    let body = response.bytes().await?;
    tracing::debug!("Received {} bytes of JSON", body.len());

    Ok(serde_json::from_slice(&body)?)
}
