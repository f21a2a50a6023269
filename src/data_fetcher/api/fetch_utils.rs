//! Generic HTTP fetching with alternate-transport fallback and error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use super::urls::build_url;
use crate::error::AppError;

/// Fetches `url` and deserializes the JSON body into `T`.
///
/// Non-success statuses, transport failures and unparseable bodies are mapped
/// to specific `AppError` variants so callers can tell them apart in logs.
/// There is no same-URL retry: the season fallback is the only retry.
#[instrument(skip(client))]
pub(crate) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 | 504 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches `path` from each base URL in turn until one answers with a parseable body.
///
/// The first base URL is the primary transport; the rest are alternates
/// (e.g. a proxy and the upstream host). Returns the parsed body together
/// with the full URL that served it, or the last error once every base URL
/// has failed.
#[instrument(skip(client, base_urls))]
pub(crate) async fn fetch_with_fallback_transport<T: DeserializeOwned>(
    client: &Client,
    base_urls: &[&str],
    path: &str,
) -> Result<(T, String), AppError> {
    let mut last_error = None;

    for (index, base_url) in base_urls.iter().enumerate() {
        let url = build_url(base_url, path);
        match fetch::<T>(client, &url).await {
            Ok(parsed) => {
                if index > 0 {
                    info!("Alternate transport {base_url} served {path}");
                }
                return Ok((parsed, url));
            }
            Err(e) => {
                if index + 1 < base_urls.len() {
                    warn!("Transport {base_url} failed for {path}: {e}; trying alternate");
                }
                last_error = Some(e);
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| AppError::config_error("No API base URL configured")))
}
