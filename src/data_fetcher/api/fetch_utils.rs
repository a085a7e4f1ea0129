//! Page fetching with HTTP status mapping

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches one scores page and returns its body.
///
/// A single GET is made. Non-success statuses, transport failures and empty
/// bodies are mapped to retrieval errors.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - Address of the page
#[instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::PageFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::page_not_found(url),
            400..=499 => AppError::page_client_error(status_code, reason, url),
            _ => AppError::page_server_error(status_code, reason, url),
        });
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::PageFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", body.len());

    if body.trim().is_empty() {
        return Err(AppError::page_no_data(url));
    }

    Ok(body)
}
