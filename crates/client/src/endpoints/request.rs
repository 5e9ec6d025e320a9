//! Authenticated GET helper.
//!
//! Sends a single request (no retries) and converts non-success responses
//! into [`ClientError::ApiError`], preferring the control plane's own error
//! description over the raw body.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::CfErrorBody;

/// GET `url` with a bearer token and return the response body.
pub async fn get_text(client: &Client, url: &str, access_token: &str) -> Result<String> {
    debug!(url = %url, "GET");

    let response = client
        .get(url)
        .header(AUTHORIZATION, format!("bearer {}", access_token))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());

        let message = match serde_json::from_str::<CfErrorBody>(&body) {
            Ok(err) => err.description,
            Err(_) => body,
        };

        debug!(status = status.as_u16(), url = %final_url, "Request failed");
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url: final_url,
            message,
        });
    }

    Ok(response.text().await?)
}
