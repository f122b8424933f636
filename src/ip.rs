use anyhow::{Context, Result};
use reqwest::Client;

use crate::error::Error;

/// Ask a plain-text IP echo service for our public address.
///
/// The body is otherwise opaque; only surrounding whitespace is dropped
/// since most echo services end the reply with a newline.
pub async fn public_ip(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?;

    if !response.status().is_success() {
        return Err(Error::Status {
            service: url.to_string(),
            status: response.status(),
        }
        .into());
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response from {}", url))?;

    Ok(body.trim().to_string())
}
