//! Generic HTTP fetching with bounded retry and backoff

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// How often and how patiently a single logical read is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// A policy of `max_attempts` total attempts (at least one) where the
    /// wait after failed attempt `i` is `base_delay * i`.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait before the attempt following failed attempt `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            retry::MAX_ATTEMPTS,
            Duration::from_millis(retry::BASE_DELAY_MS),
        )
    }
}

/// Fetches and decodes `url`, retrying every failure until the policy's
/// budget is spent.
///
/// Non-success statuses, transport errors and undecodable bodies all count
/// as a failed attempt. Each failure is logged; after failed attempt `i`
/// (except the last) the call sleeps `base_delay * i`. Once the budget is
/// exhausted the last cause is returned inside [`AppError::FetchExhausted`].
#[instrument(skip(client, policy))]
pub async fn fetch_with_retry<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    policy: &RetryPolicy,
) -> Result<T, AppError> {
    let max_attempts = policy.max_attempts();
    let mut attempt = 1u32;

    loop {
        match fetch_once::<T>(client, url).await {
            Ok(parsed) => {
                if attempt > 1 {
                    debug!("Fetched {url} on attempt {attempt}/{max_attempts}");
                }
                return Ok(parsed);
            }
            Err(e) if attempt >= max_attempts => {
                error!("Giving up on {url} after {attempt} attempts: {e}");
                return Err(AppError::fetch_exhausted(url, attempt, e));
            }
            Err(e) => {
                let wait = policy.delay_after(attempt);
                warn!(
                    "Attempt {}/{} for {} failed: {}. Retrying in {:?}",
                    attempt, max_attempts, url, e, wait
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}

/// Performs one GET and decodes the body, classifying failures by kind.
async fn fetch_once<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await?;
    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') && trimmed != "null" {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
