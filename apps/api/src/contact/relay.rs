//! Contact relay client. The only place that talks to the email-forwarding service.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use thiserror::Error;
use tracing::{debug, warn};

use crate::contact::models::{RelayPayload, RelayResponse, Submission};

const MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF: Duration = Duration::from_millis(1000);
/// Some relays sit behind bot protection that rejects non-browser agents.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FALLBACK_REJECTION: &str = "Failed to send message";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay answered with a non-JSON body (status {status})")]
    NonJson { status: u16 },

    #[error("Relay rejected submission (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

/// Forwards a validated submission to whoever delivers the email.
///
/// Carried in `AppState` as `Arc<dyn MessageRelay>`.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), RelayError>;
}

/// Web3Forms-compatible relay over HTTPS.
#[derive(Clone)]
pub struct Web3FormsRelay {
    client: Client,
    url: String,
    access_key: String,
    site_origin: Option<String>,
    backoff: Duration,
}

impl Web3FormsRelay {
    pub fn new(url: String, access_key: String, site_origin: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            url,
            access_key,
            site_origin,
            backoff: DEFAULT_BACKOFF,
        }
    }

    /// Base delay of the exponential backoff used on 429 responses.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

#[async_trait]
impl MessageRelay for Web3FormsRelay {
    /// Retries only on 429; any other answer is final so a message is never
    /// delivered twice.
    async fn submit(&self, submission: &Submission) -> Result<(), RelayError> {
        let payload = RelayPayload::new(&self.access_key, submission);

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = self.backoff * (1 << (attempt - 1));
                warn!(
                    "Relay rate limited on attempt {}, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self
                .client
                .post(&self.url)
                .header(header::ACCEPT, "application/json")
                .header(header::USER_AGENT, BROWSER_USER_AGENT)
                .json(&payload);
            if let Some(origin) = &self.site_origin {
                request = request
                    .header(header::ORIGIN, origin)
                    .header(header::REFERER, format!("{}/", origin.trim_end_matches('/')));
            }

            let response = request.send().await?;
            let status = response.status();
            debug!("Relay responded with status {}", status);

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                continue;
            }

            let is_json = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|ct| ct.contains("application/json"));
            let body = response.bytes().await?;

            if !is_json {
                warn!(
                    "Relay returned non-JSON body: {}",
                    String::from_utf8_lossy(&body[..body.len().min(500)])
                );
                return Err(RelayError::NonJson {
                    status: status.as_u16(),
                });
            }

            let parsed: RelayResponse =
                serde_json::from_slice(&body).map_err(|_| RelayError::NonJson {
                    status: status.as_u16(),
                })?;

            if status.is_success() && parsed.success {
                return Ok(());
            }

            return Err(RelayError::Rejected {
                status: status.as_u16(),
                message: parsed
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| FALLBACK_REJECTION.to_string()),
            });
        }

        Err(RelayError::RateLimited {
            retries: MAX_RETRIES,
        })
    }
}
