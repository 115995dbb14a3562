use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    config::Config,
    fetcher::{
        errors::FetchError, pipeline::process_response, source::PageSource, types::PageResponse,
    },
};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Fetches menu pages over HTTP.
///
/// Requests made through one source are spaced at least `min_interval`
/// apart, so sequential sweeps over every dining location stay polite.
/// [`PageSource::fetch_page`] repeats a failed request up to `retries` times
/// when the error is transient.
pub struct HttpPageSource {
    client: Client,
    min_interval: Duration,
    retries: u32,
    last_request: Mutex<Option<Instant>>,
}

impl HttpPageSource {
    pub fn new(timeout: Duration, min_interval: Duration) -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = ClientBuilder::new()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::ClientSetup(e.to_string()))?;

        Ok(Self {
            client,
            min_interval,
            retries: 0,
            last_request: Mutex::new(None),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(config.fetch_timeout(), config.fetch_delay())?
            .with_retries(config.fetch_retries()))
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let parsed_url = Url::parse(url)?;

        self.wait_turn().await;

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                retriable: status.is_server_error(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?;

        // Content-Length may be missing or wrong
        if body.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body.len() as u64));
        }

        let page = process_response(final_url, status, &body, &content_type);
        debug!(
            url_final = %page.url_final,
            encoding = page.encoding.name(),
            bytes = body.len(),
            "fetched menu page"
        );

        Ok(page)
    }

    /// Sleep until `min_interval` has passed since the previous request.
    async fn wait_turn(&self) {
        let mut last_request = self.last_request.lock().await;

        if let Some(previous) = *last_request {
            let ready_at = previous + self.min_interval;
            if ready_at > Instant::now() {
                debug!(delay_ms = (ready_at - Instant::now()).as_millis() as u64, "rate limiting");
                tokio::time::sleep_until(ready_at).await;
            }
        }

        *last_request = Some(Instant::now());
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &Url) -> Result<String, FetchError> {
        let mut attempt = 0;
        loop {
            match self.fetch(url.as_str()).await {
                Ok(page) => return Ok(page.body_utf8),
                Err(err) if err.should_retry() && attempt < self.retries => {
                    attempt += 1;
                    warn!(%url, attempt, error = %err, "retrying menu fetch");
                }
                Err(err) => return Err(err),
            }
        }
    }
}
