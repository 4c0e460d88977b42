use crate::error::Result;
use crate::result::ProbeOutcome;
use indexmap::IndexMap;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Invoked once per probe, in probe order, with the URL and whether it
/// succeeded. Skipped URLs never reach the callback.
pub type ProgressCallback = Arc<dyn Fn(&str, bool) + Send + Sync>;

/// Sequential reachability checker.
///
/// Probes one URL at a time over a shared client. No retries: a failed
/// probe is final for the run. The optional probe limit is the only bound
/// on total work.
pub struct LinkChecker {
    client: Client,
    limit: Option<usize>,
    progress_callback: Option<ProgressCallback>,
}

impl LinkChecker {
    pub fn new() -> Result<Self> {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("marklint/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            limit: None,
            progress_callback: None,
        })
    }

    /// Cap the number of probes actually issued. `None` means unlimited.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Probe every URL in order, collecting failures.
    ///
    /// Returns url -> failure description in probe order; URLs absent from
    /// the map were reached successfully. `javascript:` URIs are skipped
    /// outright: never probed, never counted against the limit, absent
    /// from both tallies.
    pub async fn check<I>(&self, urls: I) -> IndexMap<String, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut bad_urls = IndexMap::new();
        let mut probed = 0usize;

        for url in urls {
            if url.starts_with("javascript:") {
                debug!("skipping javascript URI: {}", url);
                continue;
            }
            if self.limit.is_some_and(|limit| probed >= limit) {
                break;
            }
            probed += 1;

            let outcome = self.probe(&url).await;
            if let Some(ref callback) = self.progress_callback {
                callback(&url, outcome.is_ok());
            }
            if let Some(description) = outcome.describe() {
                debug!("{}: {}", url, description);
                bad_urls.insert(url, description);
            }
        }

        info!("checked {} links, {} failures", probed, bad_urls.len());
        bad_urls
    }

    async fn probe(&self, url: &str) -> ProbeOutcome {
        match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => return ProbeOutcome::InvalidScheme,
        }

        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::OK {
                    ProbeOutcome::Ok
                } else {
                    ProbeOutcome::BadStatus {
                        code: status.as_u16(),
                        reason: status
                            .canonical_reason()
                            .unwrap_or("Unknown Status")
                            .to_string(),
                    }
                }
            }
            Err(err) if err.is_timeout() => ProbeOutcome::Timeout,
            Err(_) => ProbeOutcome::ConnectionFailure,
        }
    }
}
