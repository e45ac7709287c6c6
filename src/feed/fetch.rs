use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("feed source is not a usable URL: {url}")]
    BadSource {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("feed source returned HTTP {status}: {url}")]
    Status { url: String, status: StatusCode },
    #[error("request failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("all {0} feed sources failed")]
    Exhausted(usize),
}

/// Fetch the raw feed text, trying each source strictly in order.
///
/// A source fails on transport error or non-success status; the next
/// one is attempted immediately. No per-source retry and no parallel
/// attempts: the ordering of `sources` encodes preference. When every
/// source has failed the whole fetch fails with [`FetchError::Exhausted`].
pub async fn fetch_feed(
    client: &Client,
    sources: &[String],
    base_url: &str,
) -> Result<String, FetchError> {
    for source in sources {
        match fetch_source(client, source, base_url).await {
            Ok(text) => {
                debug!("fetched feed from {}", source);
                return Ok(text);
            }
            Err(e) => warn!("feed source failed, trying next: {}", e),
        }
    }
    Err(FetchError::Exhausted(sources.len()))
}

async fn fetch_source(client: &Client, source: &str, base_url: &str) -> Result<String, FetchError> {
    let url = resolve_source(source, base_url)?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|e| FetchError::Transport {
        url: url.to_string(),
        source: e,
    })
}

// Sources may be absolute or relative to the store origin.
fn resolve_source(source: &str, base_url: &str) -> Result<Url, FetchError> {
    match Url::parse(source) {
        Ok(url) => Ok(url),
        Err(_) => Url::parse(base_url)
            .and_then(|base| base.join(source))
            .map_err(|e| FetchError::BadSource {
                url: source.to_string(),
                source: e,
            }),
    }
}
