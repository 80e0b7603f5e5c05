//! Obtaining the document to grade, from disk or over HTTP.
//!
//! Exactly one mode runs per invocation. The HTTP path issues a single GET:
//! no retries and no timeout, and any failure ends the run before evaluation.

use std::path::Path;

use crate::types::{ContentSource, DocumentContent, GraderError, GraderResult};

/// Maximum redirects followed by a fetch.
const MAX_REDIRECTS: usize = 5;

const USER_AGENT: &str = concat!("html-grader/", env!("CARGO_PKG_VERSION"));

/// Read a local HTML file.
///
/// The path is expected to exist already; I/O errors are fatal.
pub fn read_file(path: &str) -> GraderResult<DocumentContent> {
    let bytes = std::fs::read(Path::new(path)).map_err(|source| GraderError::Io {
        path: path.to_string(),
        source,
    })?;
    tracing::info!("Read {} bytes from {path}", bytes.len());
    Ok(DocumentContent {
        origin: ContentSource::File {
            path: path.to_string(),
        },
        html: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Single-shot HTTP fetcher.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> GraderResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GraderError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// GET `url` and return the body.
    ///
    /// Transport errors and non-2xx statuses are both reported as
    /// [`GraderError::Fetch`].
    pub async fn fetch(&self, url: &str) -> GraderResult<DocumentContent> {
        let parsed = url::Url::parse(url).map_err(|e| GraderError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let fetch_err = |reason: String| GraderError::Fetch {
            url: url.to_string(),
            reason,
        };

        let resp = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(fetch_err(format!("HTTP status {}", status.as_u16())));
        }

        let html = resp.text().await.map_err(|e| fetch_err(e.to_string()))?;
        tracing::info!("Fetched {} bytes from {url} ({status})", html.len());

        Ok(DocumentContent {
            origin: ContentSource::Url {
                url: url.to_string(),
            },
            html,
        })
    }
}

/// Obtain the document for `source`, using exactly one acquisition mode.
pub async fn acquire(source: &ContentSource) -> GraderResult<DocumentContent> {
    match source {
        ContentSource::File { path } => read_file(path),
        ContentSource::Url { url } => HttpFetcher::new()?.fetch(url).await,
    }
}
