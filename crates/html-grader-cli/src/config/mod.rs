//! Configuration resolution and path validation.

use std::path::Path;

use html_grader::ContentSource;

/// Default checks file, relative to the working directory.
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

/// Default HTML file, relative to the working directory.
pub const HTML_FILE_DEFAULT: &str = "index.html";

/// Errors raised before any grading work starts.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} does not exist. Exiting.")]
    MissingPath(String),
}

/// Validated settings for one grading run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeConfig {
    pub checks: String,
    pub source: ContentSource,
}

impl GradeConfig {
    /// Validate paths and pick the acquisition mode.
    ///
    /// An explicit `file` must always exist. The default HTML file is only
    /// checked when no URL is given.
    pub fn resolve(
        checks: &str,
        file: Option<&str>,
        url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let checks = assert_exists(checks)?;
        let file = match (file, url) {
            (Some(explicit), _) => assert_exists(explicit)?,
            (None, Some(_)) => HTML_FILE_DEFAULT.to_string(),
            (None, None) => assert_exists(HTML_FILE_DEFAULT)?,
        };
        let source = ContentSource::select(&file, url);
        Ok(Self { checks, source })
    }
}

fn assert_exists(path: &str) -> Result<String, ConfigError> {
    if Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(ConfigError::MissingPath(path.to_string()))
    }
}
