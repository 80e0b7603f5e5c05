//! Core data types: selector lists, document content, reports and errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selector lists sorted ascending at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectorList(Vec<String>);

impl SelectorList {
    /// Build a list from raw selectors, sorting them.
    pub fn new(mut selectors: Vec<String>) -> Self {
        selectors.sort();
        Self(selectors)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SelectorList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Where the document under test comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSource {
    File { path: String },
    Url { url: String },
}

impl ContentSource {
    /// Choose the source for one invocation. A URL always wins over the file.
    pub fn select(file: &str, url: Option<&str>) -> Self {
        match url {
            Some(url) => ContentSource::Url {
                url: url.to_string(),
            },
            None => ContentSource::File {
                path: file.to_string(),
            },
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::File { path } => write!(f, "file {path}"),
            ContentSource::Url { url } => write!(f, "url {url}"),
        }
    }
}

/// Raw HTML obtained from a [`ContentSource`].
#[derive(Debug, Clone)]
pub struct DocumentContent {
    pub origin: ContentSource,
    pub html: String,
}

/// Selector -> "at least one element matched".
///
/// Keys iterate in ascending order, which is the order the selector list
/// was evaluated in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    entries: BTreeMap<String, bool>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result. A repeated selector overwrites the earlier entry.
    pub fn record(&mut self, selector: &str, present: bool) {
        self.entries.insert(selector.to_string(), present);
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// True when every selector matched something (vacuously true when empty).
    pub fn all_present(&self) -> bool {
        self.entries.values().all(|present| *present)
    }

    /// Selectors with no match, in report order.
    pub fn missing(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, present)| !present)
            .map(|(selector, _)| selector)
            .collect()
    }

    /// Serialize as JSON with a 4-space indent.
    pub fn to_pretty_json(&self) -> GraderResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| GraderError::Serialize(e.to_string()))
    }
}

/// Errors that can occur while grading a document.
#[derive(thiserror::Error, Debug)]
pub enum GraderError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed checks file: {0}")]
    MalformedChecks(String),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Couldn't load the url requested ({url}): {reason}")]
    Fetch { url: String, reason: String },

    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for GraderError {
    fn from(e: serde_json::Error) -> Self {
        GraderError::Serialize(e.to_string())
    }
}

/// Convenience result type.
pub type GraderResult<T> = Result<T, GraderError>;
