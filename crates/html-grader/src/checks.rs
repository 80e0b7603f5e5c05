//! Loading the list of selectors to check for.

use std::path::Path;

use crate::types::{GraderError, GraderResult, SelectorList};

/// Parse a checks document: a JSON array of selector strings.
pub fn parse_checks(text: &str) -> GraderResult<SelectorList> {
    let selectors: Vec<String> = serde_json::from_str(text)
        .map_err(|e| GraderError::MalformedChecks(format!("expected an array of strings: {e}")))?;
    Ok(SelectorList::new(selectors))
}

/// Read and parse a checks file, returning the selectors sorted.
pub fn load_checks(path: impl AsRef<Path>) -> GraderResult<SelectorList> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| GraderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let checks = parse_checks(&text)?;
    tracing::debug!("Loaded {} checks from {}", checks.len(), path.display());
    Ok(checks)
}
