//! Evaluating selector checks against a parsed HTML document.

use std::path::Path;

use scraper::{Html, Selector};

use crate::acquire::read_file;
use crate::checks::load_checks;
use crate::types::{GraderError, GraderResult, Report, SelectorList};

/// Compile a selector string with the CSS engine.
fn compile(selector: &str) -> GraderResult<Selector> {
    Selector::parse(selector).map_err(|e| GraderError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Whether `document` has at least one element matching `selector`.
pub fn is_present(document: &Html, selector: &Selector) -> bool {
    document.select(selector).next().is_some()
}

/// Parse `html` once and test every selector in list order.
///
/// Fails without a partial report if any selector does not compile.
pub fn evaluate(checks: &SelectorList, html: &str) -> GraderResult<Report> {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        tracing::debug!("HTML parser recovered from {} errors", document.errors.len());
    }

    let mut report = Report::new();
    for raw in checks {
        let selector = compile(raw)?;
        let present = is_present(&document, &selector);
        tracing::debug!("{raw} -> {present}");
        report.record(raw, present);
    }
    Ok(report)
}

/// Grade a local HTML file against a checks file.
pub fn check_html_file(
    html_path: impl AsRef<Path>,
    checks_path: impl AsRef<Path>,
) -> GraderResult<Report> {
    let checks = load_checks(checks_path)?;
    let html_path = html_path.as_ref().display().to_string();
    let content = read_file(&html_path)?;
    evaluate(&checks, &content.html)
}
