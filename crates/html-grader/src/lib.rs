//! html-grader — check an HTML document for elements matching a list of CSS selectors.

pub mod acquire;
pub mod checks;
pub mod evaluate;
pub mod types;

pub use acquire::{acquire, read_file, HttpFetcher};
pub use checks::{load_checks, parse_checks};
pub use evaluate::{check_html_file, evaluate, is_present};
pub use types::*;
