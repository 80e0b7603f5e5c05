//! One grading run: load checks, acquire the document, evaluate.

use anyhow::{Context, Result};

use html_grader::{acquire, evaluate, load_checks, Report};

use crate::config::GradeConfig;

/// Run the pipeline. Nothing is printed; errors leave no partial report.
pub async fn grade(config: &GradeConfig) -> Result<Report> {
    let checks = load_checks(&config.checks)
        .with_context(|| format!("failed to load checks from {}", config.checks))?;

    let content = acquire(&config.source)
        .await
        .with_context(|| format!("failed to acquire {}", config.source))?;

    let report = evaluate(&checks, &content.html)
        .with_context(|| format!("failed to evaluate {}", content.origin))?;

    tracing::info!(
        "{} of {} checks present",
        report.iter().filter(|(_, present)| *present).count(),
        report.len()
    );
    Ok(report)
}

/// Text written to stdout for a finished report.
pub fn render(report: &Report) -> Result<String> {
    Ok(report.to_pretty_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use html_grader::ContentSource;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn write_checks(dir: &tempfile::TempDir, body: &str) -> String {
        let path = dir.path().join("checks.json");
        std::fs::write(&path, body).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_grade_file() {
        let dir = tempfile::tempdir().unwrap();
        let checks = write_checks(&dir, r##"["h1", "#missing"]"##);
        let html = dir.path().join("index.html");
        std::fs::write(&html, "<html><h1>Hi</h1></html>").unwrap();

        let cfg = GradeConfig::resolve(&checks, Some(html.to_str().unwrap()), None).unwrap();
        let report = grade(&cfg).await.unwrap();
        assert_eq!(
            render(&report).unwrap(),
            "{\n    \"#missing\": false,\n    \"h1\": true\n}"
        );
    }

    #[tokio::test]
    async fn test_grade_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<div><p>x</p></div>"))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let checks = write_checks(&dir, r#"["p", "table"]"#);
        let cfg = GradeConfig {
            checks,
            source: ContentSource::Url { url: server.uri() },
        };
        let report = grade(&cfg).await.unwrap();
        assert_eq!(report.get("p"), Some(true));
        assert_eq!(report.get("table"), Some(false));
    }

    #[tokio::test]
    async fn test_grade_url_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let checks = write_checks(&dir, r#"["p"]"#);
        let cfg = GradeConfig {
            checks,
            source: ContentSource::Url { url: server.uri() },
        };
        let err = grade(&cfg).await.unwrap_err();
        assert!(format!("{err:#}").contains("Couldn't load the url requested"));
    }

    #[tokio::test]
    async fn test_malformed_checks_stop_before_acquisition() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let checks = write_checks(&dir, "not json");
        let cfg = GradeConfig {
            checks,
            source: ContentSource::Url { url: server.uri() },
        };
        let err = grade(&cfg).await.unwrap_err();
        assert!(format!("{err:#}").contains("Malformed checks file"));
    }
}
