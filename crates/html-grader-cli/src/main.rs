//! html-grader — entry point.

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use html_grader_cli::config::{GradeConfig, CHECKS_FILE_DEFAULT};
use html_grader_cli::runner;

#[derive(Parser)]
#[command(
    name = "html-grader",
    about = "Check an HTML file or web page for elements matching a list of CSS selectors",
    version
)]
struct Cli {
    /// Path to the checks file (JSON array of selectors).
    #[arg(short, long, default_value = CHECKS_FILE_DEFAULT)]
    checks: String,

    /// Path to the HTML file to grade [default: index.html].
    /// The default is ignored when --url is given.
    #[arg(short, long)]
    file: Option<String>,

    /// URL of a page to fetch and grade instead of --file.
    #[arg(short, long)]
    url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = GradeConfig::resolve(&cli.checks, cli.file.as_deref(), cli.url.as_deref())?;
    tracing::info!("Grading {} with checks from {}", config.source, config.checks);

    let report = runner::grade(&config).await?;
    println!("{}", runner::render(&report)?);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "html-grader", &mut std::io::stdout());
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // 0 = report emitted, 1 = any failure
    if let Err(e) = run(&cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
