use clap::Parser;
use sitecheck_core::checker::ConformanceChecker;
use sitecheck_core::checklist::Checklist;
use sitecheck_core::error::CoreResult;
use sitecheck_core::report::render::render_text;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Check a static site's markup, stylesheet and script against a content checklist.
#[derive(Debug, Parser)]
#[command(name = "site_checker", version)]
struct Args {
    /// Site root the checklist paths are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON checklist to use instead of the built-in one.
    #[arg(long)]
    checklist: Option<PathBuf>,

    /// Exit 1 when any check fails. By default the report never gates.
    #[arg(long)]
    fail_on_error: bool,

    /// Log run progress to stderr at info level unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "site_checker=info,sitecheck_core=info"
    } else {
        "site_checker=warn,sitecheck_core=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let checker = match build_checker(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("checklist error: {}", e);
            return ExitCode::from(2);
        }
    };

    let run = checker.run(&args.root);
    print!("{}", render_text(&run));

    let report = run.report();
    if args.fail_on_error && report.failed > 0 {
        tracing::info!(failed = report.failed, "failing exit requested");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn build_checker(args: &Args) -> CoreResult<ConformanceChecker> {
    match &args.checklist {
        Some(path) => ConformanceChecker::from_checklist(Checklist::from_path(path)?),
        None => ConformanceChecker::new_v1(),
    }
}
