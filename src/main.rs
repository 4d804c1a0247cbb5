use anyhow::{Context, Result};
use callsite_locator::analyze_path;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "callsite-locator")]
#[command(
    about = "Find calls of a property on the variable a required module is bound to",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Module name as written inside require(), e.g. fs/promises
    module: String,

    /// Property invoked on the module variable, e.g. readFile
    property: String,

    /// JavaScript or TypeScript source file to scan
    path: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let report = analyze_path(&cli.path, &cli.module, &cli.property)
        .with_context(|| format!("failed to analyze {}", cli.path.display()))?;

    let Some(variable) = report.variable() else {
        println!(
            "{}",
            format!("no import found for '{}'", report.module).yellow()
        );
        return Ok(());
    };

    println!(
        "{}",
        format!("module \"{}\" imported as \"{}\"", report.module, variable).bold()
    );
    println!(
        "{}",
        format!("all occurrences of {} invoking {}:", variable, report.property).dimmed()
    );
    for invocation in &report.invocations {
        println!("{invocation}");
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
