//! Bump the version of every package under `packages/`
//!
//! Usage: `bump-version [patch|minor|major] [root-dir]`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bump_version::{plan_bump, BumpKind};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: bump-version [patch|minor|major] [root-dir]";

fn main() -> Result<ExitCode> {
    // Diagnostics go to stderr so stdout stays a clean report
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "bump_version=info".into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    // Parse command line args
    let args: Vec<String> = std::env::args().collect();

    let kind = match args.get(1).map(|arg| arg.parse::<BumpKind>()) {
        None => BumpKind::default(),
        Some(Ok(kind)) => kind,
        Some(Err(err)) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", USAGE);
            eprintln!("Default: patch");
            return Ok(ExitCode::FAILURE);
        }
    };

    let root = match args.get(2) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let plan = plan_bump(&root, kind)?;

    println!(
        "Bumping all packages from {} to {} ({})",
        plan.baseline, plan.target, plan.kind
    );
    println!();

    let target = plan.target;
    let updates = plan.apply()?;

    for update in &updates {
        println!(
            "  {}: {} → {}",
            update.name, update.old_version, update.new_version
        );
    }

    println!();
    println!(
        "✓ Successfully bumped {} package(s) to version {}",
        updates.len(),
        target
    );

    Ok(ExitCode::SUCCESS)
}
