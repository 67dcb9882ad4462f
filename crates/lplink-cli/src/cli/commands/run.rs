//! `lplink run` – replace the master link across all derivatives.

use anyhow::{Context, Result};
use lplink_core::batch::{self, BatchOptions};
use lplink_core::config;
use std::io::{self, Write};

use crate::cli::RunArgs;

/// Per-file failures are printed and logged but do not make this fail.
pub fn run_replace(args: &RunArgs) -> Result<()> {
    let project = config::load_or_builtin(args.config.as_deref())?;
    let base_dir = match &args.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let opts = BatchOptions {
        base_dir,
        dry_run: args.dry_run,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = batch::run_batch(&project, &opts, &mut out).context("write report")?;
    out.flush()?;

    let missing = report.missing().count();
    let failed = report.failed().count();
    if missing > 0 || failed > 0 {
        tracing::warn!(
            "{} derivative(s) missing, {} failed; total {}",
            missing,
            failed,
            report.total
        );
    }
    Ok(())
}
