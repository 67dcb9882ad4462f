//! Batch driver: apply the project's mapping to every derivative folder.
//!
//! Entries are processed strictly in mapping order. A missing or unreadable
//! file is reported and skipped; it never stops the remaining entries.

use crate::project::Project;
use crate::replace;
use crate::report;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Directory containing the upload directory.
    pub base_dir: PathBuf,
    /// Count occurrences without rewriting any file.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Replaced { count: usize },
    Missing,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub folder: String,
    pub path: PathBuf,
    pub outcome: EntryOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub entries: Vec<EntryReport>,
    pub total: usize,
}

impl BatchReport {
    fn record(&mut self, folder: &str, path: PathBuf, outcome: EntryOutcome) {
        if let EntryOutcome::Replaced { count } = outcome {
            self.total += count;
        }
        self.entries.push(EntryReport {
            folder: folder.to_string(),
            path,
            outcome,
        });
    }

    pub fn missing(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries
            .iter()
            .filter(|e| e.outcome == EntryOutcome::Missing)
    }

    pub fn failed(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, EntryOutcome::Failed { .. }))
    }
}

/// Run the whole batch, writing progress lines to `out`.
///
/// Only a failure to write to `out` is returned as an error; per-file
/// problems end up in the report.
pub fn run_batch<W: Write>(
    project: &Project,
    opts: &BatchOptions,
    out: &mut W,
) -> io::Result<BatchReport> {
    report::banner(out, project)?;
    tracing::info!(
        "starting batch for `{}` ({} derivative(s), dry_run={})",
        project.name,
        project.mapping.len(),
        opts.dry_run
    );

    let mut batch = BatchReport::default();
    for link in &project.mapping {
        let path = project.target_file(&opts.base_dir, link);

        if !path.exists() {
            tracing::warn!("{} not found, skipping `{}`", path.display(), link.folder);
            report::missing(out, &path)?;
            batch.record(&link.folder, path, EntryOutcome::Missing);
            continue;
        }

        report::processing(
            out,
            &link.folder,
            &project.index_file,
            &project.master_link,
            &link.url,
        )?;

        let outcome = match process_file(&path, &project.master_link, &link.url, opts.dry_run) {
            Ok(count) => {
                tracing::info!("{}: {} occurrence(s)", path.display(), count);
                report::replaced(out, &project.index_file, count, opts.dry_run)?;
                EntryOutcome::Replaced { count }
            }
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                let message = e.to_string();
                report::failed(out, &path, &message)?;
                EntryOutcome::Failed { message }
            }
        };
        batch.record(&link.folder, path, outcome);
    }

    report::summary(out, batch.total, opts.dry_run)?;
    report::next_steps(out, project)?;
    tracing::info!("batch finished: {} replacement(s)", batch.total);
    Ok(batch)
}

fn process_file(
    path: &Path,
    old: &str,
    new: &str,
    dry_run: bool,
) -> Result<usize, replace::ReplaceError> {
    if dry_run {
        replace::count_links_in_file(path, old)
    } else {
        replace::replace_links_in_file(path, old, new)
    }
}
