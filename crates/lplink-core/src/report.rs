//! Console lines printed while the batch runs.

use crate::project::Project;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Port suggested for the local preview server.
pub const PREVIEW_PORT: u16 = 8000;

fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn banner<W: Write>(out: &mut W, project: &Project) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "LP derivative link project: {}", project.name)?;
    rule(out)?;
    writeln!(out)
}

pub fn processing<W: Write>(
    out: &mut W,
    folder: &str,
    index_file: &str,
    old: &str,
    new: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Processing: {folder}/{index_file}")?;
    writeln!(out, "  before: {old}")?;
    writeln!(out, "  after:  {new}")
}

pub fn replaced<W: Write>(
    out: &mut W,
    index_file: &str,
    count: usize,
    dry_run: bool,
) -> io::Result<()> {
    let verb = if dry_run { "would replace" } else { "replaced" };
    writeln!(out, "✓ {index_file}: {verb} {count} link(s)")
}

pub fn missing<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "⚠ warning: {} not found", path.display())
}

pub fn failed<W: Write>(out: &mut W, path: &Path, message: &str) -> io::Result<()> {
    writeln!(out, "✗ error: {} - {message}", path.display())
}

pub fn summary<W: Write>(out: &mut W, total: usize, dry_run: bool) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    if dry_run {
        writeln!(out, "Dry run: {total} link(s) would be replaced in total")?;
    } else {
        writeln!(out, "Done: replaced {total} link(s) in total")?;
    }
    rule(out)?;
    writeln!(out)
}

/// Manual follow-up steps: preview locally, commit, upload.
pub fn next_steps<W: Write>(out: &mut W, project: &Project) -> io::Result<()> {
    writeln!(out, "Next steps:")?;
    writeln!(
        out,
        "1. Preview locally: python3 -m http.server {PREVIEW_PORT}"
    )?;
    for link in &project.mapping {
        writeln!(
            out,
            "   - http://localhost:{PREVIEW_PORT}/{}/{}/",
            project.upload_dir, link.folder
        )?;
    }
    writeln!(out, "2. Git commit & push")?;
    writeln!(
        out,
        "3. Upload via FTP: {}/ -> public_html/",
        project.upload_dir
    )?;
    writeln!(out)
}
