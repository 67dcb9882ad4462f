use crate::mapping::LinkMapping;
use crate::project::{Project, INDEX_FILE, UPLOAD_DIR};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `[[derivatives]]` entry in a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeConfig {
    /// Folder name under the upload directory.
    pub folder: String,
    /// Sales link written into this folder's entry file.
    pub url: String,
}

/// Project file (TOML). Only read when passed explicitly with `--config`;
/// without it the built-in project is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Display name shown in the banner.
    pub name: String,
    /// Directory holding the derivative folders, relative to the base dir.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Entry-point file inside each derivative folder.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// Link to replace in every derivative.
    pub master_link: String,
    /// Derivatives in processing order.
    #[serde(default)]
    pub derivatives: Vec<DerivativeConfig>,
}

fn default_upload_dir() -> String {
    UPLOAD_DIR.to_string()
}

fn default_index_file() -> String {
    INDEX_FILE.to_string()
}

impl ProjectConfig {
    pub fn into_project(self) -> Result<Project> {
        let mut mapping = LinkMapping::new();
        for d in self.derivatives {
            mapping.push(d.folder, d.url)?;
        }
        let project = Project::new(
            self.name,
            self.upload_dir,
            self.index_file,
            self.master_link,
            mapping,
        )?;
        Ok(project)
    }
}

impl From<&Project> for ProjectConfig {
    fn from(p: &Project) -> Self {
        Self {
            name: p.name.clone(),
            upload_dir: p.upload_dir.clone(),
            index_file: p.index_file.clone(),
            master_link: p.master_link.clone(),
            derivatives: p
                .mapping
                .iter()
                .map(|l| DerivativeConfig {
                    folder: l.folder.clone(),
                    url: l.url.clone(),
                })
                .collect(),
        }
    }
}

/// Load and validate a project file.
pub fn load_from_path(path: &Path) -> Result<Project> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ProjectConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    let project = cfg
        .into_project()
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(
        "loaded project `{}` with {} derivative(s) from {}",
        project.name,
        project.mapping.len(),
        path.display()
    );
    Ok(project)
}

/// Resolve the project: the file at `path` if given, else the built-in one.
pub fn load_or_builtin(path: Option<&Path>) -> Result<Project> {
    match path {
        Some(p) => load_from_path(p),
        None => Ok(Project::builtin()?),
    }
}

/// Write `project` as a new project file. Refuses to overwrite.
pub fn write_new(path: &Path, project: &Project) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let toml = toml::to_string_pretty(&ProjectConfig::from(project))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    tracing::info!("wrote project config to {}", path.display());
    Ok(())
}
