//! The derivative-link project: what to replace, with what, and where.

use crate::mapping::{self, DerivativeLink, LinkMapping, MappingError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Display name of the built-in project.
pub const PROJECT_NAME: &str = "cushion-manga";

/// Directory (relative to the base dir) holding one folder per derivative.
pub const UPLOAD_DIR: &str = "xserver-upload";

/// Entry-point file inside each derivative folder.
pub const INDEX_FILE: &str = "index.html";

/// Link currently embedded in every derivative page, replaced per folder.
pub const MASTER_LINK: &str = "https://www.shinnihonseiyaku.co.jp/lp/promotion/cosme/2375b_19/";

/// Built-in derivative folders and their sales links, in processing order.
pub const DERIVATIVE_LINKS: &[(&str, &str)] = &[
    (
        "cushion-manga-1",
        "https://greatasp.com/link.php?i=pi7o66ridb7f&m=mi6f5xl5wn0u",
    ),
    (
        "cushion-manga-2",
        "https://greatasp.com/link.php?i=pi7o6beemjrm&m=mi73szi7s9zb",
    ),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("master link must not be empty")]
    EmptyMasterLink,
    #[error("{0} must be a single path component")]
    InvalidName(&'static str),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub upload_dir: String,
    pub index_file: String,
    pub master_link: String,
    pub mapping: LinkMapping,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        upload_dir: impl Into<String>,
        index_file: impl Into<String>,
        master_link: impl Into<String>,
        mapping: LinkMapping,
    ) -> Result<Self, ProjectError> {
        let project = Self {
            name: name.into(),
            upload_dir: upload_dir.into(),
            index_file: index_file.into(),
            master_link: master_link.into(),
            mapping,
        };
        if project.master_link.is_empty() {
            return Err(ProjectError::EmptyMasterLink);
        }
        if project.index_file.is_empty() || project.index_file.contains(['/', '\\']) {
            return Err(ProjectError::InvalidName("index_file"));
        }
        if project.upload_dir.is_empty() {
            return Err(ProjectError::InvalidName("upload_dir"));
        }
        Ok(project)
    }

    /// The hardcoded project this tool ships with.
    pub fn builtin() -> Result<Self, ProjectError> {
        let mapping = mapping::from_pairs(DERIVATIVE_LINKS.iter().copied())?;
        Self::new(PROJECT_NAME, UPLOAD_DIR, INDEX_FILE, MASTER_LINK, mapping)
    }

    /// `<base_dir>/<upload_dir>`
    pub fn upload_root(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.upload_dir)
    }

    /// `<base_dir>/<upload_dir>/<folder>/<index_file>`
    pub fn target_file(&self, base_dir: &Path, link: &DerivativeLink) -> PathBuf {
        self.upload_root(base_dir)
            .join(&link.folder)
            .join(&self.index_file)
    }
}
