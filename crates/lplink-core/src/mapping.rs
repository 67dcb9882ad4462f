//! Ordered folder → target URL mapping for derivative landing pages.
//!
//! Order is significant: the batch processes and reports entries in the
//! order they were inserted.

use std::path::{Component, Path};
use thiserror::Error;

/// One derivative landing page: its folder under the upload directory and
/// the sales link that replaces the master link in its entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivativeLink {
    pub folder: String,
    pub url: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("duplicate derivative folder `{0}`")]
    DuplicateFolder(String),
    #[error("derivative folder `{0}` must be a single directory name")]
    InvalidFolder(String),
    #[error("target url `{url}` for `{folder}` is not an absolute url: {reason}")]
    InvalidUrl {
        folder: String,
        url: String,
        reason: String,
    },
}

/// Insertion-ordered mapping with unique folder keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMapping {
    entries: Vec<DerivativeLink>,
}

impl LinkMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a derivative. Rejects duplicate or unsafe folder names and
    /// target URLs that are not absolute.
    pub fn push(
        &mut self,
        folder: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<(), MappingError> {
        let folder = folder.into();
        let url = url.into();

        if !is_single_dir_name(&folder) {
            return Err(MappingError::InvalidFolder(folder));
        }
        if self.get(&folder).is_some() {
            return Err(MappingError::DuplicateFolder(folder));
        }
        if let Err(e) = url::Url::parse(&url) {
            return Err(MappingError::InvalidUrl {
                folder,
                url,
                reason: e.to_string(),
            });
        }

        self.entries.push(DerivativeLink { folder, url });
        Ok(())
    }

    pub fn get(&self, folder: &str) -> Option<&DerivativeLink> {
        self.entries.iter().find(|e| e.folder == folder)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DerivativeLink> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a LinkMapping {
    type Item = &'a DerivativeLink;
    type IntoIter = std::slice::Iter<'a, DerivativeLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Build a mapping from `(folder, url)` pairs, keeping their order.
pub fn from_pairs<I, F, U>(pairs: I) -> Result<LinkMapping, MappingError>
where
    I: IntoIterator<Item = (F, U)>,
    F: Into<String>,
    U: Into<String>,
{
    let mut mapping = LinkMapping::new();
    for (folder, url) in pairs {
        mapping.push(folder, url)?;
    }
    Ok(mapping)
}

/// True if `name` joins onto a directory as exactly one child entry.
fn is_single_dir_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}
