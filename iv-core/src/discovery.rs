// ABOUTME: Non-recursive directory scan that collects displayable images by filename extension
// ABOUTME: Results are sorted by full path so paging is reproducible across filesystems

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::IvError;

/// Extensions (lowercase, without the dot) treated as displayable images.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Ordered list of image paths.
///
/// Lists built by [`discover`] hold each path once, sorted. Collecting from an
/// iterator keeps the iterator's order and entries as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageList {
    images: Vec<PathBuf>,
}

impl ImageList {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.images.iter()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.images.iter().any(|p| p == path)
    }
}

impl FromIterator<PathBuf> for ImageList {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            images: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Check whether a filename names a displayable image.
///
/// Only the extension is inspected, case-insensitively. Names without an
/// extension (including dotfiles such as `.png`) are not images.
pub fn is_image<P: AsRef<Path>>(filename: P) -> bool {
    filename
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RECOGNIZED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// List the images directly inside `dir`.
///
/// Subdirectories are skipped, never descended into. Symlinks count when
/// they resolve to a regular file. The result is sorted by path.
pub fn discover<P: AsRef<Path>>(dir: P) -> Result<ImageList, IvError> {
    let dir = dir.as_ref();
    let directory_error = |source| IvError::Directory {
        path: dir.to_path_buf(),
        source,
    };

    let entries = std::fs::read_dir(dir).map_err(directory_error)?;

    let mut images = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let entry = entry.map_err(directory_error)?;
        let path = entry.path();

        // `Path::is_file` follows symlinks; a dangling link reads as false
        if path.is_file() && is_image(entry.file_name()) {
            images.push(path);
        } else {
            skipped += 1;
        }
    }

    images.sort();

    log::info!(
        "Discovered {} images in {} ({} other entries skipped)",
        images.len(),
        dir.display(),
        skipped
    );

    Ok(ImageList { images })
}
