// ABOUTME: Viewing session that owns one directory's images, grid shape and derived pages
// ABOUTME: Replaces process-wide state with an explicit value; refresh re-runs discovery and paging

use std::path::{Path, PathBuf};

use crate::discovery::{self, ImageList};
use crate::error::IvError;
use crate::pagination::{self, GridShape, Page, PageList};

/// Images from one directory paged with one grid shape, plus a page cursor.
#[derive(Debug, Clone)]
pub struct Session {
    directory: PathBuf,
    images: ImageList,
    shape: GridShape,
    pages: PageList,
    current: usize,
}

impl Session {
    /// Discover the images in `directory` and page them with `shape`.
    pub fn open<P: AsRef<Path>>(directory: P, shape: GridShape) -> Result<Self, IvError> {
        let directory = directory.as_ref().to_path_buf();
        let images = discovery::discover(&directory)?;
        Self::from_images(directory, images, shape)
    }

    /// Build a session from an already discovered image list.
    pub fn from_images(
        directory: PathBuf,
        images: ImageList,
        shape: GridShape,
    ) -> Result<Self, IvError> {
        let pages = pagination::paginate(&images, shape)?;
        Ok(Self {
            directory,
            images,
            shape,
            pages,
            current: 1,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    /// 1-based number of the current page (1 even when there are no pages).
    pub fn current_number(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    /// Advance one page; `None` when already on the last page.
    pub fn next_page(&mut self) -> Option<&Page> {
        if self.current >= self.pages.len() {
            return None;
        }
        self.current += 1;
        self.current_page()
    }

    /// Go back one page; `None` when already on the first page.
    pub fn previous_page(&mut self) -> Option<&Page> {
        if self.current <= 1 || self.pages.is_empty() {
            return None;
        }
        self.current -= 1;
        self.current_page()
    }

    pub fn go_to(&mut self, number: usize) -> Result<&Page, IvError> {
        if number == 0 || number > self.pages.len() {
            return Err(IvError::PageOutOfRange {
                requested: number,
                available: self.pages.len(),
            });
        }
        self.current = number;
        self.pages.get(number).ok_or(IvError::PageOutOfRange {
            requested: number,
            available: self.pages.len(),
        })
    }

    /// Re-page with a new shape, keeping the first image of the current page in view.
    ///
    /// On error the session is left unchanged.
    pub fn set_shape(&mut self, shape: GridShape) -> Result<(), IvError> {
        let anchor = self.anchor();
        let pages = pagination::paginate(&self.images, shape)?;

        log::debug!(
            "Grid changed from {} to {}: {} -> {} pages",
            self.shape,
            shape,
            self.pages.len(),
            pages.len()
        );

        self.shape = shape;
        self.pages = pages;
        self.current = self.locate(anchor.as_deref());
        Ok(())
    }

    /// Re-scan the directory and rebuild every page.
    ///
    /// The previous page list is discarded, not merged. The cursor follows the
    /// first image of the current page when it still exists, and is otherwise
    /// clamped to the new page count.
    pub fn refresh(&mut self) -> Result<(), IvError> {
        let anchor = self.anchor();
        let images = discovery::discover(&self.directory)?;
        let pages = pagination::paginate(&images, self.shape)?;

        self.images = images;
        self.pages = pages;
        self.current = self.locate(anchor.as_deref());
        Ok(())
    }

    fn anchor(&self) -> Option<PathBuf> {
        self.current_page()
            .and_then(|page| page.images.first())
            .cloned()
    }

    fn locate(&self, anchor: Option<&Path>) -> usize {
        anchor
            .and_then(|image| self.pages.page_of(image))
            .unwrap_or_else(|| self.current.clamp(1, self.pages.len().max(1)))
    }
}
