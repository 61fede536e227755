// ABOUTME: Grid shape and the deterministic partition of an image list into fixed-capacity pages
// ABOUTME: Pages preserve discovery order; flattening a page list reproduces its input exactly

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::discovery::ImageList;
use crate::error::IvError;

/// Number of image columns and rows shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridShape {
    pub columns: u32,
    pub rows: u32,
}

impl GridShape {
    /// Shape used when a config file has no grid section.
    pub const DEFAULT: GridShape = GridShape {
        columns: 1,
        rows: 1,
    };

    pub fn new(columns: u32, rows: u32) -> Result<Self, IvError> {
        let shape = Self { columns, rows };
        shape.capacity()?;
        Ok(shape)
    }

    /// Maximum number of images per page.
    ///
    /// Fails when either dimension is zero or the product overflows `usize`.
    pub fn capacity(&self) -> Result<usize, IvError> {
        (self.columns as usize)
            .checked_mul(self.rows as usize)
            .filter(|capacity| *capacity > 0)
            .ok_or(IvError::InvalidShape {
                columns: self.columns,
                rows: self.rows,
            })
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based position in the page list
    pub number: usize,
    pub images: Vec<PathBuf>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageList {
    pages: Vec<Page>,
}

impl PageList {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up a page by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&Page> {
        number.checked_sub(1).and_then(|index| self.pages.get(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// All images in page order.
    pub fn flatten(&self) -> Vec<PathBuf> {
        self.pages
            .iter()
            .flat_map(|page| page.images.iter().cloned())
            .collect()
    }

    /// Number of the page holding `image`, if any.
    pub fn page_of(&self, image: &Path) -> Option<usize> {
        self.pages
            .iter()
            .find(|page| page.images.iter().any(|p| p == image))
            .map(|page| page.number)
    }
}

impl<'a> IntoIterator for &'a PageList {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Split `images` into consecutive pages of `shape.capacity()` images.
///
/// Every page is full except possibly the last one. An empty image list
/// yields an empty page list rather than a single empty page.
pub fn paginate(images: &ImageList, shape: GridShape) -> Result<PageList, IvError> {
    let capacity = shape.capacity()?;

    let pages: Vec<Page> = images
        .as_slice()
        .chunks(capacity)
        .enumerate()
        .map(|(index, chunk)| Page {
            number: index + 1,
            images: chunk.to_vec(),
        })
        .collect();

    log::debug!(
        "Paginated {} images into {} pages of up to {} ({})",
        images.len(),
        pages.len(),
        capacity,
        shape
    );

    Ok(PageList { pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> ImageList {
        names.iter().map(PathBuf::from).collect()
    }

    fn page_names(pages: &PageList) -> Vec<Vec<String>> {
        pages
            .iter()
            .map(|page| {
                page.images
                    .iter()
                    .map(|p| p.to_string_lossy().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_even_split() {
        let list = images(&["a", "b", "c", "d", "e", "f"]);
        let pages = paginate(&list, GridShape::new(2, 1).unwrap()).unwrap();

        assert_eq!(
            page_names(&pages),
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]
        );
        assert!(pages.iter().all(|page| page.len() == 2));
    }

    #[test]
    fn test_remainder_on_last_page() {
        let list = images(&["a", "b", "c", "d", "e", "f"]);
        let pages = paginate(&list, GridShape::new(2, 2).unwrap()).unwrap();

        assert_eq!(
            page_names(&pages),
            vec![vec!["a", "b", "c", "d"], vec!["e", "f"]]
        );
        assert_eq!(pages.get(1).unwrap().number, 1);
        assert_eq!(pages.get(2).unwrap().number, 2);
        assert!(pages.get(0).is_none());
        assert!(pages.get(3).is_none());
    }

    #[test]
    fn test_empty_list_has_no_pages() {
        let pages = paginate(&ImageList::default(), GridShape::new(3, 3).unwrap()).unwrap();
        assert!(pages.is_empty());
        assert_eq!(pages.len(), 0);
    }

    #[test]
    fn test_single_page_when_capacity_exceeds_images() {
        let list = images(&["a", "b"]);
        let pages = paginate(&list, GridShape::new(4, 4).unwrap()).unwrap();
        assert_eq!(page_names(&pages), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let list = images(&["a"]);
        let shape = GridShape {
            columns: 0,
            rows: 4,
        };

        let err = paginate(&list, shape).unwrap_err();
        assert!(matches!(
            err,
            IvError::InvalidShape {
                columns: 0,
                rows: 4
            }
        ));
        assert!(GridShape::new(3, 0).is_err());
    }

    #[test]
    fn test_flatten_and_page_of() {
        let list = images(&["a", "b", "c", "d", "e"]);
        let pages = paginate(&list, GridShape::new(1, 2).unwrap()).unwrap();

        assert_eq!(pages.flatten(), list.as_slice());
        assert_eq!(pages.page_of(Path::new("a")), Some(1));
        assert_eq!(pages.page_of(Path::new("d")), Some(2));
        assert_eq!(pages.page_of(Path::new("e")), Some(3));
        assert_eq!(pages.page_of(Path::new("z")), None);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let list = images(&["a", "b", "c"]);
        let shape = GridShape::new(2, 1).unwrap();
        assert_eq!(
            paginate(&list, shape).unwrap(),
            paginate(&list, shape).unwrap()
        );
    }

    #[test]
    fn test_shape_display_and_default() {
        assert_eq!(GridShape::default(), GridShape::DEFAULT);
        assert_eq!(GridShape::new(4, 3).unwrap().to_string(), "4x3");
        assert_eq!(GridShape::new(4, 3).unwrap().capacity().unwrap(), 12);
    }
}
