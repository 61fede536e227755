// ABOUTME: Maps page slots onto terminal cell rectangles and sizes grids to fit a window
// ABOUTME: Pure arithmetic over WindowGeometry and GridShape; nothing here touches the terminal

use serde::Serialize;
use std::path::PathBuf;

use crate::pagination::{GridShape, Page};
use crate::terminal::WindowGeometry;

/// Smallest area, in character cells, one image tile may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileSize {
    pub columns: u16,
    pub rows: u16,
}

impl Default for TileSize {
    fn default() -> Self {
        // Roughly square on common 1:2 character cells
        Self {
            columns: 24,
            rows: 12,
        }
    }
}

/// Rectangle in terminal cells, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// 0-based, row-major
    pub slot: usize,
    pub image: PathBuf,
    pub cell: CellRect,
}

impl GridShape {
    /// Largest grid whose tiles are at least `tile` cells in each direction.
    ///
    /// Always at least 1x1, even when the window is smaller than one tile.
    pub fn fit_window(geometry: WindowGeometry, tile: TileSize) -> GridShape {
        let columns = geometry.columns / tile.columns.max(1);
        let rows = geometry.rows / tile.rows.max(1);

        GridShape {
            columns: u32::from(columns.max(1)),
            rows: u32::from(rows.max(1)),
        }
    }
}

/// Size of a single grid cell when `shape` divides `geometry` evenly.
///
/// Leftover columns and rows stay unused at the right and bottom edges.
pub fn cell_size(geometry: WindowGeometry, shape: GridShape) -> (u16, u16) {
    let width = u32::from(geometry.columns) / shape.columns.max(1);
    let height = u32::from(geometry.rows) / shape.rows.max(1);
    // Both quotients are bounded by the u16 numerator
    (width as u16, height as u16)
}

/// Assign each image on `page` to its grid cell, filling rows left to right.
pub fn layout_page(geometry: WindowGeometry, shape: GridShape, page: &Page) -> Vec<Placement> {
    let (width, height) = cell_size(geometry, shape);
    let columns = shape.columns.max(1) as usize;

    page.images
        .iter()
        .enumerate()
        .map(|(slot, image)| {
            let column = (slot % columns) as u32;
            let row = (slot / columns) as u32;
            Placement {
                slot,
                image: image.clone(),
                cell: CellRect {
                    x: clamp_cells(column * u32::from(width)),
                    y: clamp_cells(row * u32::from(height)),
                    width,
                    height,
                },
            }
        })
        .collect()
}

fn clamp_cells(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
