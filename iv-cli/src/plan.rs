// ABOUTME: Page plan handed to the output formatters: which image sits in which cell of which page
// ABOUTME: Combines a session's pages with an optional window geometry for cell placement

use iv_core::{CellRect, GridShape, Page, Session, WindowGeometry, layout_page};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagePlan {
    pub shape: GridShape,
    pub window: Option<WindowGeometry>,
    pub total_images: usize,
    pub total_pages: usize,
    pub pages: Vec<PlannedPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedPage {
    pub number: usize,
    pub images: Vec<PlannedImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedImage {
    pub slot: usize,
    pub path: PathBuf,
    /// Only known when the output is a terminal
    pub cell: Option<CellRect>,
}

impl PagePlan {
    /// Plan every page, or only the session's current page when `current_only` is set.
    pub fn build(session: &Session, window: Option<WindowGeometry>, current_only: bool) -> Self {
        let shape = session.shape();

        let pages: Vec<PlannedPage> = if current_only {
            session
                .current_page()
                .map(|page| plan_page(page, shape, window))
                .into_iter()
                .collect()
        } else {
            session
                .pages()
                .iter()
                .map(|page| plan_page(page, shape, window))
                .collect()
        };

        Self {
            shape,
            window,
            total_images: session.images().len(),
            total_pages: session.pages().len(),
            pages,
        }
    }
}

fn plan_page(page: &Page, shape: GridShape, window: Option<WindowGeometry>) -> PlannedPage {
    let images = match window {
        Some(geometry) => layout_page(geometry, shape, page)
            .into_iter()
            .map(|placement| PlannedImage {
                slot: placement.slot,
                path: placement.image,
                cell: Some(placement.cell),
            })
            .collect(),
        None => page
            .images
            .iter()
            .enumerate()
            .map(|(slot, path)| PlannedImage {
                slot,
                path: path.clone(),
                cell: None,
            })
            .collect(),
    };

    PlannedPage {
        number: page.number,
        images,
    }
}
