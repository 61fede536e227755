// ABOUTME: This module handles output formatting for page plans
// ABOUTME: It provides a colored table formatter and a JSON formatter

use anyhow::Result;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::plan::{PagePlan, PlannedImage};

pub trait OutputFormat {
    fn format_plan(&self, plan: &PagePlan) -> Result<String>;
}

pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn summary(&self, plan: &PagePlan) -> String {
        let text = format!(
            "{} images on {} pages ({} grid, {} per page)",
            plan.total_images,
            plan.total_pages,
            plan.shape,
            u64::from(plan.shape.columns) * u64::from(plan.shape.rows)
        );

        if self.use_color {
            text.bold().to_string()
        } else {
            text
        }
    }

    fn format_page(&self, number: usize, total: usize) -> String {
        let text = format!("{}/{}", number, total);
        if self.use_color {
            text.cyan().to_string()
        } else {
            text
        }
    }

    fn format_cell(&self, image: &PlannedImage) -> String {
        match image.cell {
            Some(cell) => format!("{},{} {}x{}", cell.x, cell.y, cell.width, cell.height),
            None if self.use_color => "-".dimmed().to_string(),
            None => "-".to_string(),
        }
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Page")]
    page: String,
    #[tabled(rename = "Slot")]
    slot: usize,
    #[tabled(rename = "Cell")]
    cell: String,
    #[tabled(rename = "Image")]
    image: String,
}

impl OutputFormat for TableFormatter {
    fn format_plan(&self, plan: &PagePlan) -> Result<String> {
        let rows: Vec<TableRow> = plan
            .pages
            .iter()
            .flat_map(|page| {
                page.images.iter().map(move |image| TableRow {
                    page: self.format_page(page.number, plan.total_pages),
                    slot: image.slot + 1,
                    cell: self.format_cell(image),
                    image: image.path.display().to_string(),
                })
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(format!("{}\n\n{}", self.summary(plan), table))
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormat for JsonFormatter {
    fn format_plan(&self, plan: &PagePlan) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(plan)?)
        } else {
            Ok(serde_json::to_string(plan)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iv_core::{GridShape, ImageList, Session, WindowGeometry};
    use std::path::PathBuf;

    fn create_test_plan(window: Option<WindowGeometry>) -> PagePlan {
        let images: ImageList = ["a.png", "b.jpg", "c.gif"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let session =
            Session::from_images(PathBuf::from("."), images, GridShape::new(2, 1).unwrap())
                .unwrap();
        PagePlan::build(&session, window, false)
    }

    #[test]
    fn test_table_without_color() {
        let formatter = TableFormatter::new(false);
        let output = formatter.format_plan(&create_test_plan(None)).unwrap();

        assert!(output.starts_with("3 images on 2 pages (2x1 grid, 2 per page)"));
        assert!(output.contains("Page"));
        assert!(output.contains("Image"));
        assert!(output.contains("1/2"));
        assert!(output.contains("2/2"));
        assert!(output.contains("c.gif"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_table_with_cells() {
        let formatter = TableFormatter::new(false);
        let plan = create_test_plan(Some(WindowGeometry::new(20, 80)));
        let output = formatter.format_plan(&plan).unwrap();

        assert!(output.contains("0,0 40x20"));
        assert!(output.contains("40,0 40x20"));
    }

    #[test]
    fn test_table_with_color() {
        let formatter = TableFormatter::new(true);
        let output = formatter.format_plan(&create_test_plan(None)).unwrap();
        assert!(output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_output() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_plan(&create_test_plan(None)).unwrap();

        insta::assert_snapshot!(output, @r#"{"shape":{"columns":2,"rows":1},"window":null,"total_images":3,"total_pages":2,"pages":[{"number":1,"images":[{"slot":0,"path":"a.png","cell":null},{"slot":1,"path":"b.jpg","cell":null}]},{"number":2,"images":[{"slot":0,"path":"c.gif","cell":null}]}]}"#);
    }

    #[test]
    fn test_pretty_json_can_be_parsed() {
        let formatter = JsonFormatter::new(true);
        let plan = create_test_plan(Some(WindowGeometry::new(20, 80)));
        let output = formatter.format_plan(&plan).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total_pages"], 2);
        assert_eq!(parsed["window"]["columns"], 80);
        assert_eq!(parsed["pages"][0]["images"][1]["cell"]["x"], 40);
        assert!(output.contains('\n'));
    }
}
