// ABOUTME: Runs one iv invocation: probe the window, resolve the grid, page the directory, format
// ABOUTME: Takes the window probe as a parameter so runs can be tested without a terminal

use anyhow::{Context, Result};
use iv_core::{IvError, Session, WindowSizeProbe};

use crate::cli::Cli;
use crate::config::resolve_shape;
use crate::output::{JsonFormatter, OutputFormat, TableFormatter};
use crate::plan::PagePlan;

pub fn run(cli: &Cli, probe: &dyn WindowSizeProbe, use_color: bool) -> Result<String> {
    let window = match probe.probe() {
        Ok(geometry) => Some(geometry),
        Err(err) if cli.fit => {
            return Err(err).context("--fit needs an interactive terminal");
        }
        Err(err) => {
            log::debug!("Window size unavailable, skipping cell layout: {}", err);
            None
        }
    };

    let (shape, source) = resolve_shape(
        cli.explicit_shape(),
        window.filter(|_| cli.fit).map(|geometry| (geometry, cli.tile_size())),
        cli.config.as_deref(),
    )?;
    log::info!("Using {} grid from {}", shape, source);

    let mut session = Session::open(&cli.directory, shape)?;

    if let Some(number) = cli.page {
        session.go_to(number as usize)?;
    }

    if session.pages().is_empty() && !cli.json {
        return Ok(format!(
            "No images found in {}",
            session.directory().display()
        ));
    }

    let plan = PagePlan::build(&session, window, cli.page.is_some());
    if cli.json {
        JsonFormatter::new(cli.pretty).format_plan(&plan)
    } else {
        TableFormatter::new(use_color).format_plan(&plan)
    }
}

/// The core error behind `err`, if any, for printing its hint.
pub fn core_error(err: &anyhow::Error) -> Option<&IvError> {
    err.chain().find_map(|cause| cause.downcast_ref::<IvError>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use iv_core::{FixedProbe, WindowGeometry};
    use std::fs::File;
    use tempfile::TempDir;

    fn gallery(names: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for name in names {
            File::create(temp_dir.path().join(name)).unwrap();
        }
        temp_dir
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("iv").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_fit_requires_terminal() {
        let dir = gallery(&["a.png"]);
        let cli = parse(&[dir.path().to_str().unwrap(), "--fit"]);

        let err = run(&cli, &FixedProbe::detached(), false).unwrap_err();
        assert!(err.to_string().contains("--fit needs an interactive terminal"));
        assert!(matches!(core_error(&err), Some(IvError::NotATerminal(_))));
    }

    #[test]
    fn test_fit_uses_window() {
        let dir = gallery(&["a.png", "b.png", "c.png"]);
        let cli = parse(&[dir.path().to_str().unwrap(), "--fit", "--json"]);
        let probe = FixedProbe::new(WindowGeometry::new(24, 48));

        let output = run(&cli, &probe, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["shape"]["columns"], 2);
        assert_eq!(parsed["shape"]["rows"], 2);
        assert_eq!(parsed["pages"][0]["images"][2]["cell"]["y"], 12);
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let cli = parse(&[missing.to_str().unwrap(), "--columns", "1", "--rows", "1"]);

        let err = run(&cli, &FixedProbe::detached(), false).unwrap_err();
        assert!(matches!(core_error(&err), Some(IvError::Directory { .. })));
    }

    #[test]
    fn test_page_out_of_range() {
        let dir = gallery(&["a.png", "b.png"]);
        let cli = parse(&[
            dir.path().to_str().unwrap(),
            "--columns",
            "2",
            "--rows",
            "1",
            "--page",
            "2",
        ]);

        let err = run(&cli, &FixedProbe::detached(), false).unwrap_err();
        assert!(matches!(
            core_error(&err),
            Some(IvError::PageOutOfRange {
                requested: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn test_empty_directory_message() {
        let dir = gallery(&["notes.txt"]);
        let cli = parse(&[dir.path().to_str().unwrap(), "--columns", "2", "--rows", "2"]);

        let output = run(&cli, &FixedProbe::detached(), false).unwrap();
        assert!(output.starts_with("No images found in"));
    }

    #[test]
    fn test_single_page_table() {
        let dir = gallery(&["a.png", "b.png", "c.png"]);
        let cli = parse(&[
            dir.path().to_str().unwrap(),
            "--columns",
            "1",
            "--rows",
            "2",
            "-p",
            "2",
        ]);

        let output = run(&cli, &FixedProbe::new(WindowGeometry::new(20, 40)), false).unwrap();
        assert!(output.contains("2/2"));
        assert!(!output.contains("1/2"));
        assert!(output.contains("c.png"));
        assert!(output.contains("0,0 40x10"));
    }
}
