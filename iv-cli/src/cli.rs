// ABOUTME: CLI argument definitions for the iv image grid pager
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::Parser;
use iv_core::TileSize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iv")]
#[command(about = "Split a directory of images into terminal-sized grid pages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory to scan for images
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Grid config file (YAML); searched in standard locations when omitted
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Images per row, overrides the config file
    #[arg(long, requires = "rows", value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: Option<u32>,

    /// Image rows per page, overrides the config file
    #[arg(long, requires = "columns", value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: Option<u32>,

    /// Size the grid to the current terminal window
    #[arg(long, conflicts_with_all = ["columns", "rows"])]
    pub fit: bool,

    /// Minimum tile width in character cells when fitting
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(u16).range(1..))]
    pub tile_width: u16,

    /// Minimum tile height in character cells when fitting
    #[arg(long, default_value = "12", value_parser = clap::value_parser!(u16).range(1..))]
    pub tile_height: u16,

    /// Only show this page (1-based)
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Force colored output even when piped
    #[arg(long, conflicts_with = "no_color")]
    pub force_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn tile_size(&self) -> TileSize {
        TileSize {
            columns: self.tile_width,
            rows: self.tile_height,
        }
    }

    /// Grid given directly on the command line, if both dimensions were passed.
    pub fn explicit_shape(&self) -> Option<(u32, u32)> {
        self.columns.zip(self.rows)
    }
}
