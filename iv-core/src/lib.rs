// ABOUTME: Pagination engine for terminal image viewers
// ABOUTME: Discovers images, loads the grid config, probes the window and splits images into pages

pub mod config;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod pagination;
pub mod session;
pub mod terminal;

pub use config::load as load_config;
pub use discovery::{ImageList, discover, is_image};
pub use error::IvError;
pub use layout::{CellRect, Placement, TileSize, layout_page};
pub use pagination::{GridShape, Page, PageList, paginate};
pub use session::Session;
pub use terminal::{FixedProbe, TerminalProbe, WindowGeometry, WindowSizeProbe};
