// ABOUTME: Terminal window geometry probing behind a small capability trait
// ABOUTME: Real probes query the controlling terminal; fixed probes stand in for tests and known sizes

use serde::Serialize;
use std::io::IsTerminal;

use crate::error::IvError;

/// Terminal size in character cells, plus pixel size when the terminal reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowGeometry {
    pub rows: u16,
    pub columns: u16,
    /// 0 when unknown
    pub pixel_width: u16,
    /// 0 when unknown
    pub pixel_height: u16,
}

impl WindowGeometry {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            pixel_width: 0,
            pixel_height: 0,
        }
    }

    pub fn with_pixels(mut self, pixel_width: u16, pixel_height: u16) -> Self {
        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
        self
    }

    fn validated(self) -> Result<Self, IvError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(IvError::NotATerminal(format!(
                "terminal reported an empty window ({} rows x {} columns)",
                self.rows, self.columns
            )));
        }
        Ok(self)
    }
}

/// Something that can report the current window geometry.
pub trait WindowSizeProbe {
    /// Snapshot of the window size. A result never has a zero row or column count.
    fn probe(&self) -> Result<WindowGeometry, IvError>;
}

/// Probe backed by a real terminal handle.
#[derive(Debug)]
pub struct TerminalProbe<H> {
    handle: H,
}

impl TerminalProbe<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<H: IsTerminal> TerminalProbe<H> {
    pub fn new(handle: H) -> Self {
        Self { handle }
    }
}

impl<H: IsTerminal> WindowSizeProbe for TerminalProbe<H> {
    fn probe(&self) -> Result<WindowGeometry, IvError> {
        if !self.handle.is_terminal() {
            return Err(IvError::NotATerminal(
                "output is redirected to a file or pipe".to_string(),
            ));
        }

        let geometry = match crossterm::terminal::window_size() {
            Ok(size) => WindowGeometry::new(size.rows, size.columns)
                .with_pixels(size.width, size.height),
            Err(e) => {
                log::debug!("Pixel window size unavailable ({}), falling back to cells", e);
                let (columns, rows) = crossterm::terminal::size()
                    .map_err(|e| IvError::NotATerminal(format!("size query failed: {}", e)))?;
                WindowGeometry::new(rows, columns)
            }
        };

        log::debug!(
            "Terminal is {} rows x {} columns ({}x{} px)",
            geometry.rows,
            geometry.columns,
            geometry.pixel_width,
            geometry.pixel_height
        );

        geometry.validated()
    }
}

/// Probe that returns a preset geometry; `None` behaves like a redirected stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedProbe {
    geometry: Option<WindowGeometry>,
}

impl FixedProbe {
    pub fn new(geometry: WindowGeometry) -> Self {
        Self {
            geometry: Some(geometry),
        }
    }

    pub fn detached() -> Self {
        Self { geometry: None }
    }
}

impl WindowSizeProbe for FixedProbe {
    fn probe(&self) -> Result<WindowGeometry, IvError> {
        self.geometry
            .ok_or_else(|| IvError::NotATerminal("no terminal attached".to_string()))?
            .validated()
    }
}
