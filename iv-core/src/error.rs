// ABOUTME: Error taxonomy for image discovery, grid configuration, terminal probing and paging
// ABOUTME: Each variant maps to one failure class and carries a user-facing hint where useful

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IvError {
    #[error("Cannot read image directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("Invalid grid configuration: {0}")]
    ConfigValidation(String),

    #[error("Not a terminal: {0}")]
    NotATerminal(String),

    #[error("Invalid grid shape {columns}x{rows}: page capacity must be at least 1")]
    InvalidShape { columns: u32, rows: u32 },

    #[error("Page {requested} out of range (1..={available})")]
    PageOutOfRange { requested: usize, available: usize },
}

impl IvError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            IvError::Directory { .. } => {
                Some("Check that the path exists, is a directory and is readable")
            }
            IvError::ConfigNotFound(_) => {
                Some("Pass an existing file with --config or omit it to use the default grid")
            }
            IvError::ConfigParse(_) => Some("The config file must be a YAML mapping"),
            IvError::ConfigValidation(_) => Some(
                "Expected a section like:\n\ngrid:\n  columns: 4\n  rows: 3\n\nBoth values must be positive integers",
            ),
            IvError::NotATerminal(_) => {
                Some("Run iv in an interactive terminal, or set --columns/--rows instead of --fit")
            }
            IvError::PageOutOfRange { .. } => Some("Pages are numbered from 1"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IvError::ConfigNotFound(PathBuf::from("/tmp/iv.yaml")).to_string(),
            "Config file not found: /tmp/iv.yaml"
        );
        assert_eq!(
            IvError::ConfigValidation("grid.columns must be positive".to_string()).to_string(),
            "Invalid grid configuration: grid.columns must be positive"
        );
        assert_eq!(
            IvError::InvalidShape {
                columns: 0,
                rows: 3
            }
            .to_string(),
            "Invalid grid shape 0x3: page capacity must be at least 1"
        );
        assert_eq!(
            IvError::PageOutOfRange {
                requested: 5,
                available: 2
            }
            .to_string(),
            "Page 5 out of range (1..=2)"
        );
    }

    #[test]
    fn test_directory_error_keeps_source() {
        use std::error::Error;

        let err = IvError::Directory {
            path: PathBuf::from("/missing"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("Cannot read image directory /missing"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_help_text() {
        assert!(
            IvError::ConfigValidation("x".to_string())
                .help_text()
                .unwrap()
                .contains("columns: 4")
        );
        assert!(IvError::NotATerminal("pipe".to_string()).help_text().is_some());
        assert_eq!(
            IvError::InvalidShape {
                columns: 0,
                rows: 0
            }
            .help_text(),
            None
        );
    }
}
