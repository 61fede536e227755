// ABOUTME: YAML grid configuration loading and validation
// ABOUTME: Reads the `grid` section (or its legacy `windowParam` alias) into a validated GridShape

use serde::Deserialize;
use std::path::Path;

use crate::error::IvError;
use crate::pagination::GridShape;

/// On-disk layout of the config file.
///
/// Unknown keys are ignored so older binaries accept newer files. The grid
/// section is spelled `grid: {columns, rows}`; `windowParam: {xParam, yParam}`
/// is accepted as an alias for files written for the original viewer.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default, alias = "windowParam")]
    grid: Option<GridSection>,
}

#[derive(Debug, Deserialize)]
struct GridSection {
    #[serde(default, alias = "xParam")]
    columns: Option<i64>,
    #[serde(default, alias = "yParam")]
    rows: Option<i64>,
}

impl GridSection {
    fn into_shape(self) -> Result<GridShape, IvError> {
        let columns = validate_dimension("columns", self.columns)?;
        let rows = validate_dimension("rows", self.rows)?;
        GridShape::new(columns, rows)
    }
}

fn validate_dimension(name: &str, value: Option<i64>) -> Result<u32, IvError> {
    let value = value
        .ok_or_else(|| IvError::ConfigValidation(format!("grid.{} is required", name)))?;

    if value <= 0 {
        return Err(IvError::ConfigValidation(format!(
            "grid.{} must be a positive integer, got {}",
            name, value
        )));
    }

    u32::try_from(value).map_err(|_| {
        IvError::ConfigValidation(format!("grid.{} is too large: {}", name, value))
    })
}

/// Load the grid shape from a YAML config file.
///
/// A file without a grid section yields [`GridShape::DEFAULT`].
pub fn load<P: AsRef<Path>>(config_path: P) -> Result<GridShape, IvError> {
    let path = config_path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IvError::ConfigNotFound(path.to_path_buf())
        } else {
            IvError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    // Undecodable bytes are bad content, not a failed read
    let contents = std::str::from_utf8(&bytes).map_err(|e| {
        IvError::ConfigParse(format!("{} is not valid UTF-8: {}", path.display(), e))
    })?;

    log::debug!("Loading grid config from {}", path.display());
    parse_config(contents)
}

/// Parse config file contents into a grid shape.
pub fn parse_config(contents: &str) -> Result<GridShape, IvError> {
    if contents.trim().is_empty() {
        return Ok(GridShape::DEFAULT);
    }

    let document: serde_yaml::Value =
        serde_yaml::from_str(contents).map_err(|e| IvError::ConfigParse(e.to_string()))?;

    let config: ConfigFile = match document {
        // A lone `---` or `~` parses as null
        serde_yaml::Value::Null => ConfigFile::default(),
        serde_yaml::Value::Mapping(_) => serde_yaml::from_value(document)
            .map_err(|e| IvError::ConfigValidation(e.to_string()))?,
        other => {
            return Err(IvError::ConfigParse(format!(
                "expected a mapping at the top level, found {}",
                describe(&other)
            )));
        }
    };

    match config.grid {
        Some(section) => section.into_shape(),
        None => {
            log::debug!("No grid section in config, using {}", GridShape::DEFAULT);
            Ok(GridShape::DEFAULT)
        }
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
