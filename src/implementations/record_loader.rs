use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::errors::{CompileError, CompileResult};
use crate::models::PropertyRecord;
use crate::traits::record_source::RecordSource;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON records: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid YAML records: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unsupported record file extension: {0}")]
    UnsupportedFormat(String),
}

impl From<LoadError> for CompileError {
    fn from(err: LoadError) -> Self {
        CompileError::InvalidInput(err.to_string())
    }
}

/// Object form of a record file: `{ "data": [...] }`
#[derive(Deserialize)]
struct WrappedRecords {
    data: Vec<PropertyRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "json" => Ok(RecordFormat::Json),
            "yaml" | "yml" => Ok(RecordFormat::Yaml),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse records from a string in the given format.
///
/// The file is either a bare array or an object with a `data` array. The
/// shape is picked from the top-level value first so a bad record reports
/// serde's own error and position.
pub fn parse_records(contents: &str, format: RecordFormat) -> Result<Vec<PropertyRecord>, LoadError> {
    match format {
        RecordFormat::Json => {
            if serde_json::from_str::<serde_json::Value>(contents)?.is_array() {
                Ok(serde_json::from_str(contents)?)
            } else {
                Ok(serde_json::from_str::<WrappedRecords>(contents)?.data)
            }
        }
        RecordFormat::Yaml => {
            if serde_yaml::from_str::<serde_yaml::Value>(contents)?.is_sequence() {
                Ok(serde_yaml::from_str(contents)?)
            } else {
                Ok(serde_yaml::from_str::<WrappedRecords>(contents)?.data)
            }
        }
    }
}

/// Loads normalized property records from a JSON or YAML file
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileRecordSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> CompileResult<Vec<PropertyRecord>> {
        let format = RecordFormat::from_path(&self.path)?;
        debug!("Reading {:?} records from {}", format, self.path.display());
        let contents = fs::read_to_string(&self.path).map_err(LoadError::from)?;
        let records = parse_records(&contents, format)?;
        info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}
