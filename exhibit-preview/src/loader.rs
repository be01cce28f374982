use std::fs;
use std::path::PathBuf;

use exhibit_core::{DataError, DataLoader, ExhibitData};
use thiserror::Error;

const BUNDLED_JSON: &str = include_str!("../../exhibit-web/static/data/exhibit.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Exhibit data from a JSON file, or the bundle shipped with the web app.
#[derive(Debug, Clone, Default)]
pub struct FileDataLoader {
    path: Option<PathBuf>,
}

impl FileDataLoader {
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl DataLoader for FileDataLoader {
    type Error = LoadError;

    fn load_exhibit_data(&self) -> Result<ExhibitData, Self::Error> {
        let Some(path) = &self.path else {
            log::debug!("using bundled exhibit data");
            return Ok(ExhibitData::from_json(BUNDLED_JSON)?);
        };
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(ExhibitData::from_json(&json)?)
    }
}
