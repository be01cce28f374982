//! Exhibit data bundled into the wasm binary.

use exhibit_core::{DataError, DataLoader, ExhibitData};
use std::sync::OnceLock;

const EXHIBIT_JSON: &str = include_str!("../static/data/exhibit.json");

/// Loads the landmarks and personas compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDataLoader;

impl DataLoader for WebDataLoader {
    type Error = DataError;

    fn load_exhibit_data(&self) -> Result<ExhibitData, Self::Error> {
        ExhibitData::from_json(EXHIBIT_JSON)
    }
}

static EXHIBIT: OnceLock<ExhibitData> = OnceLock::new();

/// Parsed exhibit data, cached after first use. Empty if the bundle is invalid.
#[must_use]
pub fn exhibit_data() -> &'static ExhibitData {
    EXHIBIT.get_or_init(|| {
        WebDataLoader.load_exhibit_data().unwrap_or_else(|err| {
            log::error!("{err}");
            ExhibitData::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_parses() {
        let data = WebDataLoader.load_exhibit_data().unwrap();
        assert!(data.landmark("intramuros").is_some());
        assert_eq!(exhibit_data().personas.len(), data.personas.len());
    }
}
