//! Choices offered by the visualization filter controls.
//!
//! The backend's `/visualization/options` answer wins when it has entries;
//! otherwise the lists embedded from `gw-model/fixtures/` are used.

use crate::response::VisualizationOptions;
use crate::ModelError;
use csv::ReaderBuilder;
use log::error;

/// Indian states and union territories, one per row (`NAME,KIND`).
pub static STATES_CSV: &str = include_str!("../fixtures/states.csv");

/// Kerala districts, one per row (`NAME,STATE`).
pub static DISTRICTS_CSV: &str = include_str!("../fixtures/districts.csv");

/// Assessment years the backend holds data for.
pub const FALLBACK_YEARS: [i32; 2] = [2023, 2024];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub states: Vec<String>,
    pub districts: Vec<String>,
    pub years: Vec<i32>,
}

/// Read the first column of a headed CSV, skipping blank names.
pub fn parse_names(csv_object: &str) -> Result<Vec<String>, ModelError> {
    let mut names = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());
    for row in rdr.records() {
        let record = row.map_err(|e| ModelError::Catalog(e.to_string()))?;
        if let Some(name) = record.get(0).map(str::trim).filter(|n| !n.is_empty()) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

fn embedded(csv_object: &str, what: &str) -> Vec<String> {
    parse_names(csv_object).unwrap_or_else(|e| {
        error!("embedded {what} list unreadable: {e}");
        Vec::new()
    })
}

impl Catalog {
    pub fn fallback() -> Self {
        Self {
            states: embedded(STATES_CSV, "state"),
            districts: embedded(DISTRICTS_CSV, "district"),
            years: FALLBACK_YEARS.to_vec(),
        }
    }

    /// Merge backend options over the fallback, list by list.
    pub fn from_options(options: Option<&VisualizationOptions>) -> Self {
        let mut catalog = Self::fallback();
        let Some(options) = options else {
            return catalog;
        };
        if !options.states.is_empty() {
            catalog.states = options.states.clone();
        }
        if !options.districts.is_empty() {
            catalog.districts = options.districts.clone();
        }
        if !options.years.is_empty() {
            catalog.years = options.years.clone();
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_lists_are_populated() {
        let catalog = Catalog::fallback();
        assert_eq!(catalog.states.len(), 29);
        assert!(catalog.states.contains(&"Kerala".to_string()));
        assert_eq!(catalog.districts.len(), 14);
        assert_eq!(catalog.districts[0], "Alappuzha");
        assert_eq!(catalog.years, vec![2023, 2024]);
    }

    #[test]
    fn embedded_fixtures_keep_headers() {
        assert!(STATES_CSV.starts_with("NAME,KIND"));
        assert!(DISTRICTS_CSV.starts_with("NAME,STATE"));
    }

    #[test]
    fn parse_names_skips_blank_rows() {
        let names = parse_names("NAME,KIND\nGoa,state\n ,state\nDelhi\n").unwrap();
        assert_eq!(names, vec!["Goa".to_string(), "Delhi".to_string()]);
    }

    #[test]
    fn backend_lists_override_fallback() {
        let options = VisualizationOptions {
            states: vec!["Kerala".to_string(), "Goa".to_string()],
            districts: Vec::new(),
            years: vec![2022, 2023, 2024],
        };
        let catalog = Catalog::from_options(Some(&options));
        assert_eq!(catalog.states, options.states);
        assert_eq!(catalog.districts.len(), 14);
        assert_eq!(catalog.years, vec![2022, 2023, 2024]);
    }

    #[test]
    fn no_options_means_fallback() {
        assert_eq!(Catalog::from_options(None), Catalog::fallback());
    }
}
