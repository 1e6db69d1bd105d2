//! JSON catalog files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BusRoute, Station};
use crate::fares::FareTable;

use super::Catalog;
use super::error::CatalogError;

/// On-disk catalog layout.
///
/// ```json
/// {
///   "stations": [{"id": 1, "name": "...", "location": {"latitude": 0.0, "longitude": 0.0}}],
///   "routes": [{"id": 1, "route_label": "T1", "destination_name": "...", "origin_station_id": 1}],
///   "fares": [{"max_distance_km": 5.0, "fare": "10.0"}, {"fare": "26.0"}]
/// }
/// ```
///
/// `fares` is optional; the standard table is used when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub routes: Vec<BusRoute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fares: Option<FareTable>,
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let catalog = Catalog::new(file.stations, file.routes)?;
        Ok(match file.fares {
            Some(fares) => catalog.with_fares(fares),
            None => catalog,
        })
    }
}

impl From<&Catalog> for CatalogFile {
    fn from(catalog: &Catalog) -> Self {
        Self {
            stations: catalog.stations().to_vec(),
            routes: catalog.routes().to_vec(),
            fares: Some(catalog.fares().clone()),
        }
    }
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })?;
        file.try_into()
    }

    /// Load and validate a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize the catalog, including its fare table, as pretty JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(&CatalogFile::from(self)).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })
    }

    /// Write the catalog to a JSON file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| CatalogError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        std::fs::write(path, self.to_json()?).map_err(io_err)
    }
}
