//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Catalog identifier of a station.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl StationId {
    /// Returns the raw integer id.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Device platform used to pick a map link scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapPlatform {
    Ios,
    #[default]
    Android,
}

/// A bus station in the catalog.
///
/// Names are not unique: two entries may share a name while having
/// different ids. Use the id whenever an unambiguous reference is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub location: Coordinate,
}

impl Station {
    /// Create a new station.
    pub fn new(id: StationId, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }

    /// Link that opens the platform's map app centred on this station.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_locator::domain::{Coordinate, MapPlatform, Station, StationId};
    ///
    /// let loc = Coordinate::new(-26.2557, 27.908).unwrap();
    /// let station = Station::new(StationId(1), "Thokoza Park Station", loc);
    /// assert_eq!(station.map_link(MapPlatform::Ios), "maps:0,0?q=-26.2557,27.908");
    /// assert_eq!(station.map_link(MapPlatform::Android), "geo:0,0?q=-26.2557,27.908");
    /// ```
    pub fn map_link(&self, platform: MapPlatform) -> String {
        let scheme = match platform {
            MapPlatform::Ios => "maps",
            MapPlatform::Android => "geo",
        };
        format!("{scheme}:0,0?q={}", self.location)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
