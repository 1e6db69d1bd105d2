//! Banded distance fares.
//!
//! A fare table is an ascending list of distance bands, each mapping to one
//! fixed fare. The last band is unbounded, so every non-negative distance
//! resolves to exactly one fare.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors from fare lookup and fare table construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    /// Distance was negative or NaN
    #[error("invalid distance: {0} km")]
    InvalidDistance(f64),

    /// Fare table does not cover every distance exactly once
    #[error("invalid fare table: {0}")]
    InvalidTable(&'static str),
}

/// One distance band: every distance up to and including `max_distance_km`
/// (and above the previous band) costs `fare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareBand {
    /// Inclusive upper edge; `None` means unbounded.
    #[serde(default)]
    pub max_distance_km: Option<f64>,
    pub fare: Decimal,
}

impl FareBand {
    /// A band ending at `max_distance_km`.
    pub fn up_to(max_distance_km: f64, fare: Decimal) -> Self {
        Self {
            max_distance_km: Some(max_distance_km),
            fare,
        }
    }

    /// The final, unbounded band.
    pub fn beyond(fare: Decimal) -> Self {
        Self {
            max_distance_km: None,
            fare,
        }
    }

    /// Whether a distance falls at or below this band's upper edge.
    fn covers(&self, distance_km: f64) -> bool {
        self.max_distance_km.is_none_or(|max| distance_km <= max)
    }
}

/// A validated, ascending set of fare bands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FareTable {
    bands: Vec<FareBand>,
}

impl FareTable {
    /// Build a table, checking that bands ascend, end unbounded, and that
    /// fares never fall as distance grows.
    pub fn new(bands: Vec<FareBand>) -> Result<Self, FareError> {
        let Some((last, bounded)) = bands.split_last() else {
            return Err(FareError::InvalidTable("no bands"));
        };

        if last.max_distance_km.is_some() {
            return Err(FareError::InvalidTable("last band must be unbounded"));
        }

        let mut previous = f64::NEG_INFINITY;
        for band in bounded {
            let Some(max) = band.max_distance_km else {
                return Err(FareError::InvalidTable("only the last band may be unbounded"));
            };
            if !max.is_finite() || max < 0.0 {
                return Err(FareError::InvalidTable("band edges must be finite and non-negative"));
            }
            if max <= previous {
                return Err(FareError::InvalidTable("band edges must be strictly ascending"));
            }
            previous = max;
        }

        if bands.iter().any(|b| b.fare.is_sign_negative()) {
            return Err(FareError::InvalidTable("fares must not be negative"));
        }
        if bands.windows(2).any(|w| w[1].fare < w[0].fare) {
            return Err(FareError::InvalidTable("fares must not decrease"));
        }

        Ok(Self { bands })
    }

    /// The standard Rea Vaya distance bands.
    ///
    /// | Distance (km) | Fare |
    /// |---------------|------|
    /// | ≤ 5           | 10.0 |
    /// | ≤ 10          | 12.5 |
    /// | ≤ 15          | 15.0 |
    /// | ≤ 25          | 17.0 |
    /// | ≤ 35          | 19.0 |
    /// | ≤ 45          | 20.0 |
    /// | > 45          | 26.0 |
    pub fn standard() -> Self {
        Self {
            bands: vec![
                FareBand::up_to(5.0, Decimal::new(100, 1)),
                FareBand::up_to(10.0, Decimal::new(125, 1)),
                FareBand::up_to(15.0, Decimal::new(150, 1)),
                FareBand::up_to(25.0, Decimal::new(170, 1)),
                FareBand::up_to(35.0, Decimal::new(190, 1)),
                FareBand::up_to(45.0, Decimal::new(200, 1)),
                FareBand::beyond(Decimal::new(260, 1)),
            ],
        }
    }

    /// Fare for a distance: the first band whose upper edge is at or above it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_locator::fares::FareTable;
    /// use rust_decimal::Decimal;
    ///
    /// let table = FareTable::standard();
    /// assert_eq!(table.fare_for(5.0).unwrap(), Decimal::new(10, 0));
    /// assert_eq!(table.fare_for(5.1).unwrap(), Decimal::new(125, 1));
    /// assert!(table.fare_for(-1.0).is_err());
    /// ```
    pub fn fare_for(&self, distance_km: f64) -> Result<Decimal, FareError> {
        if distance_km.is_nan() || distance_km < 0.0 {
            return Err(FareError::InvalidDistance(distance_km));
        }

        self.bands
            .iter()
            .find(|band| band.covers(distance_km))
            .map(|band| band.fare)
            .ok_or(FareError::InvalidTable("no band covers distance"))
    }

    /// The bands in ascending order.
    pub fn bands(&self) -> &[FareBand] {
        &self.bands
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for FareTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bands = Vec::<FareBand>::deserialize(deserializer)?;
        FareTable::new(bands).map_err(serde::de::Error::custom)
    }
}

/// Fare for a distance under the standard table.
pub fn fare_for(distance_km: f64) -> Result<Decimal, FareError> {
    FareTable::standard().fare_for(distance_km)
}
