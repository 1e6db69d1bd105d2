//! Scheduled bus route types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StationId;

/// Catalog identifier of a bus route entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub u32);

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bus that departs from one station towards a named destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusRoute {
    pub id: RouteId,

    /// Route label shown to riders (e.g. "T1", "F3").
    pub route_label: String,

    /// Name of the destination station.
    pub destination_name: String,

    /// Stable reference to the destination station.
    ///
    /// When set, this wins over `destination_name`, which may be ambiguous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<StationId>,

    /// Station the bus serves (where riders board).
    pub origin_station_id: StationId,

    /// Free-text timetable hint, e.g. "Arrival in 10 mins".
    #[serde(default)]
    pub scheduled_arrival_hint: String,
}

impl BusRoute {
    /// Create a route that resolves its destination by name.
    pub fn new(
        id: RouteId,
        route_label: impl Into<String>,
        destination_name: impl Into<String>,
        origin_station_id: StationId,
        scheduled_arrival_hint: impl Into<String>,
    ) -> Self {
        Self {
            id,
            route_label: route_label.into(),
            destination_name: destination_name.into(),
            destination_id: None,
            origin_station_id,
            scheduled_arrival_hint: scheduled_arrival_hint.into(),
        }
    }

    /// Pin the destination to a specific station id.
    pub fn with_destination_id(mut self, id: StationId) -> Self {
        self.destination_id = Some(id);
        self
    }

    /// Minutes stated in the arrival hint, if any.
    ///
    /// Takes the first run of digits in the hint.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_locator::domain::{BusRoute, RouteId, StationId};
    ///
    /// let route = BusRoute::new(RouteId(1), "T1", "Carlton Station", StationId(1), "Arrival in 10 mins");
    /// assert_eq!(route.hinted_minutes(), Some(10));
    ///
    /// let route = BusRoute::new(RouteId(2), "T1", "Carlton Station", StationId(1), "Soon");
    /// assert_eq!(route.hinted_minutes(), None);
    /// ```
    pub fn hinted_minutes(&self) -> Option<u32> {
        let hint = self.scheduled_arrival_hint.as_str();
        let start = hint.find(|c: char| c.is_ascii_digit())?;
        let digits: String = hint[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}
