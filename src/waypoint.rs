use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time_format;

/// Anything that can be located by a latitude/longitude pair in degrees.
/// This is all the scoring code ever reads from a waypoint.
pub trait LatLng {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

impl<T: LatLng + ?Sized> LatLng for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

// (latitude, longitude)
impl LatLng for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }
}

// geo-types uses x for longitude and y for latitude.
impl LatLng for geo_types::Point<f64> {
    fn latitude(&self) -> f64 {
        self.y()
    }

    fn longitude(&self) -> f64 {
        self.x()
    }
}

/// A single datapoint recorded during a journey.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    #[serde(default, with = "time_format::option")]
    pub time_utc: Option<NaiveDateTime>,
    #[serde(default)]
    pub accuracy_m: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub height_m: Option<f64>,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Waypoint {
            time_utc: None,
            accuracy_m: None,
            latitude,
            longitude,
            height_m: None,
        }
    }
}

impl LatLng for Waypoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::{LatLng, Waypoint};

    #[test]
    fn geo_point_axis_order() {
        let point = geo_types::Point::new(3.0, 2.0);
        assert_eq!(point.latitude(), 2.0);
        assert_eq!(point.longitude(), 3.0);
    }

    #[test]
    fn tuple_is_lat_lng() {
        let pair = (7.3, 2.0);
        assert_eq!(pair.latitude(), 7.3);
        assert_eq!(pair.longitude(), 2.0);
    }

    #[test]
    fn new_has_no_extra_attributes() {
        let waypoint = Waypoint::new(8.3, 3.0);
        assert_eq!(waypoint.time_utc, None);
        assert_eq!(waypoint.accuracy_m, None);
        assert_eq!(waypoint.height_m, None);
        assert_eq!((&waypoint).latitude(), 8.3);
    }
}
