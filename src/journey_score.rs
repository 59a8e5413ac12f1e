use std::f64::consts::PI;

use crate::error::ScoreError;
use crate::waypoint::LatLng;

// http://nssdc.gsfc.nasa.gov/planetary/factsheet/earthfact.html
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

pub const MAX_EFFICIENCY: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JourneyScores {
    /// 0 to 100, 100 means the journey went in a perfectly straight line.
    pub efficiency: i32,
    pub distance_m: f64,
}

impl From<JourneyScores> for (i32, f64) {
    fn from(scores: JourneyScores) -> Self {
        (scores.efficiency, scores.distance_m)
    }
}

/// Distance in meters along a spherical Earth between two points, using the
/// spherical law of cosines.
pub fn distance_between_m<A: LatLng, B: LatLng>(p1: &A, p2: &B) -> f64 {
    let (lat1, lon1) = (p1.latitude(), p1.longitude());
    let (lat2, lon2) = (p2.latitude(), p2.longitude());
    // `sin^2 + cos^2` is not always exactly 1 in floating point, so the
    // formula alone can put identical points a few centimeters apart.
    if lat1 == lat2 && lon1 == lon2 {
        return 0.;
    }

    let phi1 = (90. - lat1) * PI / 180.;
    let phi2 = (90. - lat2) * PI / 180.;
    let theta1 = lon1 * PI / 180.;
    let theta2 = lon2 * PI / 180.;

    let cos_arg =
        phi1.sin() * phi2.sin() * (theta1 - theta2).abs().cos() + phi1.cos() * phi2.cos();
    // rounding can push this slightly outside of `acos`'s domain for nearly
    // identical or antipodal points.
    let arc_length = cos_arg.clamp(-1., 1.).acos();
    arc_length * EARTH_RADIUS_M
}

/// Sum of the distances between consecutive waypoints. A single waypoint has a
/// path length of 0, an empty path is an error.
pub fn path_length_m<P: LatLng>(waypoints: &[P]) -> Result<f64, ScoreError> {
    if waypoints.is_empty() {
        return Err(ScoreError::InvalidInput {
            required: 1,
            actual: 0,
        });
    }
    Ok(waypoints
        .windows(2)
        .map(|pair| distance_between_m(&pair[0], &pair[1]))
        .sum())
}

/// Scores a journey by how close the traveled path is to the straight line
/// between its first and last waypoint.
///
/// `efficiency = max(0, ceil(200 * (straight / traveled)^2 - 100))`, so a
/// perfectly straight journey scores 100 and the score falls off
/// quadratically as the path wanders. A journey that never moved scores 0.
pub fn journey_scores<P: LatLng>(waypoints: &[P]) -> Result<JourneyScores, ScoreError> {
    let (first, last) = match waypoints {
        [first, .., last] => (first, last),
        _ => {
            warn!("Cannot score a journey with {} waypoint(s)", waypoints.len());
            return Err(ScoreError::InvalidInput {
                required: 2,
                actual: waypoints.len(),
            });
        }
    };

    let traveled_m = path_length_m(waypoints)?;
    let straight_line_m = distance_between_m(first, last);
    let efficiency = efficiency(straight_line_m, traveled_m);
    debug!(
        "journey scored: waypoints={}, traveled_m={}, straight_line_m={}, efficiency={}",
        waypoints.len(),
        traveled_m,
        straight_line_m,
        efficiency
    );

    Ok(JourneyScores {
        efficiency,
        distance_m: traveled_m,
    })
}

fn efficiency(straight_line_m: f64, traveled_m: f64) -> i32 {
    if traveled_m == 0. {
        return 0;
    }
    let ratio = straight_line_m / traveled_m;
    let score = (200. * ratio * ratio - 100.).ceil();
    // the upper bound only matters when rounding makes the straight line a
    // hair longer than the path.
    score.clamp(0., MAX_EFFICIENCY as f64) as i32
}
