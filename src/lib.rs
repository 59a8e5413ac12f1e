#[macro_use]
extern crate log;

pub mod error;
pub mod journey;
pub mod journey_score;
pub mod logs;
pub mod time_format;
pub mod waypoint;

pub use error::ScoreError;
pub use journey::Journey;
pub use journey_score::{
    distance_between_m, journey_scores, path_length_m, JourneyScores, EARTH_RADIUS_M,
};
pub use waypoint::{LatLng, Waypoint};
