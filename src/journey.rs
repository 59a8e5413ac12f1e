use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::journey_score::{self, JourneyScores};
use crate::time_format;
use crate::waypoint::Waypoint;

/// A particular instance of walking from one place to another.
///
/// `distance_m` and `efficiency` are derived from `waypoints` and stay `None`
/// until `update_scores` is called.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    #[serde(default, with = "time_format::option")]
    pub start_time_utc: Option<NaiveDateTime>,
    #[serde(default, with = "time_format::option")]
    pub stop_time_utc: Option<NaiveDateTime>,
    #[serde(default)]
    pub distance_m: Option<i64>,
    #[serde(default)]
    pub efficiency: Option<i32>,
    pub waypoints: Vec<Waypoint>,
}

impl Journey {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Journey {
            waypoints,
            ..Default::default()
        }
    }

    pub fn scores(&self) -> Result<JourneyScores, ScoreError> {
        journey_score::journey_scores(self.waypoints.as_slice())
    }

    /// Scores the recorded waypoints and keeps the result on the journey.
    /// The stored distance is rounded to whole meters. On error the journey
    /// is left untouched.
    pub fn update_scores(&mut self) -> Result<JourneyScores, ScoreError> {
        let scores = self.scores()?;
        self.distance_m = Some(scores.distance_m.round() as i64);
        self.efficiency = Some(scores.efficiency);
        Ok(scores)
    }
}
