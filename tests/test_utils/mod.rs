#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routemaster_core::{Journey, Waypoint};
use std::fs;

// distance_between_m((0, 1), (2, 3)), truncated to whole meters
pub const DISTANCE_12: i64 = 314474;
pub const EFFICIENCY_012: i32 = 78;

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub fn w0() -> Waypoint {
    Waypoint::new(0., 0.)
}

pub fn w1() -> Waypoint {
    Waypoint::new(0., 1.)
}

pub fn w2() -> Waypoint {
    Waypoint::new(2., 3.)
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x524d)
}

pub fn random_waypoint(rng: &mut StdRng) -> Waypoint {
    Waypoint::new(
        rng.random_range(-90.0..=90.0),
        rng.random_range(-180.0..=180.0),
    )
}

// A wandering path, each step moves at most `max_step_deg` in both axes.
pub fn random_walk(rng: &mut StdRng, len: usize, max_step_deg: f64) -> Vec<Waypoint> {
    let mut current = random_waypoint(rng);
    let mut waypoints = Vec::with_capacity(len);
    for _ in 0..len {
        waypoints.push(current.clone());
        current = Waypoint::new(
            (current.latitude + rng.random_range(-max_step_deg..=max_step_deg)).clamp(-90., 90.),
            (current.longitude + rng.random_range(-max_step_deg..=max_step_deg))
                .clamp(-180., 180.),
        );
    }
    waypoints
}

pub fn load_journey(path: &str) -> Journey {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
