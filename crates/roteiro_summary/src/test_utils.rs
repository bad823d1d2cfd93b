use std::path::PathBuf;

use roteiro_directions::{
    directions_result::DirectionsResult,
    lat_lng::LatLng,
    leg::{Leg, TextValue},
    step::{Polyline, Step},
};

use crate::location::Location;

pub fn create_location(id: usize, lat: f64, lng: f64) -> Location {
    Location::new(format!("{id}"), format!("Stop {id}"), lat, lng)
}

/// `count` locations spread along the same latitude, 0.1 degree apart.
pub fn create_locations(count: usize) -> Vec<Location> {
    (0..count)
        .map(|i| create_location(i + 1, -22.0, -47.0 - 0.1 * (i + 1) as f64))
        .collect()
}

pub fn create_step(start: (f64, f64), end: (f64, f64), points: &str, instructions: &str) -> Step {
    Step {
        start_location: Some(LatLng::new(start.0, start.1)),
        end_location: Some(LatLng::new(end.0, end.1)),
        distance: None,
        duration: None,
        polyline: Some(Polyline {
            points: String::from(points),
        }),
        html_instructions: Some(String::from(instructions)),
        tolls: vec![],
    }
}

pub fn create_leg(distance: u64, duration: u64, steps: Vec<Step>) -> Leg {
    Leg {
        start_location: steps.first().and_then(|step| step.start_location),
        end_location: steps.last().and_then(|step| step.end_location),
        start_address: None,
        end_address: None,
        distance: Some(TextValue::new(distance)),
        duration: Some(TextValue::new(duration)),
        steps,
        toll_info: None,
    }
}

pub fn data_fixture_path(fixture: &str) -> PathBuf {
    let current_working_dir = std::env::current_dir().unwrap();

    current_working_dir
        .join("../../data/fixtures/")
        .join(fixture)
        .canonicalize()
        .unwrap()
}

pub fn load_fixture(fixture: &str) -> DirectionsResult {
    DirectionsResult::from_path(data_fixture_path(fixture)).unwrap()
}
