use std::{fs::File, io::BufReader, io::Read, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::DirectionsError, leg::Leg, leg::TextValue, lenient::deserialize_lenient};

const STATUS_OK: &str = "OK";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectionsResult {
    pub status: Option<String>,

    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DirectionsRoute {
    pub summary: Option<String>,

    #[serde(default)]
    pub legs: Vec<Leg>,

    /// Visiting order of the intermediate waypoints when the provider optimized them
    #[serde(default)]
    pub waypoint_order: Vec<usize>,

    /// Route level totals, only some providers report them
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub distance: Option<TextValue>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub duration: Option<TextValue>,
}

impl DirectionsResult {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectionsError> {
        let result: DirectionsResult = serde_json::from_reader(reader)?;
        debug!("Parsed directions result with {} routes", result.routes.len());
        Ok(result)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectionsError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Fails when the provider reported anything but `OK`.
    pub fn ensure_ok(&self) -> Result<(), DirectionsError> {
        match self.status.as_deref() {
            None | Some(STATUS_OK) => Ok(()),
            Some(other) => Err(DirectionsError::Status(other.to_owned())),
        }
    }

    pub fn route(&self, index: usize) -> Result<&DirectionsRoute, DirectionsError> {
        self.routes
            .get(index)
            .ok_or(DirectionsError::RouteNotFound(index))
    }
}

impl DirectionsRoute {
    pub fn reported_distance_meters(&self) -> Option<u64> {
        self.distance.as_ref().map(|distance| distance.value)
    }

    pub fn reported_duration_seconds(&self) -> Option<u64> {
        self.duration.as_ref().map(|duration| duration.value)
    }
}
