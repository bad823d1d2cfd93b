use serde::{Deserialize, Serialize};

use crate::{lat_lng::LatLng, lenient::deserialize_lenient, step::Step, toll_info::TollInfo};

/// Value with its human readable text, e.g. `{ "value": 10000, "text": "10 km" }`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextValue {
    pub value: u64,
    pub text: Option<String>,
}

impl TextValue {
    pub fn new(value: u64) -> Self {
        Self { value, text: None }
    }
}

/// One origin to destination hop of a route.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Leg {
    pub start_location: Option<LatLng>,
    pub end_location: Option<LatLng>,
    pub start_address: Option<String>,
    pub end_address: Option<String>,

    /// Meters, `None` when absent or without a value
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub distance: Option<TextValue>,

    /// Seconds, `None` when absent or without a value
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub duration: Option<TextValue>,

    #[serde(default)]
    pub steps: Vec<Step>,

    pub toll_info: Option<TollInfo>,
}

impl Leg {
    pub fn distance_meters(&self) -> Option<u64> {
        self.distance.as_ref().map(|distance| distance.value)
    }

    pub fn duration_seconds(&self) -> Option<u64> {
        self.duration.as_ref().map(|duration| duration.value)
    }
}
