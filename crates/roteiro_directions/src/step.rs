use serde::{Deserialize, Serialize};

use crate::{lat_lng::LatLng, leg::TextValue, lenient::deserialize_lenient, toll_info::TollCost};

/// Turn-by-turn maneuver inside a leg.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Step {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub start_location: Option<LatLng>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub end_location: Option<LatLng>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub distance: Option<TextValue>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub duration: Option<TextValue>,

    pub polyline: Option<Polyline>,

    /// Markup such as `Continue on <b>SP-330</b>`
    pub html_instructions: Option<String>,

    #[serde(default)]
    pub tolls: Vec<StepToll>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polyline {
    /// Encoded polyline, passed through untouched
    pub points: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StepToll {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub location: Option<LatLng>,
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub cost: Option<TollCost>,
}

impl Step {
    pub fn polyline_points(&self) -> &str {
        self.polyline
            .as_ref()
            .map(|polyline| polyline.points.as_str())
            .unwrap_or_default()
    }

    pub fn instructions(&self) -> &str {
        self.html_instructions.as_deref().unwrap_or_default()
    }
}
