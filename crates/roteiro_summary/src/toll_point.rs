use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TollPointType {
    Toll,
}

/// Structural level of the directions result a toll was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TollSource {
    Leg,
    Step,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct TollPoint {
    /// Derived from the route, leg and toll indices, stable across runs
    pub id: u64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,

    #[serde(rename = "type")]
    pub point_type: TollPointType,

    pub cost_cents: i64,
    pub road_name: String,

    /// Comma separated toll pass programs, empty when none apply
    pub restrictions: String,

    pub leg_index: usize,
    pub source: TollSource,

    /// Set when a leg toll and a step toll of the same leg sit at nearly the same place.
    /// Both are kept, the caller decides.
    pub possible_duplicate: bool,
}

impl From<&TollPoint> for geo::Point<f64> {
    fn from(toll_point: &TollPoint) -> Self {
        geo::Point::new(toll_point.lng, toll_point.lat)
    }
}
