use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    leg_reducer::{total_distance_meters, total_duration_seconds},
    route_segment::RouteSegment,
    toll_point::TollPoint,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RouteSummary {
    pub total_distance_meters: u64,
    pub total_duration_seconds: u64,
    pub total_toll_cost_cents: i64,
    pub segments: Vec<RouteSegment>,
    pub toll_points: Vec<TollPoint>,
}

impl RouteSummary {
    /// Totals are always the sum of the segments.
    pub fn from_parts(segments: Vec<RouteSegment>, toll_points: Vec<TollPoint>) -> Self {
        Self {
            total_distance_meters: total_distance_meters(&segments),
            total_duration_seconds: total_duration_seconds(&segments),
            total_toll_cost_cents: segments.iter().map(|s| s.toll_cost_cents).sum(),
            segments,
            toll_points,
        }
    }

    pub fn possible_duplicates(&self) -> impl Iterator<Item = &TollPoint> {
        self.toll_points.iter().filter(|t| t.possible_duplicate)
    }
}
