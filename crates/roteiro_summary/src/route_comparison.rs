use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Differences computed as `baseline - candidate`, positive when the candidate is better.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RouteComparison {
    pub distance_delta_meters: i64,
    pub duration_delta_seconds: i64,
    pub distance_delta_percent: f64,
    pub duration_delta_percent: f64,
    pub toll_cost_delta_cents: i64,
}

impl RouteComparison {
    pub fn candidate_is_shorter(&self) -> bool {
        self.distance_delta_meters > 0
    }

    pub fn candidate_is_faster(&self) -> bool {
        self.duration_delta_seconds > 0
    }
}
