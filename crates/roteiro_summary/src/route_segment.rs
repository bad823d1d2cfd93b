use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::location::Location;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RouteSegment {
    pub origin: Location,
    pub destination: Location,
    pub distance_meters: u64,
    pub duration_seconds: u64,
    pub toll_cost_cents: i64,

    /// Concatenated encoded polylines of the leg steps
    pub polyline: String,
}
