#[derive(Clone, Debug)]
pub struct SummaryParams {
    /// Degrees added on each side of a step bounding box when matching a toll to its road
    pub road_match_tolerance_degrees: f64,

    /// Leg and step tolls closer than this are flagged as possible duplicates
    pub duplicate_tolerance_meters: f64,

    /// Allowed difference between the summed legs and the provider's route totals
    pub totals_tolerance: f64,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            road_match_tolerance_degrees: 0.05,
            duplicate_tolerance_meters: 150.0,
            totals_tolerance: 1.0,
        }
    }
}
