use crate::{error::SummaryError, route_comparison::RouteComparison, route_summary::RouteSummary};

/// Compares `candidate` against `baseline`, deltas are `baseline - candidate`.
pub fn compare(
    baseline: &RouteSummary,
    candidate: &RouteSummary,
) -> Result<RouteComparison, SummaryError> {
    if baseline.total_distance_meters == 0 {
        return Err(SummaryError::DegenerateBaseline(String::from(
            "baseline total distance is zero",
        )));
    }

    if baseline.total_duration_seconds == 0 {
        return Err(SummaryError::DegenerateBaseline(String::from(
            "baseline total duration is zero",
        )));
    }

    let distance_delta_meters =
        baseline.total_distance_meters as i64 - candidate.total_distance_meters as i64;
    let duration_delta_seconds =
        baseline.total_duration_seconds as i64 - candidate.total_duration_seconds as i64;

    Ok(RouteComparison {
        distance_delta_meters,
        duration_delta_seconds,
        distance_delta_percent: percent(distance_delta_meters, baseline.total_distance_meters),
        duration_delta_percent: percent(duration_delta_seconds, baseline.total_duration_seconds),
        toll_cost_delta_cents: baseline.total_toll_cost_cents - candidate.total_toll_cost_cents,
    })
}

fn percent(delta: i64, total: u64) -> f64 {
    delta as f64 / total as f64 * 100.0
}
