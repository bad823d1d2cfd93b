use rayon::prelude::*;
use roteiro_directions::directions_result::{DirectionsResult, DirectionsRoute};
use tracing::{debug, instrument, warn};

use crate::{
    error::SummaryError, leg_reducer::reduce_legs, location::Location,
    route_summary::RouteSummary, summary_params::SummaryParams, toll_extractor::extract_tolls,
};

/// Gap between the provider's route totals and the summed legs, set only above the tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TotalsDrift {
    /// Reported minus summed, in meters
    pub distance_meters: Option<f64>,

    /// Reported minus summed, in seconds
    pub duration_seconds: Option<f64>,
}

impl TotalsDrift {
    pub fn is_empty(&self) -> bool {
        self.distance_meters.is_none() && self.duration_seconds.is_none()
    }
}

/// Reorders the intermediate destinations by the provider's `waypoint_order`.
///
/// The last destination is the end of the route and never moves. An empty order keeps
/// the destinations as they are.
pub fn apply_waypoint_order(
    destinations: &[Location],
    waypoint_order: &[usize],
) -> Result<Vec<Location>, SummaryError> {
    if waypoint_order.is_empty() {
        return Ok(destinations.to_vec());
    }

    let Some((last, waypoints)) = destinations.split_last() else {
        return Err(SummaryError::InputMismatch(String::from(
            "waypoint order given without destinations",
        )));
    };

    if waypoint_order.len() != waypoints.len() {
        return Err(SummaryError::InputMismatch(format!(
            "waypoint order has {} entries for {} waypoints",
            waypoint_order.len(),
            waypoints.len()
        )));
    }

    let mut seen = vec![false; waypoints.len()];
    let mut ordered = Vec::with_capacity(destinations.len());

    for &index in waypoint_order {
        if index >= waypoints.len() || seen[index] {
            return Err(SummaryError::InputMismatch(format!(
                "waypoint order {waypoint_order:?} is not a permutation"
            )));
        }
        seen[index] = true;
        ordered.push(waypoints[index].clone());
    }

    ordered.push(last.clone());
    Ok(ordered)
}

/// Summarizes one route of a directions result.
///
/// `destinations` are given in the order the user entered them, the route's waypoint
/// order is applied before the legs are reduced.
#[instrument(skip_all, level = "debug", fields(route_index = route_index))]
pub fn summarize_route(
    route: &DirectionsRoute,
    route_index: usize,
    origin: &Location,
    destinations: &[Location],
    params: &SummaryParams,
) -> Result<RouteSummary, SummaryError> {
    let destinations = apply_waypoint_order(destinations, &route.waypoint_order)?;
    let mut segments = reduce_legs(&route.legs, origin, &destinations)?;
    let toll_points = extract_tolls(&route.legs, route_index, params);

    for toll_point in &toll_points {
        segments[toll_point.leg_index].toll_cost_cents += toll_point.cost_cents;
    }

    let summary = RouteSummary::from_parts(segments, toll_points);
    check_reported_totals(route, &summary, params.totals_tolerance);

    debug!(
        "Summarized route: {}m, {}s, {} tolls",
        summary.total_distance_meters,
        summary.total_duration_seconds,
        summary.toll_points.len()
    );

    Ok(summary)
}

/// Summarizes every alternative route, results are in route order.
pub fn summarize_routes(
    result: &DirectionsResult,
    origin: &Location,
    destinations: &[Location],
    params: &SummaryParams,
) -> Vec<Result<RouteSummary, SummaryError>> {
    result
        .routes
        .par_iter()
        .enumerate()
        .map(|(route_index, route)| {
            summarize_route(route, route_index, origin, destinations, params)
        })
        .collect()
}

/// Compares the route level totals, when reported, with the summary totals.
///
/// The summed legs stay authoritative, the drift is only surfaced to the caller.
pub fn totals_drift(
    route: &DirectionsRoute,
    summary: &RouteSummary,
    tolerance: f64,
) -> TotalsDrift {
    let drift = |reported: Option<u64>, summed: u64| {
        reported
            .map(|reported| reported as f64 - summed as f64)
            .filter(|drift| drift.abs() > tolerance)
    };

    TotalsDrift {
        distance_meters: drift(route.reported_distance_meters(), summary.total_distance_meters),
        duration_seconds: drift(route.reported_duration_seconds(), summary.total_duration_seconds),
    }
}

fn check_reported_totals(route: &DirectionsRoute, summary: &RouteSummary, tolerance: f64) {
    let drift = totals_drift(route, summary, tolerance);

    if let Some(distance) = drift.distance_meters {
        warn!(
            "Summed leg distance {}m differs from reported route distance by {}m",
            summary.total_distance_meters, distance
        );
    }

    if let Some(duration) = drift.duration_seconds {
        warn!(
            "Summed leg duration {}s differs from reported route duration by {}s",
            summary.total_duration_seconds, duration
        );
    }
}
