use roteiro_directions::leg::Leg;

use crate::{error::SummaryError, location::Location, route_segment::RouteSegment};

/// Folds the legs of a route into one segment per leg, in leg order.
///
/// Segment `i` goes from `destinations[i - 1]` (or `origin` for the first leg) to
/// `destinations[i]`. Toll costs start at zero and are attributed once tolls are extracted.
pub fn reduce_legs(
    legs: &[Leg],
    origin: &Location,
    destinations: &[Location],
) -> Result<Vec<RouteSegment>, SummaryError> {
    if legs.len() != destinations.len() {
        return Err(SummaryError::InputMismatch(format!(
            "{} legs for {} destinations",
            legs.len(),
            destinations.len()
        )));
    }

    legs.iter()
        .zip(destinations)
        .enumerate()
        .map(|(leg_index, (leg, destination))| {
            let segment_origin = if leg_index == 0 {
                origin
            } else {
                &destinations[leg_index - 1]
            };

            let distance_meters = leg.distance_meters().ok_or_else(|| {
                SummaryError::InputMismatch(format!("leg {leg_index} has no distance"))
            })?;
            let duration_seconds = leg.duration_seconds().ok_or_else(|| {
                SummaryError::InputMismatch(format!("leg {leg_index} has no duration"))
            })?;

            let polyline = leg
                .steps
                .iter()
                .map(|step| step.polyline_points())
                .collect::<String>();

            Ok(RouteSegment {
                origin: segment_origin.clone(),
                destination: destination.clone(),
                distance_meters,
                duration_seconds,
                toll_cost_cents: 0,
                polyline,
            })
        })
        .collect()
}

pub fn total_distance_meters(segments: &[RouteSegment]) -> u64 {
    segments.iter().map(|segment| segment.distance_meters).sum()
}

pub fn total_duration_seconds(segments: &[RouteSegment]) -> u64 {
    segments.iter().map(|segment| segment.duration_seconds).sum()
}
