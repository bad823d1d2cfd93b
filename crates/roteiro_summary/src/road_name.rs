use std::sync::LazyLock;

use geo::{Intersects, Rect, coord};
use regex::Regex;
use roteiro_directions::{lat_lng::LatLng, step::Step};

static ROAD_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\b(?:on|in)(?:to)?\s+<b>(.*?)</b>").expect("valid road name regex")
});

static TAGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[^>]+>").expect("valid tags regex"));

pub fn fallback_road_name(leg_index: usize) -> String {
    format!("Trecho {}", leg_index + 1)
}

/// First bolded token following "on" or "in" (or "onto" / "into").
pub fn parse_road_name(instructions: &str) -> Option<String> {
    let captures = ROAD_NAME_REGEX.captures(instructions)?;
    let name = TAGS_REGEX.replace_all(&captures[1], "");
    let name = name.trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

/// Bounding box of the step start and end points, grown by `tolerance` degrees.
pub fn step_bounding_box(step: &Step, tolerance: f64) -> Option<Rect<f64>> {
    let start = step.start_location?;
    let end = step.end_location?;

    Some(Rect::new(
        coord! {
            x: start.lng.min(end.lng) - tolerance,
            y: start.lat.min(end.lat) - tolerance,
        },
        coord! {
            x: start.lng.max(end.lng) + tolerance,
            y: start.lat.max(end.lat) + tolerance,
        },
    ))
}

pub fn find_step_containing<'a>(
    steps: &'a [Step],
    point: &LatLng,
    tolerance: f64,
) -> Option<&'a Step> {
    let point = geo::Point::new(point.lng, point.lat);

    steps.iter().find(|step| {
        step_bounding_box(step, tolerance).is_some_and(|rect| rect.intersects(&point))
    })
}

/// Road name of the first step around `point`, or `Trecho {n}` when no step matches
/// or its instructions name no road.
pub fn resolve_road_name(
    steps: &[Step],
    point: &LatLng,
    leg_index: usize,
    tolerance: f64,
) -> String {
    find_step_containing(steps, point, tolerance)
        .and_then(|step| parse_road_name(step.instructions()))
        .unwrap_or_else(|| fallback_road_name(leg_index))
}
