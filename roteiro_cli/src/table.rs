use comfy_table::{Table, presets::UTF8_FULL};
use roteiro_summary::{route_comparison::RouteComparison, route_summary::RouteSummary};

pub fn format_km(meters: u64) -> String {
    format!("{:.1} km", meters as f64 / 1000.0)
}

pub fn format_duration(seconds: u64) -> String {
    format!("{:#}", jiff::SignedDuration::from_secs(seconds as i64))
}

pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

pub fn segments_table(summary: &RouteSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "From", "To", "Distance", "Duration", "Tolls"]);

    for (index, segment) in summary.segments.iter().enumerate() {
        table.add_row(vec![
            format!("{}", index + 1),
            segment.origin.name.clone(),
            segment.destination.name.clone(),
            format_km(segment.distance_meters),
            format_duration(segment.duration_seconds),
            format_cents(segment.toll_cost_cents),
        ]);
    }

    table.add_row(vec![
        String::new(),
        String::from("Total"),
        String::new(),
        format_km(summary.total_distance_meters),
        format_duration(summary.total_duration_seconds),
        format_cents(summary.total_toll_cost_cents),
    ]);

    table
}

pub fn toll_points_table(summary: &RouteSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Name", "Road", "Segment", "Cost", "Passes", "Duplicate?"]);

    for toll_point in &summary.toll_points {
        table.add_row(vec![
            format!("{}", toll_point.id),
            toll_point.name.clone(),
            toll_point.road_name.clone(),
            format!("{}", toll_point.leg_index + 1),
            format_cents(toll_point.cost_cents),
            toll_point.restrictions.clone(),
            String::from(if toll_point.possible_duplicate { "yes" } else { "" }),
        ]);
    }

    table
}

pub fn comparison_table(
    baseline: &RouteSummary,
    candidate: &RouteSummary,
    comparison: &RouteComparison,
) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "Baseline", "Candidate", "Saved", "Saved %"]);

    table.add_row(vec![
        String::from("Distance"),
        format_km(baseline.total_distance_meters),
        format_km(candidate.total_distance_meters),
        format!("{} m", comparison.distance_delta_meters),
        format!("{:.2}", comparison.distance_delta_percent),
    ]);
    table.add_row(vec![
        String::from("Duration"),
        format_duration(baseline.total_duration_seconds),
        format_duration(candidate.total_duration_seconds),
        format!("{} s", comparison.duration_delta_seconds),
        format!("{:.2}", comparison.duration_delta_percent),
    ]);
    table.add_row(vec![
        String::from("Tolls"),
        format_cents(baseline.total_toll_cost_cents),
        format_cents(candidate.total_toll_cost_cents),
        format_cents(comparison.toll_cost_delta_cents),
        String::new(),
    ]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(550), "5.50");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(-1230), "-12.30");
        assert_eq!(format_cents(0), "0.00");
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(235700), "235.7 km");
    }

    #[test]
    fn test_segments_table_has_total_row() {
        let summary = RouteSummary::from_parts(vec![], vec![]);

        let rendered = segments_table(&summary).to_string();

        assert!(rendered.contains("Total"));
        assert!(rendered.contains("0.0 km"));
    }
}
