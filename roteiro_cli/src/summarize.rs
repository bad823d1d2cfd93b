use std::path::PathBuf;

use clap::Args;
use roteiro_directions::directions_result::DirectionsResult;
use roteiro_summary::{
    error::SummaryError,
    location::Location,
    route_summary::RouteSummary,
    summarize::{summarize_route, summarize_routes},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{file_utils, params, table};

/// Origin and destinations in the order the user entered them.
#[derive(Deserialize)]
pub struct RoutePlan {
    pub origin: Location,
    pub destinations: Vec<Location>,
}

/// Outcome of one alternative route, failed routes keep their slot.
#[derive(Debug, Serialize)]
pub struct RouteOutcome {
    pub route_index: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RouteSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn route_outcomes(results: Vec<Result<RouteSummary, SummaryError>>) -> Vec<RouteOutcome> {
    results
        .into_iter()
        .enumerate()
        .map(|(route_index, result)| match result {
            Ok(summary) => RouteOutcome {
                route_index,
                summary: Some(summary),
                error: None,
            },
            Err(err) => RouteOutcome {
                route_index,
                summary: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}

#[derive(Args)]
pub struct SummarizeArgs {
    /// Directions result returned by the provider
    #[arg(short, long)]
    directions: PathBuf,

    /// Route plan with the origin and the destinations
    #[arg(short, long)]
    plan: PathBuf,

    /// Index of the route to summarize
    #[arg(short, long, default_value_t = 0)]
    route: usize,

    /// Summarize every alternative route
    #[arg(long, conflicts_with = "route")]
    all: bool,

    /// Write the summary as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: SummarizeArgs) -> Result<(), anyhow::Error> {
    let directions = DirectionsResult::from_path(&args.directions)?;
    directions.ensure_ok()?;

    let plan: RoutePlan = file_utils::read_json(&args.plan)?;
    let params = params::params_from_env();

    info!(
        "Summarizing {:?} with {} destinations",
        args.directions,
        plan.destinations.len()
    );

    if args.all {
        let outcomes = route_outcomes(summarize_routes(
            &directions,
            &plan.origin,
            &plan.destinations,
            &params,
        ));

        for outcome in &outcomes {
            match (&outcome.summary, &outcome.error) {
                (Some(summary), _) => {
                    println!("Route {}", outcome.route_index);
                    print_summary(summary);
                }
                (None, error) => warn!(
                    "Route {} could not be summarized: {}",
                    outcome.route_index,
                    error.as_deref().unwrap_or_default()
                ),
            }
        }

        if let Some(output) = args.output {
            file_utils::write_json(&output, &outcomes)?;
            info!("Summaries written to {:?}", output);
        }
    } else {
        let route = directions.route(args.route)?;
        let summary = summarize_route(
            route,
            args.route,
            &plan.origin,
            &plan.destinations,
            &params,
        )?;

        print_summary(&summary);

        if let Some(output) = args.output {
            file_utils::write_json(&output, &summary)?;
            info!("Summary written to {:?}", output);
        }
    }

    Ok(())
}

fn print_summary(summary: &RouteSummary) {
    println!("{}", table::segments_table(summary));
    if !summary.toll_points.is_empty() {
        println!("{}", table::toll_points_table(summary));
    }

    let duplicates = summary.possible_duplicates().count();
    if duplicates > 0 {
        warn!(
            "{} toll points are reported at both leg and step level, their costs are counted twice",
            duplicates
        );
    }
}

#[cfg(test)]
mod tests {
    use roteiro_summary::route_segment::RouteSegment;

    use super::*;

    fn summary(distance_meters: u64) -> RouteSummary {
        let origin = Location::new("0", "Campinas", -22.9, -47.06);
        let destination = Location::new("1", "Limeira", -22.56, -47.4);
        let segment = RouteSegment {
            origin,
            destination,
            distance_meters,
            duration_seconds: 90,
            toll_cost_cents: 0,
            polyline: String::new(),
        };
        RouteSummary::from_parts(vec![segment], vec![])
    }

    #[test]
    fn test_failed_route_keeps_its_slot() {
        let outcomes = route_outcomes(vec![
            Err(SummaryError::InputMismatch(String::from("leg 0 has no distance"))),
            Ok(summary(1200)),
        ]);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].route_index, 0);
        assert!(outcomes[0].summary.is_none());
        assert!(outcomes[0].error.as_deref().unwrap().contains("leg 0 has no distance"));
        assert_eq!(outcomes[1].route_index, 1);
        assert_eq!(
            outcomes[1].summary.as_ref().unwrap().total_distance_meters,
            1200
        );

        let json = serde_json::to_value(&outcomes).unwrap();
        assert_eq!(json[0]["route_index"], 0);
        assert!(json[0].get("summary").is_none());
        assert_eq!(json[1]["route_index"], 1);
        assert!(json[1].get("error").is_none());
        assert_eq!(json[1]["summary"]["total_distance_meters"], 1200);
    }
}
