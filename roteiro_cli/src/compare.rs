use std::path::PathBuf;

use clap::Args;
use roteiro_summary::{route_comparator::compare, route_summary::RouteSummary};
use tracing::info;

use crate::{file_utils, table};

#[derive(Args)]
pub struct CompareArgs {
    /// Summary of the reference route, e.g. the default order
    #[arg(short, long)]
    baseline: PathBuf,

    /// Summary of the route to evaluate, e.g. the optimized order
    #[arg(short, long)]
    candidate: PathBuf,

    /// Write the comparison as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: CompareArgs) -> Result<(), anyhow::Error> {
    let baseline: RouteSummary = file_utils::read_json(&args.baseline)?;
    let candidate: RouteSummary = file_utils::read_json(&args.candidate)?;

    let comparison = compare(&baseline, &candidate)?;

    println!("{}", table::comparison_table(&baseline, &candidate, &comparison));

    if comparison.candidate_is_shorter() {
        info!(
            "Candidate saves {}m ({:.2}%)",
            comparison.distance_delta_meters, comparison.distance_delta_percent
        );
    } else {
        info!(
            "Candidate is {}m longer ({:.2}%)",
            -comparison.distance_delta_meters, -comparison.distance_delta_percent
        );
    }

    if let Some(output) = args.output {
        file_utils::write_json(&output, &comparison)?;
        info!("Comparison written to {:?}", output);
    }

    Ok(())
}
