use clap::ValueEnum;
use roteiro_summary::{route_comparison::RouteComparison, route_summary::RouteSummary};
use schemars::schema_for;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SchemaKind {
    Summary,
    Comparison,
}

pub fn generate_json_schema(kind: SchemaKind) -> Result<String, serde_json::Error> {
    match kind {
        SchemaKind::Summary => serde_json::to_string_pretty(&schema_for!(RouteSummary)),
        SchemaKind::Comparison => serde_json::to_string_pretty(&schema_for!(RouteComparison)),
    }
}
