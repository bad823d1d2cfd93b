use roteiro_summary::summary_params::SummaryParams;
use tracing::warn;

const ROAD_MATCH_TOLERANCE_ENV_VAR: &str = "ROTEIRO_ROAD_MATCH_TOLERANCE";
const DUPLICATE_TOLERANCE_ENV_VAR: &str = "ROTEIRO_DUPLICATE_TOLERANCE_METERS";
const TOTALS_TOLERANCE_ENV_VAR: &str = "ROTEIRO_TOTALS_TOLERANCE";

pub fn params_from_env() -> SummaryParams {
    params_from_lookup(|key| std::env::var(key).ok())
}

/// Defaults overridden by any parsable value returned by `lookup`.
pub fn params_from_lookup<F>(lookup: F) -> SummaryParams
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = SummaryParams::default();

    SummaryParams {
        road_match_tolerance_degrees: parse_or(
            &lookup,
            ROAD_MATCH_TOLERANCE_ENV_VAR,
            defaults.road_match_tolerance_degrees,
        ),
        duplicate_tolerance_meters: parse_or(
            &lookup,
            DUPLICATE_TOLERANCE_ENV_VAR,
            defaults.duplicate_tolerance_meters,
        ),
        totals_tolerance: parse_or(&lookup, TOTALS_TOLERANCE_ENV_VAR, defaults.totals_tolerance),
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return default;
    };

    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => parsed,
        _ => {
            warn!("Ignoring invalid {}={}, using {}", key, value, default);
            default
        }
    }
}
