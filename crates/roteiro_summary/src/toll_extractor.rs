use geo::{Distance, Haversine};
use roteiro_directions::{
    lat_lng::LatLng,
    leg::Leg,
    step::{Step, StepToll},
    toll_info::{TollInfo, TollPointRaw},
};
use tracing::{debug, warn};

use crate::{
    error::SummaryError,
    road_name::{fallback_road_name, parse_road_name, resolve_road_name},
    summary_params::SummaryParams,
    toll_point::{TollPoint, TollPointType, TollSource},
};

const LEG_TOLL_ID_BASE: u64 = 1000;
const STEP_TOLL_ID_BASE: u64 = 5000;

pub fn leg_toll_id(route_index: usize, leg_index: usize, toll_index: usize) -> u64 {
    LEG_TOLL_ID_BASE + route_index as u64 * 100 + leg_index as u64 * 10 + toll_index as u64
}

/// The step index shares the leg multiplier, ids are only unique for small indices.
pub fn step_toll_id(
    route_index: usize,
    leg_index: usize,
    step_index: usize,
    toll_index: usize,
) -> u64 {
    STEP_TOLL_ID_BASE
        + route_index as u64 * 100
        + leg_index as u64 * 10
        + step_index as u64 * 10
        + toll_index as u64
}

/// Extracts the toll points of a route.
///
/// Leg level `toll_info` and step level `tolls` are scanned independently and the results
/// concatenated, leg tolls first. A provider filling both levels for the same physical toll
/// yields two entries, flagged with `possible_duplicate`.
pub fn extract_tolls(legs: &[Leg], route_index: usize, params: &SummaryParams) -> Vec<TollPoint> {
    let leg_tolls = extract_leg_tolls(legs, route_index, params);
    let step_tolls = extract_step_tolls(legs, route_index);

    flag_possible_duplicates(leg_tolls, step_tolls, params.duplicate_tolerance_meters)
}

fn extract_leg_tolls(legs: &[Leg], route_index: usize, params: &SummaryParams) -> Vec<TollPoint> {
    let mut toll_points = Vec::new();

    for (leg_index, leg) in legs.iter().enumerate() {
        let Some(toll_info) = &leg.toll_info else {
            continue;
        };

        let shared_cost_cents = shared_cost_cents(toll_info);
        let restrictions = toll_info.toll_passes.join(", ");

        for (toll_index, raw) in toll_info.toll_points.iter().enumerate() {
            let Some(location) = raw.location else {
                warn_malformed(SummaryError::MalformedTollEntry {
                    leg_index,
                    step_index: None,
                    toll_index,
                });
                continue;
            };

            toll_points.push(TollPoint {
                id: leg_toll_id(route_index, leg_index, toll_index),
                name: toll_name(raw.name.as_deref(), toll_index),
                lat: location.lat,
                lng: location.lng,
                point_type: TollPointType::Toll,
                cost_cents: leg_toll_cost_cents(raw, shared_cost_cents),
                road_name: resolve_road_name(
                    &leg.steps,
                    &location,
                    leg_index,
                    params.road_match_tolerance_degrees,
                ),
                restrictions: restrictions.clone(),
                leg_index,
                source: TollSource::Leg,
                possible_duplicate: false,
            });
        }
    }

    debug!("Extracted {} leg level tolls", toll_points.len());

    toll_points
}

fn extract_step_tolls(legs: &[Leg], route_index: usize) -> Vec<TollPoint> {
    let mut toll_points = Vec::new();

    for (leg_index, leg) in legs.iter().enumerate() {
        for (step_index, step) in leg.steps.iter().enumerate() {
            for (toll_index, toll) in step.tolls.iter().enumerate() {
                let Some(location) = step_toll_location(step, toll) else {
                    warn_malformed(SummaryError::MalformedTollEntry {
                        leg_index,
                        step_index: Some(step_index),
                        toll_index,
                    });
                    continue;
                };

                toll_points.push(TollPoint {
                    id: step_toll_id(route_index, leg_index, step_index, toll_index),
                    name: toll_name(toll.name.as_deref(), toll_index),
                    lat: location.lat,
                    lng: location.lng,
                    point_type: TollPointType::Toll,
                    cost_cents: toll.cost.as_ref().map_or(0, |cost| cost.cents()),
                    road_name: parse_road_name(step.instructions())
                        .unwrap_or_else(|| fallback_road_name(leg_index)),
                    restrictions: String::new(),
                    leg_index,
                    source: TollSource::Step,
                    possible_duplicate: false,
                });
            }
        }
    }

    debug!("Extracted {} step level tolls", toll_points.len());

    toll_points
}

/// Leg estimated price split evenly across the leg toll points, in cents.
fn shared_cost_cents(toll_info: &TollInfo) -> Option<i64> {
    let price = toll_info.estimated_price.first()?;
    if toll_info.toll_points.is_empty() {
        return None;
    }

    let share = price.value() / toll_info.toll_points.len() as f64;
    Some((share * 100.0).round() as i64)
}

fn leg_toll_cost_cents(raw: &TollPointRaw, shared_cost_cents: Option<i64>) -> i64 {
    match &raw.cost {
        Some(cost) => cost.cents(),
        None => shared_cost_cents.unwrap_or(0),
    }
}

fn step_toll_location(step: &Step, toll: &StepToll) -> Option<LatLng> {
    toll.location.or_else(|| {
        let start = step.start_location?;
        let end = step.end_location?;
        Some(start.midpoint(&end))
    })
}

fn toll_name(name: Option<&str>, toll_index: usize) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.trim().to_owned(),
        _ => format!("Pedágio {}", toll_index + 1),
    }
}

fn warn_malformed(error: SummaryError) {
    warn!("Skipping toll entry: {}", error);
}

/// Marks leg and step tolls of the same leg lying within `tolerance_meters` of each other.
fn flag_possible_duplicates(
    mut leg_tolls: Vec<TollPoint>,
    mut step_tolls: Vec<TollPoint>,
    tolerance_meters: f64,
) -> Vec<TollPoint> {
    let haversine = Haversine;

    for leg_toll in leg_tolls.iter_mut() {
        for step_toll in step_tolls.iter_mut() {
            if leg_toll.leg_index != step_toll.leg_index {
                continue;
            }

            let distance = haversine.distance(
                geo::Point::from(&*leg_toll),
                geo::Point::from(&*step_toll),
            );

            if distance <= tolerance_meters {
                debug!(
                    "Toll {} and toll {} are {:.1}m apart, flagging as possible duplicates",
                    leg_toll.id, step_toll.id, distance
                );
                leg_toll.possible_duplicate = true;
                step_toll.possible_duplicate = true;
            }
        }
    }

    leg_tolls.append(&mut step_tolls);
    leg_tolls
}

#[cfg(test)]
mod tests {
    use roteiro_directions::{money::Money, toll_info::TollCost};

    use super::*;
    use crate::test_utils;

    fn toll_raw(lat: f64, lng: f64, cost: Option<f64>) -> TollPointRaw {
        TollPointRaw {
            location: Some(LatLng::new(lat, lng)),
            name: None,
            cost: cost.map(|value| TollCost {
                value,
                currency: None,
            }),
        }
    }

    fn leg_with_tolls(toll_info: TollInfo) -> Leg {
        let mut leg = test_utils::create_leg(
            50000,
            1800,
            vec![
                test_utils::create_step(
                    (-22.0, -47.5),
                    (-22.2, -47.9),
                    "a",
                    "Continue on <b>SP-330</b>",
                ),
                test_utils::create_step(
                    (-22.2, -47.9),
                    (-22.5, -48.3),
                    "b",
                    "Turn <b>left</b> onto <b>SP-310</b>",
                ),
            ],
        );
        leg.toll_info = Some(toll_info);
        leg
    }

    #[test]
    fn test_exact_cost() {
        let legs = vec![leg_with_tolls(TollInfo {
            toll_points: vec![toll_raw(-22.1, -47.8, Some(5.50))],
            ..TollInfo::default()
        })];

        let tolls = extract_tolls(&legs, 0, &SummaryParams::default());

        assert_eq!(tolls.len(), 1);
        assert_eq!(tolls[0].id, 1000);
        assert_eq!(tolls[0].cost_cents, 550);
        assert_eq!(tolls[0].road_name, "SP-330");
        assert_eq!(tolls[0].name, "Pedágio 1");
        assert_eq!(tolls[0].point_type, TollPointType::Toll);
        assert_eq!(tolls[0].source, TollSource::Leg);
        assert_eq!(tolls[0].restrictions, "");
    }

    #[test]
    fn test_estimated_price_split_evenly() {
        let legs = vec![leg_with_tolls(TollInfo {
            toll_points: vec![
                toll_raw(-22.1, -47.8, None),
                toll_raw(-22.4, -48.2, None),
                toll_raw(-22.45, -48.25, Some(1.0)),
            ],
            estimated_price: vec![Money {
                currency_code: Some(String::from("BRL")),
                units: 30,
                nanos: 300_000_000,
            }],
            toll_passes: vec![String::from("Sem Parar"), String::from("ConectCar")],
        })];

        let tolls = extract_tolls(&legs, 0, &SummaryParams::default());

        assert_eq!(tolls.len(), 3);
        assert_eq!(tolls[0].cost_cents, 1010);
        assert_eq!(tolls[1].cost_cents, 1010);
        assert_eq!(tolls[2].cost_cents, 100);
        assert_eq!(tolls[1].road_name, "SP-310");
        assert_eq!(tolls[0].restrictions, "Sem Parar, ConectCar");
        assert_eq!(
            tolls.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1000, 1001, 1002]
        );
    }

    #[test]
    fn test_no_cost_information() {
        let legs = vec![leg_with_tolls(TollInfo {
            toll_points: vec![toll_raw(-22.1, -47.8, None)],
            ..TollInfo::default()
        })];

        let tolls = extract_tolls(&legs, 0, &SummaryParams::default());

        assert_eq!(tolls[0].cost_cents, 0);
    }

    #[test]
    fn test_ids_depend_on_route_and_leg() {
        let toll_info = TollInfo {
            toll_points: vec![toll_raw(-22.1, -47.8, None), toll_raw(-22.3, -48.0, None)],
            ..TollInfo::default()
        };
        let legs = vec![leg_with_tolls(toll_info.clone()), leg_with_tolls(toll_info)];

        let tolls = extract_tolls(&legs, 2, &SummaryParams::default());

        assert_eq!(
            tolls.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1200, 1201, 1210, 1211]
        );
        assert_eq!(tolls[2].leg_index, 1);
    }

    #[test]
    fn test_ids_do_not_wrap_for_large_indices() {
        assert_eq!(leg_toll_id(50_000_000, 0, 0), 5_000_001_000);
        assert!(leg_toll_id(50_000_000, 0, 0) > u64::from(u32::MAX));
        assert_eq!(step_toll_id(50_000_000, 1, 2, 3), 5_000_005_033);

        let legs = vec![leg_with_tolls(TollInfo {
            toll_points: vec![toll_raw(-22.1, -47.8, None)],
            ..TollInfo::default()
        })];
        let tolls = extract_tolls(&legs, 42_949_673, &SummaryParams::default());

        assert_eq!(tolls[0].id, 4_294_968_300);
    }

    #[test]
    fn test_road_name_fallback() {
        let legs = vec![leg_with_tolls(TollInfo {
            toll_points: vec![toll_raw(-10.0, -40.0, Some(2.0))],
            ..TollInfo::default()
        })];

        let tolls = extract_tolls(&legs, 0, &SummaryParams::default());

        assert_eq!(tolls[0].road_name, "Trecho 1");
    }

    #[test]
    fn test_step_tolls() {
        let mut leg = test_utils::create_leg(
            20000,
            900,
            vec![
                test_utils::create_step((-22.0, -47.0), (-22.0, -47.1), "a", "Head <b>west</b>"),
                test_utils::create_step(
                    (-22.0, -47.1),
                    (-22.2, -47.3),
                    "b",
                    "Continue on <b>SP-348</b>",
                ),
            ],
        );
        leg.steps[1].tolls = vec![
            StepToll {
                location: None,
                name: Some(String::from("Praça Campo Limpo")),
                cost: Some(TollCost {
                    value: 12.4,
                    currency: None,
                }),
            },
            StepToll {
                location: Some(LatLng::new(-22.15, -47.25)),
                name: None,
                cost: None,
            },
        ];
        let legs = vec![test_utils::create_leg(1000, 60, vec![]), leg];

        let tolls = extract_tolls(&legs, 0, &SummaryParams::default());

        assert_eq!(tolls.len(), 2);
        assert_eq!(tolls[0].id, 5000 + 10 + 10);
        assert_eq!(tolls[0].name, "Praça Campo Limpo");
        assert!((tolls[0].lat - -22.1).abs() < 1e-9);
        assert!((tolls[0].lng - -47.2).abs() < 1e-9);
        assert_eq!(tolls[0].cost_cents, 1240);
        assert_eq!(tolls[0].road_name, "SP-348");
        assert_eq!(tolls[0].source, TollSource::Step);

        assert_eq!(tolls[1].id, 5021);
        assert_eq!(tolls[1].cost_cents, 0);
        assert_eq!(tolls[1].lat, -22.15);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let mut leg = leg_with_tolls(TollInfo {
            toll_points: vec![TollPointRaw::default(), toll_raw(-22.1, -47.8, Some(3.0))],
            ..TollInfo::default()
        });
        leg.steps[0].start_location = None;
        leg.steps[0].tolls = vec![StepToll::default()];

        let tolls = extract_tolls(&[leg], 0, &SummaryParams::default());

        assert_eq!(tolls.len(), 1);
        // The index of the skipped entry is not reused.
        assert_eq!(tolls[0].id, 1001);
        assert_eq!(tolls[0].cost_cents, 300);
    }

    #[test]
    fn test_leg_and_step_toll_are_both_kept() {
        let mut leg = leg_with_tolls(TollInfo {
            toll_points: vec![toll_raw(-22.1, -47.7, Some(5.5))],
            ..TollInfo::default()
        });
        leg.steps[0].tolls = vec![StepToll {
            location: Some(LatLng::new(-22.1001, -47.7001)),
            name: None,
            cost: Some(TollCost {
                value: 5.5,
                currency: None,
            }),
        }];

        let tolls = extract_tolls(&[leg], 0, &SummaryParams::default());

        assert_eq!(tolls.len(), 2);
        assert_eq!(tolls[0].source, TollSource::Leg);
        assert_eq!(tolls[1].source, TollSource::Step);
        assert!(tolls.iter().all(|t| t.possible_duplicate));
        assert_eq!(tolls.iter().map(|t| t.cost_cents).sum::<i64>(), 1100);
    }

    #[test]
    fn test_distant_tolls_are_not_flagged() {
        let mut leg = leg_with_tolls(TollInfo {
            toll_points: vec![toll_raw(-22.1, -47.7, Some(5.5))],
            ..TollInfo::default()
        });
        leg.steps[1].tolls = vec![StepToll {
            location: Some(LatLng::new(-22.4, -48.2)),
            name: None,
            cost: None,
        }];

        let tolls = extract_tolls(&[leg], 0, &SummaryParams::default());

        assert_eq!(tolls.len(), 2);
        assert!(tolls.iter().all(|t| !t.possible_duplicate));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let mut leg = leg_with_tolls(TollInfo {
            toll_points: vec![toll_raw(-22.1, -47.8, None), toll_raw(-22.4, -48.2, None)],
            estimated_price: vec![Money {
                currency_code: None,
                units: 9,
                nanos: 0,
            }],
            toll_passes: vec![],
        });
        leg.steps[1].tolls = vec![StepToll::default()];
        let legs = vec![leg];

        let first = extract_tolls(&legs, 1, &SummaryParams::default());
        let second = extract_tolls(&legs, 1, &SummaryParams::default());

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
