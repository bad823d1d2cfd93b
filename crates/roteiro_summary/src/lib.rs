pub mod error;
pub mod leg_reducer;
pub mod location;
pub mod road_name;
pub mod route_comparator;
pub mod route_comparison;
pub mod route_segment;
pub mod route_summary;
pub mod summarize;
pub mod summary_params;
pub mod toll_extractor;
pub mod toll_point;

#[cfg(test)]
pub(crate) mod test_utils;
