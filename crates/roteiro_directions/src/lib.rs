pub mod directions_result;
pub mod error;
pub mod lat_lng;
pub mod lenient;
pub mod leg;
pub mod money;
pub mod step;
pub mod toll_info;
