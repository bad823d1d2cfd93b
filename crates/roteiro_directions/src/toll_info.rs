use serde::{Deserialize, Serialize};

use crate::{lat_lng::LatLng, lenient::deserialize_lenient, money::Money};

/// Aggregate toll block attached to a leg.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TollInfo {
    #[serde(default)]
    pub toll_points: Vec<TollPointRaw>,

    /// Estimated price of all the tolls of the leg, one entry per currency
    #[serde(default)]
    pub estimated_price: Vec<Money>,

    /// Toll pass programs accepted on the leg
    #[serde(default)]
    pub toll_passes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TollPointRaw {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub location: Option<LatLng>,
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub cost: Option<TollCost>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TollCost {
    /// Cost in major currency units
    pub value: f64,
    pub currency: Option<String>,
}

impl TollCost {
    pub fn cents(&self) -> i64 {
        (self.value * 100.0).round() as i64
    }
}
