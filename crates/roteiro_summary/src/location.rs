use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Named stop of a route plan.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Location {
    pub id: String,
    pub name: String,

    #[serde(deserialize_with = "deserialize_degrees")]
    #[schemars(with = "f64")]
    pub lat: f64,

    #[serde(deserialize_with = "deserialize_degrees")]
    #[schemars(with = "f64")]
    pub lng: f64,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
        }
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        geo::Point::new(location.lng, location.lat)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Degrees {
    Number(f64),
    Text(String),
}

/// Addresses typed by users come with coordinates as strings.
fn deserialize_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Degrees::deserialize(deserializer)? {
        Degrees::Number(degrees) => Ok(degrees),
        Degrees::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid coordinate: {text}"))),
    }
}
