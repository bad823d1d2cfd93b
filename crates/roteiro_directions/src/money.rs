use serde::{Deserialize, Deserializer, Serialize};

/// Price split in a whole part and a nano-unit fractional part.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Money {
    pub currency_code: Option<String>,

    /// Whole units, some providers send it as a string
    #[serde(default, deserialize_with = "deserialize_units")]
    pub units: i64,

    #[serde(default)]
    pub nanos: i64,
}

impl Money {
    pub fn value(&self) -> f64 {
        self.units as f64 + self.nanos as f64 / 1e9
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Units {
    Number(i64),
    Text(String),
}

fn deserialize_units<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Units::deserialize(deserializer)? {
        Units::Number(units) => Ok(units),
        Units::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid units: {text}"))),
    }
}
