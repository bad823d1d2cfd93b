use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use tracing::debug;

/// Reads an optional block, turning a block of the wrong shape into `None`.
///
/// Provider responses carry partial objects (a location without `lng`, a cost without
/// `value`). Those become `None` here so the consumer decides what to skip instead of the
/// whole response failing to parse.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            debug!("Ignoring incomplete block: {}", err);
            Ok(None)
        }
    }
}
