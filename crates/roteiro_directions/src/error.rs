use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("Failed to read directions: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Directions provider returned status {0}")]
    Status(String),

    #[error("Route {0} not found in directions result")]
    RouteNotFound(usize),
}
