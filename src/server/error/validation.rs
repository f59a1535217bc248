use thiserror::Error;

/// Invalid request payloads, detected before anything is written.
///
/// Every variant results in a 400 Bad Request carrying the error message.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    #[error("Field '{0}' must not be blank")]
    BlankField(&'static str),

    /// The boundary is not a GeoJSON polygon.
    #[error("Boundary type must be 'Polygon', got '{0}'")]
    NotAPolygon(String),

    /// The polygon has no rings.
    #[error("Boundary must contain at least one ring")]
    EmptyBoundary,

    /// A ring has fewer than four positions.
    #[error("Boundary ring {ring} has {positions} positions, at least 4 are required")]
    RingTooShort {
        /// Index of the ring within the polygon
        ring: usize,
        /// Number of positions found
        positions: usize,
    },

    /// A ring's first and last positions differ.
    #[error("Boundary ring {0} is not closed")]
    RingNotClosed(usize),

    /// A position lies outside the valid longitude/latitude range.
    #[error("Position [{lon}, {lat}] in boundary ring {ring} is out of range")]
    PositionOutOfRange {
        /// Index of the ring within the polygon
        ring: usize,
        /// Longitude of the position
        lon: f64,
        /// Latitude of the position
        lat: f64,
    },
}
