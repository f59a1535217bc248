//! Zone fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::zone::{self, Boundary};

/// Default test zone name.
pub const DEFAULT_NAME: &str = "Ward 1";

/// Default referenced city ID.
pub const DEFAULT_CITY_ID: i32 = 1;

/// Default referenced department ID.
pub const DEFAULT_DEPARTMENT_ID: i32 = 1;

/// Returns a closed square polygon around (0, 0) with sides of `size` degrees.
pub fn square_boundary(size: f64) -> Boundary {
    let half = size / 2.0;
    Boundary {
        kind: "Polygon".to_string(),
        coordinates: vec![vec![
            [-half, -half],
            [half, -half],
            [half, half],
            [-half, half],
            [-half, -half],
        ]],
    }
}

/// Creates a zone entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Ward 1"`
/// - city_id: `1`
/// - department_id: `1`
/// - boundary: one-degree square around the origin
pub fn entity() -> zone::Model {
    entity_builder().build()
}

/// Creates a zone entity builder for customization.
pub fn entity_builder() -> ZoneEntityBuilder {
    ZoneEntityBuilder::default()
}

/// Builder for creating customized zone entity models.
pub struct ZoneEntityBuilder {
    id: i32,
    name: String,
    city_id: i32,
    department_id: i32,
    boundary: Boundary,
    created_at: DateTime<Utc>,
}

impl Default for ZoneEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            city_id: DEFAULT_CITY_ID,
            department_id: DEFAULT_DEPARTMENT_ID,
            boundary: square_boundary(1.0),
            created_at: Utc::now(),
        }
    }
}

impl ZoneEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city_id(mut self, city_id: i32) -> Self {
        self.city_id = city_id;
        self
    }

    pub fn department_id(mut self, department_id: i32) -> Self {
        self.department_id = department_id;
        self
    }

    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Builds and returns the zone entity model.
    pub fn build(self) -> zone::Model {
        zone::Model {
            id: self.id,
            name: self.name,
            city_id: self.city_id,
            department_id: self.department_id,
            boundary: self.boundary,
            created_at: self.created_at,
            updated_at: self.created_at,
            version: 0,
        }
    }
}
