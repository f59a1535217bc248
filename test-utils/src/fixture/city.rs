//! City fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::city;

/// Default test city name.
pub const DEFAULT_NAME: &str = "Springfield";

/// Default test state.
pub const DEFAULT_STATE: &str = "Oregon";

/// Creates a city entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Springfield"`
/// - state: `"Oregon"`
/// - created_at / updated_at: now
/// - version: `0`
pub fn entity() -> city::Model {
    entity_builder().build()
}

/// Creates a city entity builder for customization.
pub fn entity_builder() -> CityEntityBuilder {
    CityEntityBuilder::default()
}

/// Builder for creating customized city entity models.
pub struct CityEntityBuilder {
    id: i32,
    name: String,
    state: String,
    created_at: DateTime<Utc>,
}

impl Default for CityEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            state: DEFAULT_STATE.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl CityEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the city entity model.
    pub fn build(self) -> city::Model {
        city::Model {
            id: self.id,
            name: self.name,
            state: self.state,
            created_at: self.created_at,
            updated_at: self.created_at,
            version: 0,
        }
    }
}
