//! Department fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::department;

/// Default test department name.
pub const DEFAULT_NAME: &str = "Public Works";

/// Default department description.
pub const DEFAULT_DESCRIPTION: &str = "Roads, drainage and street lighting";

/// Creates a department entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Public Works"`
/// - description: `Some("Roads, drainage and street lighting")`
/// - contact_email: `None`
pub fn entity() -> department::Model {
    entity_builder().build()
}

/// Creates a department entity builder for customization.
pub fn entity_builder() -> DepartmentEntityBuilder {
    DepartmentEntityBuilder::default()
}

/// Builder for creating customized department entity models.
pub struct DepartmentEntityBuilder {
    id: i32,
    name: String,
    description: Option<String>,
    contact_email: Option<String>,
    created_at: DateTime<Utc>,
}

impl Default for DepartmentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            contact_email: None,
            created_at: Utc::now(),
        }
    }
}

impl DepartmentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn contact_email(mut self, contact_email: Option<String>) -> Self {
        self.contact_email = contact_email;
        self
    }

    /// Builds and returns the department entity model.
    pub fn build(self) -> department::Model {
        department::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            contact_email: self.contact_email,
            created_at: self.created_at,
            updated_at: self.created_at,
            version: 0,
        }
    }
}
