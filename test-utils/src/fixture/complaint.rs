//! Complaint fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::complaint::{self, ComplaintStatus};

/// Default test complaint title.
pub const DEFAULT_TITLE: &str = "Pothole on Main Street";

/// Default test complaint description.
pub const DEFAULT_DESCRIPTION: &str = "Deep pothole in the left lane near the bus stop";

/// Default referenced zone ID.
pub const DEFAULT_ZONE_ID: i32 = 1;

/// Creates a complaint entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Pothole on Main Street"`
/// - status: `Pending`
/// - upvotes: `0`
/// - zone_id: `1`
pub fn entity() -> complaint::Model {
    entity_builder().build()
}

/// Creates a complaint entity builder for customization.
pub fn entity_builder() -> ComplaintEntityBuilder {
    ComplaintEntityBuilder::default()
}

/// Builder for creating customized complaint entity models.
pub struct ComplaintEntityBuilder {
    id: i32,
    title: String,
    description: String,
    status: ComplaintStatus,
    upvotes: i32,
    zone_id: i32,
    created_at: DateTime<Utc>,
}

impl Default for ComplaintEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            status: ComplaintStatus::Pending,
            upvotes: 0,
            zone_id: DEFAULT_ZONE_ID,
            created_at: Utc::now(),
        }
    }
}

impl ComplaintEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: ComplaintStatus) -> Self {
        self.status = status;
        self
    }

    pub fn upvotes(mut self, upvotes: i32) -> Self {
        self.upvotes = upvotes;
        self
    }

    pub fn zone_id(mut self, zone_id: i32) -> Self {
        self.zone_id = zone_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the complaint entity model.
    pub fn build(self) -> complaint::Model {
        complaint::Model {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status,
            upvotes: self.upvotes,
            zone_id: self.zone_id,
            created_at: self.created_at,
            updated_at: self.created_at,
            version: 0,
        }
    }
}
