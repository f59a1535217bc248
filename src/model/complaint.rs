use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComplaintStatusDto {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComplaintDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: ComplaintStatusDto,
    pub upvotes: i32,
    pub zone_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateComplaintDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub zone_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateComplaintStatusDto {
    pub status: ComplaintStatusDto,
}
