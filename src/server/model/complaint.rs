//! Complaint parameters and conversions.

use entity::complaint::ComplaintStatus;

use crate::{
    model::complaint::{ComplaintDto, ComplaintStatusDto, CreateComplaintDto},
    server::{error::validation::ValidationError, model::require_text},
};

/// Validated input for filing a complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateComplaintParams {
    pub title: String,
    pub description: String,
    pub zone_id: i32,
}

impl CreateComplaintParams {
    pub fn from_dto(dto: CreateComplaintDto) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require_text("title", dto.title)?,
            description: dto.description.trim().to_string(),
            zone_id: dto.zone_id,
        })
    }
}

impl From<ComplaintStatusDto> for ComplaintStatus {
    fn from(status: ComplaintStatusDto) -> Self {
        match status {
            ComplaintStatusDto::Pending => Self::Pending,
            ComplaintStatusDto::InProgress => Self::InProgress,
            ComplaintStatusDto::Resolved => Self::Resolved,
            ComplaintStatusDto::Rejected => Self::Rejected,
        }
    }
}

impl From<ComplaintStatus> for ComplaintStatusDto {
    fn from(status: ComplaintStatus) -> Self {
        match status {
            ComplaintStatus::Pending => Self::Pending,
            ComplaintStatus::InProgress => Self::InProgress,
            ComplaintStatus::Resolved => Self::Resolved,
            ComplaintStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<entity::complaint::Model> for ComplaintDto {
    fn from(model: entity::complaint::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status.into(),
            upvotes: model.upvotes,
            zone_id: model.zone_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
