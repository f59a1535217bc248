//! Department parameters and conversions.

use crate::{
    model::department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    server::{
        error::validation::ValidationError,
        model::{optional_text, require_text},
    },
};

/// Validated input for creating a department.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDepartmentParams {
    pub name: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
}

impl CreateDepartmentParams {
    pub fn from_dto(dto: CreateDepartmentDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            description: dto.description,
            contact_email: optional_text("contact_email", dto.contact_email)?,
        })
    }
}

/// Validated partial update of a department; `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDepartmentParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
}

impl UpdateDepartmentParams {
    pub fn from_dto(id: i32, dto: UpdateDepartmentDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: optional_text("name", dto.name)?,
            description: dto.description,
            contact_email: optional_text("contact_email", dto.contact_email)?,
        })
    }
}

impl From<entity::department::Model> for DepartmentDto {
    fn from(model: entity::department::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            contact_email: model.contact_email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
