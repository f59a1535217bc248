//! City parameters and conversions.

use crate::{
    model::city::{CityDto, CreateCityDto, UpdateCityDto},
    server::{
        error::validation::ValidationError,
        model::{optional_text, require_text},
    },
};

/// Validated input for creating a city.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCityParams {
    pub name: String,
    pub state: String,
}

impl CreateCityParams {
    /// Trims and validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateCityParams)` - Name and state are non-blank
    /// - `Err(ValidationError::BlankField)` - Either field is blank
    pub fn from_dto(dto: CreateCityDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            state: require_text("state", dto.state)?,
        })
    }
}

/// Validated partial update of a city; `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCityParams {
    pub id: i32,
    pub name: Option<String>,
    pub state: Option<String>,
}

impl UpdateCityParams {
    pub fn from_dto(id: i32, dto: UpdateCityDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: optional_text("name", dto.name)?,
            state: optional_text("state", dto.state)?,
        })
    }
}

impl From<entity::city::Model> for CityDto {
    fn from(model: entity::city::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            state: model.state,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
