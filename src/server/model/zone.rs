//! Zone parameters, boundary validation and conversions.

use entity::zone::Boundary;

use crate::{
    model::{
        city::CityDto,
        department::DepartmentDto,
        zone::{BoundaryDto, CreateZoneDto, ZoneDto},
    },
    server::{error::validation::ValidationError, model::require_text},
};

const POLYGON: &str = "Polygon";
const MIN_RING_POSITIONS: usize = 4;

/// Validated input for creating a zone.
///
/// The referenced city and department are checked by the service, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateZoneParams {
    pub name: String,
    pub city_id: i32,
    pub department_id: i32,
    pub boundary: Boundary,
}

impl CreateZoneParams {
    pub fn from_dto(dto: CreateZoneDto) -> Result<Self, ValidationError> {
        let boundary = Boundary {
            kind: dto.boundary.kind,
            coordinates: dto.boundary.coordinates,
        };
        validate_boundary(&boundary)?;

        Ok(Self {
            name: require_text("name", dto.name)?,
            city_id: dto.city_id,
            department_id: dto.department_id,
            boundary,
        })
    }
}

/// Checks that `boundary` is a closed GeoJSON polygon with positions in range.
///
/// Each ring needs at least four positions and must end where it starts.
/// Longitudes must lie in [-180, 180] and latitudes in [-90, 90].
pub fn validate_boundary(boundary: &Boundary) -> Result<(), ValidationError> {
    if boundary.kind != POLYGON {
        return Err(ValidationError::NotAPolygon(boundary.kind.clone()));
    }

    if boundary.coordinates.is_empty() {
        return Err(ValidationError::EmptyBoundary);
    }

    for (ring, positions) in boundary.coordinates.iter().enumerate() {
        if positions.len() < MIN_RING_POSITIONS {
            return Err(ValidationError::RingTooShort {
                ring,
                positions: positions.len(),
            });
        }

        if positions.first() != positions.last() {
            return Err(ValidationError::RingNotClosed(ring));
        }

        if let Some([lon, lat]) = positions
            .iter()
            .find(|[lon, lat]| !(-180.0..=180.0).contains(lon) || !(-90.0..=90.0).contains(lat))
        {
            return Err(ValidationError::PositionOutOfRange {
                ring,
                lon: *lon,
                lat: *lat,
            });
        }
    }

    Ok(())
}

impl From<Boundary> for BoundaryDto {
    fn from(boundary: Boundary) -> Self {
        Self {
            kind: boundary.kind,
            coordinates: boundary.coordinates,
        }
    }
}

/// A zone with its referenced city and department loaded.
#[derive(Debug, Clone)]
pub struct ZoneWithRelations {
    pub zone: entity::zone::Model,
    pub city: Option<entity::city::Model>,
    pub department: Option<entity::department::Model>,
}

impl ZoneWithRelations {
    pub fn into_dto(self) -> ZoneDto {
        ZoneDto {
            id: self.zone.id,
            name: self.zone.name,
            city: self.city.map(CityDto::from),
            department: self.department.map(DepartmentDto::from),
            boundary: self.zone.boundary.into(),
            created_at: self.zone.created_at,
            updated_at: self.zone.updated_at,
        }
    }
}
