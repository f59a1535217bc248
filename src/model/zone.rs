use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{city::CityDto, department::DepartmentDto};

/// GeoJSON polygon: `{"type": "Polygon", "coordinates": [[[lon, lat], ...], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoundaryDto {
    #[serde(rename = "type")]
    pub kind: String,
    #[schema(value_type = Vec<Vec<Vec<f64>>>)]
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// A zone with its city and department expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ZoneDto {
    pub id: i32,
    pub name: String,
    pub city: Option<CityDto>,
    pub department: Option<DepartmentDto>,
    pub boundary: BoundaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateZoneDto {
    pub name: String,
    pub city_id: i32,
    pub department_id: i32,
    pub boundary: BoundaryDto,
}
