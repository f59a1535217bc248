use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::{
    error::query::QueryError,
    model::zone::{CreateZoneParams, ZoneWithRelations},
    query::{
        expand::expand,
        features::{ApiFeatures, Record},
        params::{FeatureParams, QueryOptions},
    },
};

pub struct ZoneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ZoneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists zones through the query-feature pipeline with `city` and `department`
    /// expanded in place of their IDs.
    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, QueryError> {
        let mut records = ApiFeatures::new(entity::prelude::Zone::find(), params, options)
            .filter()?
            .sort()
            .limit_fields()
            .paginate()
            .into_query()
            .all(self.db)
            .await?;

        expand::<entity::prelude::City, _>(
            self.db,
            &mut records,
            "city_id",
            "city",
            entity::city::Column::Id,
        )
        .await?;
        expand::<entity::prelude::Department, _>(
            self.db,
            &mut records,
            "department_id",
            "department",
            entity::department::Column::Id,
        )
        .await?;

        Ok(records)
    }

    /// Inserts a zone. The referenced city and department must already exist.
    pub async fn create(&self, params: CreateZoneParams) -> Result<entity::zone::Model, DbErr> {
        let now = Utc::now();

        entity::zone::ActiveModel {
            name: ActiveValue::Set(params.name),
            city_id: ActiveValue::Set(params.city_id),
            department_id: ActiveValue::Set(params.department_id),
            boundary: ActiveValue::Set(params.boundary),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a zone with its city and department loaded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ZoneWithRelations>, DbErr> {
        let Some(zone) = entity::prelude::Zone::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let city = entity::prelude::City::find_by_id(zone.city_id)
            .one(self.db)
            .await?;
        let department = entity::prelude::Department::find_by_id(zone.department_id)
            .one(self.db)
            .await?;

        Ok(Some(ZoneWithRelations {
            zone,
            city,
            department,
        }))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Zone::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Zone::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Whether any zone belongs to the given city.
    pub async fn exists_for_city(&self, city_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Zone::find()
            .filter(entity::zone::Column::CityId.eq(city_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether any zone is assigned to the given department.
    pub async fn exists_for_department(&self, department_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Zone::find()
            .filter(entity::zone::Column::DepartmentId.eq(department_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
