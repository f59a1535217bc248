use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::incremented,
    error::query::QueryError,
    model::city::{CreateCityParams, UpdateCityParams},
    query::{
        features::{ApiFeatures, Record},
        params::{FeatureParams, QueryOptions},
    },
};

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists cities through the filter, sort, projection and pagination pipeline.
    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, QueryError> {
        ApiFeatures::new(entity::prelude::City::find(), params, options)
            .filter()?
            .sort()
            .limit_fields()
            .paginate()
            .into_query()
            .all(self.db)
            .await
    }

    pub async fn create(&self, params: CreateCityParams) -> Result<entity::city::Model, DbErr> {
        let now = Utc::now();

        entity::city::ActiveModel {
            name: ActiveValue::Set(params.name),
            state: ActiveValue::Set(params.state),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::city::Model>, DbErr> {
        entity::prelude::City::find_by_id(id).one(self.db).await
    }

    /// Applies the set fields of `params`, bumping `version` and `updated_at`.
    ///
    /// Returns `None` when no city has the given ID.
    pub async fn update(
        &self,
        params: UpdateCityParams,
    ) -> Result<Option<entity::city::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let mut update = entity::prelude::City::update_many()
            .col_expr(
                entity::city::Column::Version,
                incremented(entity::city::Column::Version),
            )
            .col_expr(entity::city::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::city::Column::Id.eq(params.id));
        if let Some(name) = params.name {
            update = update.col_expr(entity::city::Column::Name, Expr::value(name));
        }
        if let Some(state) = params.state {
            update = update.col_expr(entity::city::Column::State, Expr::value(state));
        }

        if update.exec(&txn).await?.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let city = entity::prelude::City::find_by_id(params.id).one(&txn).await?;
        txn.commit().await?;

        Ok(city)
    }

    /// Deletes a city, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::City::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::City::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
