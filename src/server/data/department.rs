use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::incremented,
    error::query::QueryError,
    model::department::{CreateDepartmentParams, UpdateDepartmentParams},
    query::{
        features::{ApiFeatures, Record},
        params::{FeatureParams, QueryOptions},
    },
};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists departments through the query-feature pipeline.
    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, QueryError> {
        ApiFeatures::new(entity::prelude::Department::find(), params, options)
            .filter()?
            .sort()
            .limit_fields()
            .paginate()
            .into_query()
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreateDepartmentParams,
    ) -> Result<entity::department::Model, DbErr> {
        let now = Utc::now();

        entity::department::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            contact_email: ActiveValue::Set(params.contact_email),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(id).one(self.db).await
    }

    /// Applies the set fields of `params`; `None` when the department does not exist.
    pub async fn update(
        &self,
        params: UpdateDepartmentParams,
    ) -> Result<Option<entity::department::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let mut update = entity::prelude::Department::update_many()
            .col_expr(
                entity::department::Column::Version,
                incremented(entity::department::Column::Version),
            )
            .col_expr(entity::department::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::department::Column::Id.eq(params.id));
        if let Some(name) = params.name {
            update = update.col_expr(entity::department::Column::Name, Expr::value(name));
        }
        if let Some(description) = params.description {
            update = update.col_expr(
                entity::department::Column::Description,
                Expr::value(description),
            );
        }
        if let Some(contact_email) = params.contact_email {
            update = update.col_expr(
                entity::department::Column::ContactEmail,
                Expr::value(contact_email),
            );
        }

        if update.exec(&txn).await?.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let department = entity::prelude::Department::find_by_id(params.id)
            .one(&txn)
            .await?;
        txn.commit().await?;

        Ok(department)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Department::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
