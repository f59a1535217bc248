use chrono::Utc;
use entity::{activity::ActivityKind, complaint::ComplaintStatus};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::{activity, incremented},
    error::query::QueryError,
    model::complaint::CreateComplaintParams,
    query::{
        expand::expand,
        features::{ApiFeatures, Record},
        params::{FeatureParams, QueryOptions},
    },
};

/// Outcome of [`ComplaintRepository::update_status`].
#[derive(Debug)]
pub enum StatusChange {
    /// Status moved; carries the updated complaint.
    Changed(entity::complaint::Model),
    /// The complaint already had the requested status.
    Unchanged,
    /// Another request changed the status between the read and the write.
    Conflict,
    NotFound,
}

pub struct ComplaintRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists complaints through the query-feature pipeline with `zone` expanded.
    pub async fn list(
        &self,
        params: &FeatureParams,
        options: QueryOptions,
    ) -> Result<Vec<Record>, QueryError> {
        let mut records = ApiFeatures::new(entity::prelude::Complaint::find(), params, options)
            .filter()?
            .sort()
            .limit_fields()
            .paginate()
            .into_query()
            .all(self.db)
            .await?;

        expand::<entity::prelude::Zone, _>(
            self.db,
            &mut records,
            "zone_id",
            "zone",
            entity::zone::Column::Id,
        )
        .await?;

        Ok(records)
    }

    /// Files a pending complaint and records a `Created` feed entry in the same transaction.
    pub async fn create(
        &self,
        params: CreateComplaintParams,
    ) -> Result<entity::complaint::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let complaint = entity::complaint::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(ComplaintStatus::Pending),
            upvotes: ActiveValue::Set(0),
            zone_id: ActiveValue::Set(params.zone_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        activity::record(
            &txn,
            complaint.id,
            ActivityKind::Created,
            format!("Complaint \"{}\" was filed", complaint.title),
        )
        .await?;

        txn.commit().await?;

        Ok(complaint)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::complaint::Model>, DbErr> {
        entity::prelude::Complaint::find_by_id(id).one(self.db).await
    }

    /// Moves a complaint to `status` and records a `StatusChanged` feed entry.
    ///
    /// The current status is read inside the transaction and the write only applies while
    /// it still holds, so the recorded previous status is the one actually replaced.
    pub async fn update_status(
        &self,
        id: i32,
        status: ComplaintStatus,
    ) -> Result<StatusChange, DbErr> {
        let txn = self.db.begin().await?;

        let Some(complaint) = entity::prelude::Complaint::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(StatusChange::NotFound);
        };

        let previous = complaint.status;
        if previous == status {
            txn.rollback().await?;
            return Ok(StatusChange::Unchanged);
        }

        let result = entity::prelude::Complaint::update_many()
            .col_expr(entity::complaint::Column::Status, Expr::value(status))
            .col_expr(
                entity::complaint::Column::Version,
                incremented(entity::complaint::Column::Version),
            )
            .col_expr(entity::complaint::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::complaint::Column::Id.eq(id))
            .filter(entity::complaint::Column::Status.eq(previous))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(StatusChange::Conflict);
        }

        let updated = entity::prelude::Complaint::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Complaint with id {} not found after status change",
                id
            )))?;

        activity::record(
            &txn,
            updated.id,
            ActivityKind::StatusChanged,
            format!("Status changed from {:?} to {:?}", previous, status),
        )
        .await?;

        txn.commit().await?;

        Ok(StatusChange::Changed(updated))
    }

    /// Increments the upvote counter in a single `UPDATE` and records an `Upvoted` entry.
    ///
    /// Returns `None` when no complaint has the given ID.
    pub async fn upvote(&self, id: i32) -> Result<Option<entity::complaint::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Complaint::update_many()
            .col_expr(
                entity::complaint::Column::Upvotes,
                incremented(entity::complaint::Column::Upvotes),
            )
            .col_expr(
                entity::complaint::Column::Version,
                incremented(entity::complaint::Column::Version),
            )
            .col_expr(entity::complaint::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::complaint::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let complaint = entity::prelude::Complaint::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Complaint with id {} not found after upvote",
                id
            )))?;

        activity::record(
            &txn,
            complaint.id,
            ActivityKind::Upvoted,
            format!("Upvoted, now at {}", complaint.upvotes),
        )
        .await?;

        txn.commit().await?;

        Ok(Some(complaint))
    }

    /// Whether any complaint was filed in the given zone.
    pub async fn exists_for_zone(&self, zone_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Complaint::find()
            .filter(entity::complaint::Column::ZoneId.eq(zone_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
