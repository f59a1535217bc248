use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_zone_table::Zone;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(pk_auto(Complaint::Id))
                    .col(string(Complaint::Title))
                    .col(text(Complaint::Description))
                    .col(string_len(Complaint::Status, 16).default("Pending"))
                    .col(integer(Complaint::Upvotes).default(0))
                    .col(integer(Complaint::ZoneId))
                    .col(
                        timestamp_with_time_zone(Complaint::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Complaint::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Complaint::Version).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaint_zone_id")
                            .from(Complaint::Table, Complaint::ZoneId)
                            .to(Zone::Table, Zone::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_complaint_status_created_at")
                    .table(Complaint::Table)
                    .col(Complaint::Status)
                    .col(Complaint::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Complaint {
    Table,
    Id,
    Title,
    Description,
    Status,
    Upvotes,
    ZoneId,
    CreatedAt,
    UpdatedAt,
    Version,
}
