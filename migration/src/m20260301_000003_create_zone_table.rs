use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_city_table::City,
    m20260301_000002_create_department_table::Department,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Zone::Table)
                    .if_not_exists()
                    .col(pk_auto(Zone::Id))
                    .col(string(Zone::Name))
                    .col(integer(Zone::CityId))
                    .col(integer(Zone::DepartmentId))
                    .col(json(Zone::Boundary))
                    .col(
                        timestamp_with_time_zone(Zone::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Zone::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Zone::Version).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zone_city_id")
                            .from(Zone::Table, Zone::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zone_department_id")
                            .from(Zone::Table, Zone::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Zone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Zone {
    Table,
    Id,
    Name,
    CityId,
    DepartmentId,
    Boundary,
    CreatedAt,
    UpdatedAt,
    Version,
}
