pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_city_table;
mod m20260301_000002_create_department_table;
mod m20260301_000003_create_zone_table;
mod m20260302_000004_create_complaint_table;
mod m20260302_000005_create_activity_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_city_table::Migration),
            Box::new(m20260301_000002_create_department_table::Migration),
            Box::new(m20260301_000003_create_zone_table::Migration),
            Box::new(m20260302_000004_create_complaint_table::Migration),
            Box::new(m20260302_000005_create_activity_table::Migration),
        ]
    }
}
