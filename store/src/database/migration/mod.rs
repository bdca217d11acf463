//! Database migrations.

pub use sea_orm_migration::*;

mod m20240301_000001_create_address_table;
mod m20240301_000002_create_manufacturer_table;
mod m20240301_000003_create_model_table;
mod m20240301_000004_create_drone_table;
mod m20240301_000005_create_location_table;
mod m20240301_000006_create_operator_table;
mod m20240301_000007_create_flight_table;
mod m20240301_000008_create_flight_property_tables;
mod m20240301_000009_create_maintenance_tables;
mod m20240301_000010_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_address_table::Migration),
            Box::new(m20240301_000002_create_manufacturer_table::Migration),
            Box::new(m20240301_000003_create_model_table::Migration),
            Box::new(m20240301_000004_create_drone_table::Migration),
            Box::new(m20240301_000005_create_location_table::Migration),
            Box::new(m20240301_000006_create_operator_table::Migration),
            Box::new(m20240301_000007_create_flight_table::Migration),
            Box::new(m20240301_000008_create_flight_property_tables::Migration),
            Box::new(m20240301_000009_create_maintenance_tables::Migration),
            Box::new(m20240301_000010_create_user_table::Migration),
        ]
    }
}
