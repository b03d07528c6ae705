pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_reference_tables;
mod m20250301_000002_create_employee_table;
mod m20250301_000003_create_employee_link_tables;
mod m20250301_000004_create_dashboard_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_reference_tables::Migration),
            Box::new(m20250301_000002_create_employee_table::Migration),
            Box::new(m20250301_000003_create_employee_link_tables::Migration),
            Box::new(m20250301_000004_create_dashboard_tables::Migration),
        ]
    }
}
