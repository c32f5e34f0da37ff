pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_users_table;
mod m20261001_000002_create_super_admins_table;
mod m20261001_000003_create_vendors_table;
mod m20261001_000004_create_bookings_table;
mod m20261001_000005_create_reviews_table;
mod m20261001_000006_create_ideas_table;
mod m20261001_000007_create_plannings_table;
mod m20261001_000008_create_inquiries_table;
mod m20261001_000009_create_portfolios_table;
mod m20261001_000010_create_favorites_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_users_table::Migration),
            Box::new(m20261001_000002_create_super_admins_table::Migration),
            Box::new(m20261001_000003_create_vendors_table::Migration),
            Box::new(m20261001_000004_create_bookings_table::Migration),
            Box::new(m20261001_000005_create_reviews_table::Migration),
            Box::new(m20261001_000006_create_ideas_table::Migration),
            Box::new(m20261001_000007_create_plannings_table::Migration),
            Box::new(m20261001_000008_create_inquiries_table::Migration),
            Box::new(m20261001_000009_create_portfolios_table::Migration),
            Box::new(m20261001_000010_create_favorites_table::Migration),
        ]
    }
}
