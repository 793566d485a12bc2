//! Migrator for the relational document backend.
//! Every migration uses `if_not_exists`, so running `up` on each start is safe.
pub use sea_orm_migration::prelude::*;

mod m20251222_000001_create_app_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251222_000001_create_app_data::Migration)]
    }
}
