use sea_orm_migration::{MigrationTrait, MigratorTrait, async_trait::async_trait};

mod m20261016_000001_create_designs;

pub struct Migrator;

#[async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261016_000001_create_designs::Migration)]
    }
}
