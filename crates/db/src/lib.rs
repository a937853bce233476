use sqlx::SqlitePool;
use sqlx_migrator::{Info, Migrate, Migrator, Plan};

mod m0_1;
pub mod table;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::M0_1)])?;

    Ok(migrator)
}

/// Apply every pending migration on a single pooled connection.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx_migrator::Error> {
    let mut conn = pool.acquire().await?;
    migrator()?.run(&mut *conn, &Plan::apply_all()).await?;

    Ok(())
}
