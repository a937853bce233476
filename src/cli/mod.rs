mod contact;
mod server;

pub use contact::*;
pub use server::*;

#[tracing::instrument(skip(config))]
pub async fn migrate(config: crate::config::Config) -> anyhow::Result<()> {
    tracing::info!("Running database migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    portfolio_db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
