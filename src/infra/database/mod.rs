use ::sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use migration::MigratorTrait;

pub mod error;
pub mod sea_orm;

/// Connects to postgres and brings the schema up to date.
pub async fn get_connection(url: &str) -> Result<DatabaseConnection, DbErr> {
    let opt = ConnectOptions::new(url)
        .sqlx_logging(false)
        .min_connections(1)
        .to_owned();

    let conn = Database::connect(opt).await?;

    migration::Migrator::up(&conn, None)
        .await
        .inspect_err(|err| tracing::error!("Failed to run migration: {err}"))?;

    Ok(conn)
}
