use std::sync::Arc;

use anyhow::{Context, Result};
use music_library::infra::database::get_connection;
use postgresql_embedded::{PostgreSQL, Settings};
use sea_orm::DatabaseConnection;

const DB_NAME: &str = "music_test";

pub struct TestDatabase {
    postgres: PostgreSQL,
    connection: Arc<DatabaseConnection>,
}

impl TestDatabase {
    /// Starts a fresh cluster and runs the migrations on it.
    pub async fn new() -> Result<Self> {
        let mut postgres = PostgreSQL::new(Settings::default());
        postgres.setup().await?;
        postgres.start().await?;
        postgres.create_database(DB_NAME).await?;

        let connection = get_connection(&postgres.settings().url(DB_NAME))
            .await
            .context("Failed to connect to the test database")?;
        let connection = Arc::new(connection);

        Ok(Self {
            postgres,
            connection,
        })
    }

    pub const fn connection(&self) -> &Arc<DatabaseConnection> {
        &self.connection
    }

    pub async fn stop(self) -> Result<()> {
        self.connection.close_by_ref().await?;

        self.postgres
            .stop()
            .await
            .context("Failed to stop PostgreSQL")
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        let settings = self.postgres.settings();
        let _ = std::fs::remove_dir_all(&settings.data_dir);
        let _ = settings.password_file.parent().map(std::fs::remove_dir_all);
    }
}
