mod database;

use std::sync::Arc;

use anyhow::Result;
use axum_test::TestServer;
pub use database::TestDatabase;
use music_library::infra::state::AppState;
use music_library::presentation::rest::router;

pub struct TestApp {
    pub database: TestDatabase,
    pub server: TestServer,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let database = TestDatabase::new().await?;

        let state = AppState::new(Arc::clone(database.connection()), 1);
        let server = TestServer::new(router(Arc::new(state)))?;

        Ok(Self { database, server })
    }

    pub async fn stop(self) -> Result<()> {
        self.database.stop().await
    }
}
