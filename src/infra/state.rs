use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};

use super::config::Config;
use super::database::get_connection;
use super::database::sea_orm::SeaOrmRepository;

#[derive(Clone)]
pub struct AppState {
    pub sea_orm_repo: SeaOrmRepository,

    pub api_version: u8,
}

impl AppState {
    pub fn new(
        conn: impl Into<Arc<DatabaseConnection>>,
        api_version: u8,
    ) -> Self {
        Self {
            sea_orm_repo: SeaOrmRepository::new(conn),
            api_version,
        }
    }

    pub async fn init(config: &Config) -> Result<Self, DbErr> {
        let conn = get_connection(&config.postgres.url()).await?;

        Ok(Self::new(conn, config.api.version))
    }
}
