use std::sync::Arc;

use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel,
    TransactionTrait,
};

use crate::domain::repository::{Connection, Transaction, TransactionManager};
use crate::infra;

mod song;

/// `DatabaseConnection` is only `Clone` without the `mock` feature of
/// sea-orm, so the repository shares it through an `Arc`.
#[derive(Clone)]
pub struct SeaOrmRepository {
    pub conn: Arc<DatabaseConnection>,
}

impl SeaOrmRepository {
    pub fn new(conn: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { conn: conn.into() }
    }

    /// Read-only transaction where every statement sees the same snapshot
    pub async fn begin_snapshot(&self) -> infra::Result<SeaOrmTxRepo> {
        let tx = self
            .conn
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await?;

        Ok(SeaOrmTxRepo { tx: Arc::new(tx) })
    }
}

impl Connection for SeaOrmRepository {
    type Conn = DatabaseConnection;

    fn conn(&self) -> &Self::Conn {
        &self.conn
    }
}

impl TransactionManager for SeaOrmRepository {
    type TransactionRepository = SeaOrmTxRepo;

    async fn begin(&self) -> infra::Result<Self::TransactionRepository> {
        let tx = self.conn.begin().await?;
        let tx = Arc::new(tx);
        Ok(Self::TransactionRepository { tx })
    }
}

/// Dropping it without [`Transaction::commit`] rolls the transaction back.
#[derive(Clone)]
pub struct SeaOrmTxRepo {
    // Make this can be cloned
    tx: Arc<sea_orm::DatabaseTransaction>,
}

impl Connection for SeaOrmTxRepo {
    type Conn = DatabaseTransaction;

    fn conn(&self) -> &Self::Conn {
        &self.tx
    }
}

impl Transaction for SeaOrmTxRepo {
    async fn commit(self) -> infra::Result<()> {
        Arc::try_unwrap(self.tx)
            .map_err(|tx| {
                let wc = Arc::weak_count(&tx);
                let sc = Arc::strong_count(&tx);
                infra::Error::custom(format!(
                    "Cannot commit transaction: \
                    multiple references to the transaction exist, \
                    current weak count: {wc}, strong count: {sc}"
                ))
            })?
            .commit()
            .await?;

        Ok(())
    }
}
