use crate::infra;

pub trait Connection: Send + Sync {
    type Conn: Send + Sync;

    fn conn(&self) -> &Self::Conn;
}

pub trait Transaction: Connection {
    async fn commit(self) -> infra::Result<()>;
}

pub trait TransactionManager: Connection {
    type TransactionRepository: Transaction;

    async fn begin(&self) -> infra::Result<Self::TransactionRepository>;
}
