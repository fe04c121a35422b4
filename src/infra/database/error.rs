use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
#[error("Unique constraint violated: {message}")]
pub struct UniqueViolation {
    pub message: String,
    #[source]
    pub source: DbErr,
}

impl TryFrom<DbErr> for UniqueViolation {
    type Error = DbErr;

    fn try_from(value: DbErr) -> Result<Self, Self::Error> {
        match value.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Ok(Self {
                message,
                source: value,
            }),
            _ => Err(value),
        }
    }
}
