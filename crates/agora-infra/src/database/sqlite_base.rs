use std::marker::PhantomData;

use sea_orm::{DatabaseTransaction, DbConn, DbErr, EntityTrait, SqlErr, TransactionTrait};

use agora_core::error::RepoError;

/// Generic SQLite repository over one SeaORM entity.
pub struct SqliteBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SqliteBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Open a transaction. Dropping it without `commit` rolls it back, so an
    /// early `?` return never leaves a half-applied mutation behind.
    pub(crate) async fn begin(&self) -> Result<DatabaseTransaction, RepoError> {
        self.db.begin().await.map_err(map_db_err)
    }
}

/// Classify a SeaORM error.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
