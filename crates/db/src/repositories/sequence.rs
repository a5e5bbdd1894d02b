//! Serialization and retry support for date-scoped sequence assignment.
//!
//! PO numbers and payment refs are assigned by reading the current max/count
//! and inserting inside one transaction. Writers for the same day stem take a
//! transaction-scoped advisory lock first, so they assign numbers one at a
//! time. The unique constraint stays as the backstop: a collision re-runs the
//! whole unit.

use sea_orm::{ConnectionTrait, DbBackend, DbErr, SqlErr, Statement};

/// Attempts per unit of work before a sequence collision is surfaced.
pub const MAX_SEQUENCE_ATTEMPTS: u32 = 5;

/// Outcome of one failed attempt.
#[derive(Debug)]
pub(crate) enum AttemptError<E> {
    /// Business rule rejected the request. Never retried.
    Rejected(E),
    /// Database failure, possibly a sequence collision.
    Db(DbErr),
}

impl<E> From<DbErr> for AttemptError<E> {
    fn from(err: DbErr) -> Self {
        Self::Db(err)
    }
}

/// Blocks until this transaction holds the advisory lock for `stem`
/// (e.g. `PAY-20240115-`). Released on commit or rollback.
pub(crate) async fn lock_day_stem<C>(conn: &C, stem: &str) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    conn.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        "SELECT pg_advisory_xact_lock(hashtext($1))",
        [stem.into()],
    ))
    .await?;
    Ok(())
}

/// Returns true if `err` is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Returns true if the failed attempt should be re-run.
pub(crate) fn should_retry<E>(err: &AttemptError<E>, attempt: u32) -> bool {
    match err {
        AttemptError::Db(db_err) => attempt < MAX_SEQUENCE_ATTEMPTS && is_unique_violation(db_err),
        AttemptError::Rejected(_) => false,
    }
}
