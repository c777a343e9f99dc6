//! Write transactions: BEGIN IMMEDIATE, commit on Ok, roll back otherwise.

use rusqlite::{Connection, Transaction, TransactionBehavior};
use stayzup_core::errors::StorageError;

use super::sqlite_error;

/// Run `f` inside a `BEGIN IMMEDIATE` transaction.
///
/// The write lock is taken at BEGIN, so two read-modify-write flows on the
/// same database (even from different processes) can't interleave. If `f`
/// returns `Err` the transaction is dropped, which rolls it back.
pub fn with_immediate_transaction<F, T, E>(conn: &Connection, f: F) -> Result<T, E>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    E: From<StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| E::from(sqlite_error(e)))?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| E::from(sqlite_error(e)))?;
    Ok(result)
}
