//! Row-at-a-time bulk inserts.
//!
//! Every row goes through the same prepared statement and its id is read back
//! with `last_insert_rowid()` right after the insert. Ids therefore never
//! depend on the table's auto-increment being contiguous, so concurrent
//! writers on other connections cannot shift them.

use rusqlite::{Connection, Statement};

use super::DbResult;

/// Insert `rows` in order and return the id generated for each one.
///
/// `bind` executes the statement for a single row; it may also run reference
/// checks first and fail, which aborts the remaining rows.
pub(crate) fn insert_each<T, F>(
    conn: &Connection,
    sql: &str,
    rows: &[T],
    mut bind: F,
) -> DbResult<Vec<i64>>
where
    F: FnMut(&mut Statement<'_>, &T) -> DbResult<usize>,
{
    let mut stmt = conn.prepare_cached(sql)?;
    let mut ids = Vec::with_capacity(rows.len());
    for row in rows {
        bind(&mut *stmt, row)?;
        ids.push(conn.last_insert_rowid());
    }
    Ok(ids)
}
