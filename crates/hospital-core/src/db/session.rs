//! Per-request database sessions.

use std::path::{Path, PathBuf};

use super::{Database, DbResult};

/// Hands out independent [`Database`] sessions for one database file.
///
/// The schema is applied once in [`SessionProvider::open`]; each
/// [`SessionProvider::acquire`] opens a fresh connection that the caller owns
/// exclusively until it is dropped.
#[derive(Debug, Clone)]
pub struct SessionProvider {
    path: PathBuf,
}

impl SessionProvider {
    /// Create the database file and schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        Database::open(&path)?;
        tracing::info!(path = %path.display(), "database ready");
        Ok(Self { path })
    }

    /// Open a new session.
    pub fn acquire(&self) -> DbResult<Database> {
        Database::connect(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
