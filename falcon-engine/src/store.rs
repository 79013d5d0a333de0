//! Route providers backing the galaxy map
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::galaxy::Route;

/// Error raised when a route source cannot be read.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("route database {path} unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        source: rusqlite::Error,
    },
}

/// Abstraction over the storage that records routes between planets.
///
/// Concrete providers supply the rows; symmetry and validation happen when
/// the `Galaxy` is built from them.
pub trait RouteSource {
    /// Load every recorded route.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Unavailable` when the underlying source cannot be
    /// read.
    fn load_routes(&self) -> Result<Vec<Route>, DataError>;
}

/// Routes stored in the `routes` table of a SQLite database file.
#[derive(Debug, Clone)]
pub struct SqliteRoutes {
    path: PathBuf,
}

impl SqliteRoutes {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: rusqlite::Error) -> DataError {
        DataError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl RouteSource for SqliteRoutes {
    fn load_routes(&self) -> Result<Vec<Route>, DataError> {
        // Read-only open so a missing file reports as unavailable instead of
        // being created empty.
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|err| self.unavailable(err))?;
        let mut statement = conn
            .prepare("SELECT origin, destination, travel_time FROM routes")
            .map_err(|err| self.unavailable(err))?;
        let rows = statement
            .query_map([], |row| {
                Ok(Route {
                    origin: row.get(0)?,
                    destination: row.get(1)?,
                    travel_time: row.get(2)?,
                })
            })
            .map_err(|err| self.unavailable(err))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|err| self.unavailable(err))
    }
}

/// In-memory route source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoutes {
    routes: Vec<Route>,
}

impl MemoryRoutes {
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }
}

impl RouteSource for MemoryRoutes {
    fn load_routes(&self) -> Result<Vec<Route>, DataError> {
        Ok(self.routes.clone())
    }
}
