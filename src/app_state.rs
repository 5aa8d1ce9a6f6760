//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}

/// Lock the shared database connection.
///
/// A handler that panics while holding the lock poisons the mutex. The
/// connection itself is still usable, since every write is a single SQL
/// statement, so the guard is recovered instead of failing every later request.
pub(crate) fn lock_connection(
    db_connection: &Mutex<Connection>,
) -> MutexGuard<'_, Connection> {
    db_connection.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("recovering the database connection from a poisoned lock");
        db_connection.clear_poison();
        poisoned.into_inner()
    })
}
