//! The state shared by the record API handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{AppState, app_state::lock_connection};

/// The state needed by the record API endpoints.
#[derive(Debug, Clone)]
pub struct RecordApiState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RecordApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl RecordApiState {
    /// Acquire the database connection.
    pub fn connection(&self) -> MutexGuard<'_, Connection> {
        lock_connection(&self.db_connection)
    }
}

#[cfg(test)]
pub(super) fn get_test_state() -> RecordApiState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    crate::record::create_record_table(&connection).expect("Could not create record table");

    RecordApiState {
        db_connection: Arc::new(Mutex::new(connection)),
    }
}
