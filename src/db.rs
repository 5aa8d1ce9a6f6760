//! Database set up for the application.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, record::create_record_table};

/// Create all the tables the application needs, if they do not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_record_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
