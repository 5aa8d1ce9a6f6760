//! Database operations for financial records.
//!
//! Each operation is a single SQL statement, so SQLite's per-statement
//! atomicity is the only consistency guarantee.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    record::{FinancialRecord, NewRecord, RecordId, RecordPatch, UserId},
};

/// Store a new record and return it with its generated ID.
pub fn create_record(
    new_record: NewRecord,
    connection: &Connection,
) -> Result<FinancialRecord, Error> {
    connection.execute(
        "INSERT INTO financial_record (user_id, amount, category, date, description)
        VALUES (?1, ?2, ?3, ?4, ?5);",
        (
            new_record.user_id.as_ref(),
            new_record.amount,
            &new_record.category,
            new_record.date,
            &new_record.description,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(FinancialRecord {
        id,
        user_id: new_record.user_id,
        amount: new_record.amount,
        category: new_record.category,
        date: new_record.date,
        description: new_record.description,
    })
}

/// Retrieve a single record by ID.
///
/// # Errors
/// Returns [Error::RecordNotFound] if no record has the ID `record_id`.
pub fn get_record(record_id: RecordId, connection: &Connection) -> Result<FinancialRecord, Error> {
    connection
        .prepare(
            "SELECT id, user_id, amount, category, date, description
            FROM financial_record WHERE id = :id;",
        )?
        .query_row(&[(":id", &record_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all of a user's records in the order they were created.
///
/// # Errors
/// Returns [Error::NoRecordsForUser] if the user does not have any records.
pub fn list_records_by_user(
    user_id: &UserId,
    connection: &Connection,
) -> Result<Vec<FinancialRecord>, Error> {
    let records = connection
        .prepare(
            "SELECT id, user_id, amount, category, date, description
            FROM financial_record WHERE user_id = :user_id ORDER BY id ASC;",
        )?
        .query_map(&[(":user_id", &user_id.as_ref())], map_row)?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect::<Result<Vec<_>, Error>>()?;

    if records.is_empty() {
        return Err(Error::NoRecordsForUser);
    }

    Ok(records)
}

/// Overlay the fields set in `patch` onto a record and return the updated record.
///
/// # Errors
/// Returns [Error::RecordNotFound] if no record has the ID `record_id`.
pub fn update_record(
    record_id: RecordId,
    patch: RecordPatch,
    connection: &Connection,
) -> Result<FinancialRecord, Error> {
    connection
        .prepare(
            "UPDATE financial_record SET
                amount = COALESCE(?1, amount),
                category = COALESCE(?2, category),
                date = COALESCE(?3, date),
                description = COALESCE(?4, description)
            WHERE id = ?5
            RETURNING id, user_id, amount, category, date, description;",
        )?
        .query_row(
            (
                patch.amount,
                patch.category,
                patch.date,
                patch.description,
                record_id,
            ),
            map_row,
        )
        .map_err(|error| error.into())
}

/// Delete a record by ID.
///
/// # Errors
/// Returns [Error::RecordNotFound] if no record has the ID `record_id`.
pub fn delete_record(record_id: RecordId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM financial_record WHERE id = ?1", [record_id])?;

    if rows_affected == 0 {
        return Err(Error::RecordNotFound);
    }

    Ok(())
}

/// Initialize the record table and indexes.
pub fn create_record_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS financial_record (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL CHECK (user_id <> ''),
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            description TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_financial_record_user_id ON financial_record(user_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<FinancialRecord, rusqlite::Error> {
    let raw_user_id: String = row.get(1)?;

    Ok(FinancialRecord {
        id: row.get(0)?,
        user_id: UserId::new_unchecked(&raw_user_id),
        amount: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        description: row.get(5)?,
    })
}
