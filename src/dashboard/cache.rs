//! The dashboard's copy of the user's records.
//!
//! The cache is derived from the record store and is never written to
//! directly. Handlers mutate the store and then call [RecordCache::refresh].

use std::sync::OnceLock;

use rusqlite::Connection;

use crate::{
    Error,
    record::{FinancialRecord, UserId, list_records_by_user},
};

/// The records of a single user as last fetched from the store.
#[derive(Debug)]
pub struct RecordCache {
    user_id: UserId,
    records: Vec<FinancialRecord>,
    /// Memoized sum of `records`, reset whenever `records` is replaced.
    total: OnceLock<f64>,
}

impl RecordCache {
    /// Create an empty cache for `user_id`.
    ///
    /// Call [RecordCache::refresh] to fill it.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            records: Vec::new(),
            total: OnceLock::new(),
        }
    }

    /// Create a cache for `user_id` and fill it from the store.
    ///
    /// # Errors
    /// Returns an error if the records could not be fetched.
    pub fn load(user_id: UserId, connection: &Connection) -> Result<Self, Error> {
        let mut cache = Self::new(user_id);
        cache.refresh(connection)?;

        Ok(cache)
    }

    /// Re-fetch the user's records and invalidate the memoized total.
    ///
    /// A user without any records gets an empty cache.
    ///
    /// # Errors
    /// Returns an error if the records could not be fetched, in which case the
    /// cache is left as it was.
    pub fn refresh(&mut self, connection: &Connection) -> Result<(), Error> {
        let records = match list_records_by_user(&self.user_id, connection) {
            Ok(records) => records,
            Err(Error::NoRecordsForUser) => Vec::new(),
            Err(error) => return Err(error),
        };

        self.records = records;
        self.total = OnceLock::new();

        Ok(())
    }

    /// The cached records in the order they were created.
    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    /// The sum of the amounts of the cached records.
    ///
    /// Computed on first use after each refresh.
    pub fn total(&self) -> f64 {
        *self.total.get_or_init(|| total_amount(&self.records))
    }
}

/// Sum the amounts of `records`.
pub fn total_amount(records: &[FinancialRecord]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}

#[cfg(test)]
impl RecordCache {
    pub(crate) fn from_records(user_id: UserId, records: Vec<FinancialRecord>) -> Self {
        Self {
            user_id,
            records,
            total: OnceLock::new(),
        }
    }
}
