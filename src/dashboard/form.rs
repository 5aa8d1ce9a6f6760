//! The record form shown on the dashboard.

use serde::Deserialize;

use crate::{
    Error,
    record::{FinancialRecord, NewRecord, RecordPatch, UserId, parse_record_date},
};

/// The categories a user can choose from in the record form.
pub const CATEGORIES: [&str; 6] = ["Food", "Rent", "Salary", "Utilities", "Entertainment", "Other"];

/// The raw values of the record form.
///
/// Values are kept as submitted so that an invalid form can be shown back to
/// the user unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecordForm {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl RecordForm {
    /// Pre-fill the form with an existing record.
    pub fn from_record(record: &FinancialRecord) -> Self {
        Self {
            description: record.description.clone(),
            amount: record.amount.to_string(),
            category: record.category.clone(),
            date: record.date.date().to_string(),
        }
    }

    /// Convert the form into a new record owned by `user_id`.
    ///
    /// # Errors
    /// Returns an [Error::InvalidRecordForm] describing the first invalid field.
    pub fn to_new_record(&self, user_id: UserId) -> Result<NewRecord, Error> {
        let fields = self.parse()?;

        Ok(NewRecord {
            user_id,
            amount: fields.amount,
            category: fields.category,
            date: fields.date,
            description: fields.description,
        })
    }

    /// Convert the form into an update that replaces every editable field.
    ///
    /// # Errors
    /// Returns an [Error::InvalidRecordForm] describing the first invalid field.
    pub fn to_patch(&self) -> Result<RecordPatch, Error> {
        let fields = self.parse()?;

        Ok(RecordPatch {
            amount: Some(fields.amount),
            category: Some(fields.category),
            date: Some(fields.date),
            description: Some(fields.description),
        })
    }

    fn parse(&self) -> Result<ParsedFields, Error> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::InvalidRecordForm(
                "Description must not be empty.".to_owned(),
            ));
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| {
                Error::InvalidRecordForm(format!("{:?} is not a valid amount.", self.amount))
            })?;

        if !CATEGORIES.contains(&self.category.as_str()) {
            return Err(Error::InvalidRecordForm(format!(
                "{:?} is not a valid category.",
                self.category
            )));
        }

        let date = parse_record_date(self.date.trim()).map_err(|_| {
            Error::InvalidRecordForm(format!("{:?} is not a valid date.", self.date))
        })?;

        Ok(ParsedFields {
            description: description.to_owned(),
            amount,
            category: self.category.clone(),
            date,
        })
    }
}

struct ParsedFields {
    description: String,
    amount: f64,
    category: String,
    date: time::OffsetDateTime,
}
