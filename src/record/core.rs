//! Core financial record domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, record::date};

/// Database identifier for a financial record.
pub type RecordId = i64;

/// The identifier the identity provider assigns to a user.
///
/// The server does not verify this identifier, it only uses it to scope
/// records to their owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a user ID.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::Validation] if `id` is an empty string.
    pub fn new(id: &str) -> Result<Self, Error> {
        Self::try_from(id.to_owned()).map_err(Error::Validation)
    }

    /// Create a user ID without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl TryFrom<String> for UserId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err("`userId` must not be empty".to_owned())
        } else {
            Ok(Self(value))
        }
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expense or income owned by a single user.
///
/// Positive amounts are income, negative amounts are expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// The ID of the record, assigned by the database on creation.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// The user that owns the record.
    pub user_id: UserId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// What kind of spending or earning this is, e.g. "Food" or "Salary".
    pub category: String,
    /// When the money was spent or earned.
    #[serde(with = "date")]
    pub date: OffsetDateTime,
    /// A text description of what the record is for.
    pub description: String,
}

/// The fields of a record that is yet to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    /// The user that owns the record.
    pub user_id: UserId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// What kind of spending or earning this is.
    pub category: String,
    /// When the money was spent or earned.
    #[serde(with = "date")]
    pub date: OffsetDateTime,
    /// A text description of what the record is for.
    pub description: String,
}

impl NewRecord {
    /// Check the invariants that the type system does not.
    ///
    /// # Errors
    ///
    /// Returns an [Error::Validation] if the amount is not finite or if the
    /// category or description are empty.
    pub fn validate(self) -> Result<Self, Error> {
        if !self.amount.is_finite() {
            return Err(Error::Validation(format!(
                "`amount` must be a finite number, got {}",
                self.amount
            )));
        }

        if self.category.is_empty() {
            return Err(Error::Validation("`category` must not be empty".to_owned()));
        }

        if self.description.is_empty() {
            return Err(Error::Validation(
                "`description` must not be empty".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// A partial update for a record.
///
/// Fields set to `None` are left unchanged. The record ID and owner cannot be
/// changed, so they have no counterpart here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    /// The new amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// The new category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The new date.
    #[serde(default, with = "date::option", skip_serializing_if = "Option::is_none")]
    pub date: Option<OffsetDateTime>,
    /// The new description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecordPatch {
    /// Check that the patch would keep the amount a finite number.
    ///
    /// # Errors
    ///
    /// Returns an [Error::MalformedBody] if the amount is not finite.
    pub fn validate(self) -> Result<Self, Error> {
        match self.amount {
            Some(amount) if !amount.is_finite() => Err(Error::MalformedBody(format!(
                "`amount` must be a finite number, got {amount}"
            ))),
            _ => Ok(self),
        }
    }
}
