//! Finance Tracker is a web app for keeping track of a user's income and expenses.
//!
//! This library provides a JSON REST API over the stored financial records, plus
//! a dashboard that serves HTML pages for viewing and editing those records.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod db;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod record;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use record::{FinancialRecord, NewRecord, RecordId, RecordPatch, UserId, create_record};
pub use routing::build_router;

use crate::alert::ErrorAlert;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user has no financial records.
    #[error("No records found for the user.")]
    NoRecordsForUser,

    /// No record has the requested ID.
    ///
    /// Internally, this error may also occur when a query returns no rows.
    #[error("Record not found.")]
    RecordNotFound,

    /// An update request did not carry any fields.
    #[error("Request body is empty.")]
    EmptyUpdateBody,

    /// An update request body was not a JSON object of record fields.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A new record was rejected because it did not have the shape of a record,
    /// e.g. a required field was missing or had the wrong type.
    #[error("record validation failed: {0}")]
    Validation(String),

    /// The request did not carry the identity of the signed in user.
    ///
    /// The identity is injected by the identity provider in front of the
    /// server, so this usually means the request bypassed it.
    #[error("the request does not identify a user")]
    MissingIdentity,

    /// The dashboard record form had an invalid value.
    #[error("{0}")]
    InvalidRecordForm(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::RecordNotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent to the client for an error.
///
/// Client errors carry a human readable `message`, server errors carry the
/// raw `error` message.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum ErrorBody {
    Message { message: String },
    Error { error: String },
}

impl Error {
    /// The HTTP status code for each kind of error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NoRecordsForUser => StatusCode::NOT_FOUND,
            Error::RecordNotFound => StatusCode::NOT_FOUND,
            Error::EmptyUpdateBody => StatusCode::BAD_REQUEST,
            Error::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Error::InvalidRecordForm(_) => StatusCode::BAD_REQUEST,
            Error::MissingIdentity => StatusCode::UNAUTHORIZED,
            Error::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::SqlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        if self.status_code().is_server_error() {
            ErrorBody::Error {
                error: self.to_string(),
            }
        } else {
            ErrorBody::Message {
                message: self.to_string(),
            }
        }
    }

    /// Render the error as an HTML alert fragment for HTMX requests.
    fn into_alert_response(self) -> Response {
        let status_code = self.status_code();

        let alert = match &self {
            Error::RecordNotFound => ErrorAlert::new(
                "Could not find record",
                "The record could not be found. \
                Try refreshing the page to see if the record has already been deleted.",
            ),
            Error::MissingIdentity => ErrorAlert::new(
                "Not signed in",
                "Sign in again and reload the page.",
            ),
            Error::InvalidRecordForm(message) => ErrorAlert::new("Invalid record", message),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorAlert::new(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (status_code, Json(self.body())).into_response()
    }
}
