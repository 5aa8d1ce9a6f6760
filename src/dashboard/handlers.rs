//! Route handlers for the dashboard page and its record form.
//!
//! Every mutation goes to the record store first. The handler then refreshes
//! a [RecordCache] and renders the dashboard content from it.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, HxRetarget, SwapOption};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    app_state::lock_connection,
    dashboard::{
        RecordCache, UserIdentity,
        form::RecordForm,
        view::{FormMode, dashboard_content, dashboard_view, record_form_view},
    },
    html::error_view,
    record::{
        FinancialRecord, RecordId, UserId, create_record, delete_record, get_record,
        parse_record_id, update_record,
    },
};

/// The state needed for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl DashboardState {
    fn connection(&self) -> MutexGuard<'_, Connection> {
        lock_connection(&self.db_connection)
    }
}

/// Display the signed in user's records, their total and the record form.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    identity: UserIdentity,
) -> Response {
    let cache = RecordCache::load(identity.user_id.clone(), &state.connection());

    match cache {
        Ok(cache) => dashboard_view(&identity, &cache).into_response(),
        Err(error) => {
            tracing::error!(
                "could not load the dashboard for user {}: {error}",
                identity.user_id
            );

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_view(
                    "Error",
                    "500",
                    "Could not load your records.",
                    "Try reloading the page, or check the server logs for more details.",
                ),
            )
                .into_response()
        }
    }
}

/// Create a record from the dashboard form and return the refreshed dashboard content.
pub async fn create_record_from_form(
    State(state): State<DashboardState>,
    identity: UserIdentity,
    Form(form): Form<RecordForm>,
) -> Response {
    let new_record = match form.to_new_record(identity.user_id.clone()) {
        Ok(new_record) => new_record,
        Err(error) => return invalid_form_response(FormMode::Create, &form, error),
    };

    let connection = state.connection();

    match create_record(new_record, &connection) {
        Ok(record) => {
            tracing::debug!("user {} created record {}", identity.user_id, record.id);
            dashboard_content_response(identity.user_id, &connection)
        }
        Err(error) => error.into_alert_response(),
    }
}

/// Render the record form pre-filled with an existing record.
pub async fn get_edit_record_form(
    Path(record_id): Path<String>,
    State(state): State<DashboardState>,
    identity: UserIdentity,
) -> Response {
    let connection = state.connection();

    let record = parse_record_id(&record_id)
        .and_then(|record_id| get_owned_record(record_id, &identity.user_id, &connection));

    match record {
        Ok(record) => record_form_view(
            FormMode::Edit(record.id),
            &RecordForm::from_record(&record),
            "",
        )
        .into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Replace the editable fields of a record with the form values and return
/// the refreshed dashboard content.
pub async fn update_record_from_form(
    Path(record_id): Path<String>,
    State(state): State<DashboardState>,
    identity: UserIdentity,
    Form(form): Form<RecordForm>,
) -> Response {
    let connection = state.connection();

    let record = match parse_record_id(&record_id)
        .and_then(|record_id| get_owned_record(record_id, &identity.user_id, &connection))
    {
        Ok(record) => record,
        Err(error) => return error.into_alert_response(),
    };

    let patch = match form.to_patch() {
        Ok(patch) => patch,
        Err(error) => return invalid_form_response(FormMode::Edit(record.id), &form, error),
    };

    match update_record(record.id, patch, &connection) {
        Ok(_) => dashboard_content_response(identity.user_id, &connection),
        Err(error) => error.into_alert_response(),
    }
}

/// Delete a record and return the refreshed dashboard content.
pub async fn delete_record_from_dashboard(
    Path(record_id): Path<String>,
    State(state): State<DashboardState>,
    identity: UserIdentity,
) -> Response {
    let connection = state.connection();

    let deleted = parse_record_id(&record_id)
        .and_then(|record_id| get_owned_record(record_id, &identity.user_id, &connection))
        .and_then(|record| delete_record(record.id, &connection));

    match deleted {
        Ok(()) => dashboard_content_response(identity.user_id, &connection),
        Err(error) => error.into_alert_response(),
    }
}

/// Get a record, treating another user's record as missing.
fn get_owned_record(
    record_id: RecordId,
    user_id: &UserId,
    connection: &Connection,
) -> Result<FinancialRecord, Error> {
    let record = get_record(record_id, connection)?;

    if &record.user_id != user_id {
        tracing::warn!("user {user_id} tried to access record {record_id} owned by another user");
        return Err(Error::RecordNotFound);
    }

    Ok(record)
}

fn dashboard_content_response(user_id: UserId, connection: &Connection) -> Response {
    match RecordCache::load(user_id, connection) {
        Ok(cache) => {
            let form = record_form_view(FormMode::Create, &RecordForm::default(), "");
            dashboard_content(&cache, &form).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// Show the form again with the error, in place of the current form.
fn invalid_form_response(mode: FormMode, form: &RecordForm, error: Error) -> Response {
    match error {
        Error::InvalidRecordForm(message) => (
            HxRetarget("#record-form".to_owned()),
            HxReswap(SwapOption::OuterHtml),
            record_form_view(mode, form, &message),
        )
            .into_response(),
        error => error.into_alert_response(),
    }
}
