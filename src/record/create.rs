//! Endpoint for creating a record.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::{
    Error,
    record::{FinancialRecord, body::parse_new_record, db::create_record, state::RecordApiState},
};

/// Store the record in the request body and respond with the stored record.
///
/// The body must be a JSON object with every record field except `_id`.
pub async fn create_record_endpoint(
    State(state): State<RecordApiState>,
    body: Bytes,
) -> Result<(StatusCode, Json<FinancialRecord>), Error> {
    let new_record = parse_new_record(&body)?;
    let connection = state.connection();

    let record = create_record(new_record, &connection)?;
    tracing::debug!("created record {} for user {}", record.id, record.user_id);

    Ok((StatusCode::CREATED, Json(record)))
}
