//! Endpoint for deleting a record.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    record::{body::parse_record_id, db::delete_record, state::RecordApiState},
};

/// Delete a record, responding with an empty 204 on success.
pub async fn delete_record_endpoint(
    Path(record_id): Path<String>,
    State(state): State<RecordApiState>,
) -> Result<StatusCode, Error> {
    let record_id = parse_record_id(&record_id)?;
    let connection = state.connection();

    delete_record(record_id, &connection)?;
    tracing::debug!("deleted record {record_id}");

    Ok(StatusCode::NO_CONTENT)
}
