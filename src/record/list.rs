//! Endpoint for listing a user's records.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    record::{FinancialRecord, UserId, db::list_records_by_user, state::RecordApiState},
};

/// Get all the records owned by `user_id` in the order they were created.
///
/// Responds with 404 if the user has no records.
pub async fn get_records_by_user_endpoint(
    Path(user_id): Path<String>,
    State(state): State<RecordApiState>,
) -> Result<Json<Vec<FinancialRecord>>, Error> {
    let user_id = UserId::new(&user_id).map_err(|_| Error::NoRecordsForUser)?;
    let connection = state.connection();

    let records = list_records_by_user(&user_id, &connection)?;
    tracing::debug!("found {} records for user {user_id}", records.len());

    Ok(Json(records))
}

#[cfg(test)]
mod get_records_by_user_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use time::macros::datetime;

    use crate::record::{
        FinancialRecord, NewRecord, UserId, create_record, get_records_by_user_endpoint,
        state::get_test_state,
    };

    fn new_record(user_id: &str, amount: f64) -> NewRecord {
        NewRecord {
            user_id: UserId::new_unchecked(user_id),
            amount,
            category: "Food".to_owned(),
            date: datetime!(2024-01-01 0:00 UTC),
            description: "lunch".to_owned(),
        }
    }

    #[tokio::test]
    async fn returns_users_records() {
        let state = get_test_state();
        let want = {
            let connection = state.db_connection.lock().unwrap();
            create_record(new_record("u2", 5.0), &connection).unwrap();
            vec![
                create_record(new_record("u1", 100.0), &connection).unwrap(),
                create_record(new_record("u1", -50.0), &connection).unwrap(),
            ]
        };

        let response = get_records_by_user_endpoint(Path("u1".to_owned()), State(state))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let got: Vec<FinancialRecord> = serde_json::from_slice(&body).unwrap();
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn user_without_records_is_not_found() {
        let state = get_test_state();

        let response = get_records_by_user_endpoint(Path("nobody".to_owned()), State(state))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
