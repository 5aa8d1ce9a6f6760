//! Endpoint for updating a record.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

use crate::{
    Error,
    record::{
        FinancialRecord,
        body::{parse_record_id, parse_record_patch},
        db::update_record,
        state::RecordApiState,
    },
};

/// Overlay the fields in the request body onto a record and respond with the updated record.
///
/// Fields missing from the body are left unchanged. An empty body is rejected
/// before the record is looked up.
pub async fn update_record_endpoint(
    Path(record_id): Path<String>,
    State(state): State<RecordApiState>,
    body: Bytes,
) -> Result<Json<FinancialRecord>, Error> {
    let patch = parse_record_patch(&body)?;
    let record_id = parse_record_id(&record_id)?;
    let connection = state.connection();

    let record = update_record(record_id, patch, &connection)?;
    tracing::debug!("updated record {record_id}");

    Ok(Json(record))
}

#[cfg(test)]
mod update_record_endpoint_tests {
    use axum::{
        body::Bytes,
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use time::macros::datetime;

    use crate::record::{
        FinancialRecord, NewRecord, UserId, create_record, get_record, state::get_test_state,
        update_record_endpoint,
    };

    fn insert_test_record(state: &super::RecordApiState) -> FinancialRecord {
        create_record(
            NewRecord {
                user_id: UserId::new_unchecked("u1"),
                amount: 100.0,
                category: "food".to_owned(),
                date: datetime!(2024-01-01 0:00 UTC),
                description: "lunch".to_owned(),
            },
            &state.db_connection.lock().unwrap(),
        )
        .expect("Could not create test record")
    }

    #[tokio::test]
    async fn can_update_record() {
        let state = get_test_state();
        let record = insert_test_record(&state);

        let response = update_record_endpoint(
            Path(record.id.to_string()),
            State(state.clone()),
            Bytes::from_static(br#"{"amount": 150}"#),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let got: FinancialRecord = serde_json::from_slice(&body).unwrap();
        let want = FinancialRecord {
            amount: 150.0,
            ..record
        };
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn empty_body_is_bad_request_and_leaves_record_unchanged() {
        let state = get_test_state();
        let record = insert_test_record(&state);

        let response = update_record_endpoint(
            Path(record.id.to_string()),
            State(state.clone()),
            Bytes::from_static(b"{}"),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_record(record.id, &state.db_connection.lock().unwrap()),
            Ok(record)
        );
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let state = get_test_state();

        let response = update_record_endpoint(
            Path("999999".to_owned()),
            State(state),
            Bytes::from_static(br#"{"amount": 150}"#),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let state = get_test_state();

        let response = update_record_endpoint(
            Path("not-an-id".to_owned()),
            State(state),
            Bytes::from_static(br#"{"amount": 150}"#),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_body_takes_precedence_over_unknown_id() {
        let state = get_test_state();

        let response =
            update_record_endpoint(Path("999999".to_owned()), State(state), Bytes::new())
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
