//! Application router configuration for the record API and the dashboard.

use std::any::Any;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::{
    AppState,
    dashboard::{
        create_record_from_form, delete_record_from_dashboard, get_dashboard_page,
        get_edit_record_form, update_record_from_form,
    },
    endpoints,
    not_found::get_404_not_found,
    record::{
        create_record_endpoint, delete_record_endpoint, get_records_by_user_endpoint,
        update_record_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    with_error_boundary(app_routes(), state)
}

fn app_routes() -> Router<AppState> {
    let api_routes = Router::new()
        .route(
            endpoints::RECORDS_BY_USER,
            get(get_records_by_user_endpoint),
        )
        .route(endpoints::RECORDS_API, post(create_record_endpoint))
        .route(
            endpoints::RECORDS_API_TRAILING_SLASH,
            post(create_record_endpoint),
        )
        .route(
            endpoints::RECORD,
            put(update_record_endpoint).delete(delete_record_endpoint),
        );

    let dashboard_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_RECORDS, post(create_record_from_form))
        .route(endpoints::DASHBOARD_EDIT_RECORD, get(get_edit_record_form))
        .route(
            endpoints::DASHBOARD_RECORD,
            put(update_record_from_form).delete(delete_record_from_dashboard),
        );

    api_routes.merge(dashboard_routes)
}

/// Add the 404 fallback and turn handler panics into 500 responses.
fn with_error_boundary(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .fallback(get_404_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

/// Report a panic in a request handler as a 500 error carrying the panic message.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "an unknown error occurred".to_owned()
    };

    tracing::error!("A request handler panicked: {message}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}


#[cfg(test)]
mod router_tests {
    use axum::{extract::State, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, FinancialRecord,
        app_state::lock_connection,
        routing::{app_routes, build_router, with_error_boundary},
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn panic_while_holding_connection(State(state): State<AppState>) -> StatusCode {
        let _connection = lock_connection(&state.db_connection);
        panic!("storage exploded");
    }

    fn new_record_body(user_id: &str, amount: f64) -> Value {
        json!({
            "userId": user_id,
            "amount": amount,
            "category": "food",
            "date": "2024-01-01",
            "description": "lunch",
        })
    }

    #[tokio::test]
    async fn record_lifecycle() {
        let server = get_test_server();

        let response = server
            .post("/financial-records")
            .json(&new_record_body("u1", 100.0))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created = response.json::<FinancialRecord>();
        assert_eq!(created.amount, 100.0);
        assert_eq!(created.category, "food");

        let response = server.get("/financial-records/getAllByUserID/u1").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Vec<FinancialRecord>>(), vec![created.clone()]);

        let response = server
            .put(&format!("/financial-records/{}", created.id))
            .json(&json!({ "amount": 150 }))
            .await;
        response.assert_status_ok();
        let updated = response.json::<FinancialRecord>();
        assert_eq!(updated.amount, 150.0);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.id, created.id);

        server
            .delete(&format!("/financial-records/{}", created.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.get("/financial-records/getAllByUserID/u1").await;
        response.assert_status_not_found();
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "No records found for the user." })
        );
    }

    #[tokio::test]
    async fn create_accepts_trailing_slash() {
        let server = get_test_server();

        server
            .post("/financial-records/")
            .json(&new_record_body("u1", 1.0))
            .await
            .assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_with_missing_field_is_server_error() {
        let server = get_test_server();

        let response = server
            .post("/financial-records")
            .json(&json!({ "userId": "u1", "amount": 1 }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert!(body.get("error").is_some(), "want an error field, got {body}");
    }

    #[tokio::test]
    async fn update_with_empty_object_is_bad_request() {
        let server = get_test_server();
        let created = server
            .post("/financial-records")
            .json(&new_record_body("u1", 1.0))
            .await
            .json::<FinancialRecord>();

        let response = server
            .put(&format!("/financial-records/{}", created.id))
            .json(&json!({}))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Request body is empty." })
        );
    }

    #[tokio::test]
    async fn update_unknown_record_is_not_found() {
        let server = get_test_server();

        let response = server
            .put("/financial-records/424242")
            .json(&json!({ "amount": 1 }))
            .await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Record not found." })
        );
    }

    #[tokio::test]
    async fn delete_unknown_record_is_not_found() {
        let server = get_test_server();

        server
            .delete("/financial-records/424242")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn dashboard_reads_records_created_through_api() {
        let server = get_test_server();
        for amount in [100.0, -50.0, 25.0] {
            server
                .post("/financial-records")
                .json(&new_record_body("u1", amount))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .get("/dashboard")
            .add_header("x-user-id", "u1")
            .add_header("x-user-first-name", "Ada")
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains("Welcome Ada! Here Are Your Finances:"));
        assert!(text.contains("Total Monthly: $75"));
    }

    #[tokio::test]
    async fn dashboard_without_identity_is_unauthorized() {
        let server = get_test_server();

        server
            .get("/dashboard")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server.get("/nothing-here").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn panicking_handler_does_not_break_later_requests() {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");
        let routes = app_routes().route("/explode", get(panic_while_holding_connection));
        let server = TestServer::try_new(with_error_boundary(routes, state))
            .expect("Could not create test server.");

        let response = server.get("/explode").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "storage exploded" })
        );

        server
            .post("/financial-records")
            .json(&new_record_body("u1", 10.0))
            .await
            .assert_status(StatusCode::CREATED);
        let response = server.get("/financial-records/getAllByUserID/u1").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Vec<FinancialRecord>>().len(), 1);
    }
}
