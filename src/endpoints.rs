//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/financial-records/{record_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page for signed in users.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The route the dashboard form posts new records to.
pub const DASHBOARD_RECORDS: &str = "/dashboard/records";
/// The route the dashboard uses to update or delete a record.
pub const DASHBOARD_RECORD: &str = "/dashboard/records/{record_id}";
/// The route for the form for editing a record on the dashboard.
pub const DASHBOARD_EDIT_RECORD: &str = "/dashboard/records/{record_id}/edit";

/// The mount point of the financial records API, also the route for creating a record.
pub const RECORDS_API: &str = "/financial-records";
/// The record creation route with a trailing slash, which is accepted as well.
pub const RECORDS_API_TRAILING_SLASH: &str = "/financial-records/";
/// The route to get all the records owned by a user.
pub const RECORDS_BY_USER: &str = "/financial-records/getAllByUserID/{user_id}";
/// The route to update or delete a single record.
pub const RECORD: &str = "/financial-records/{record_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/records/{record_id}', '{record_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_RECORDS);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_RECORD);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_EDIT_RECORD);

        assert_endpoint_is_valid_uri(endpoints::RECORDS_API);
        assert_endpoint_is_valid_uri(endpoints::RECORDS_API_TRAILING_SLASH);
        assert_endpoint_is_valid_uri(endpoints::RECORDS_BY_USER);
        assert_endpoint_is_valid_uri(endpoints::RECORD);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn replaces_parameter_in_middle_of_path() {
        let formatted_path = format_endpoint(endpoints::DASHBOARD_EDIT_RECORD, 42);

        assert_eq!(formatted_path, "/dashboard/records/42/edit");
    }

    #[test]
    fn replaces_parameter_with_string_id() {
        let formatted_path = format_endpoint(endpoints::RECORDS_BY_USER, "user_2abc");

        assert_eq!(formatted_path, "/financial-records/getAllByUserID/user_2abc");
    }

    #[test]
    fn returns_path_unchanged_without_parameter() {
        let formatted_path = format_endpoint(endpoints::DASHBOARD_VIEW, 1);

        assert_eq!(formatted_path, endpoints::DASHBOARD_VIEW);
    }
}
