use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
///
/// Note: the search and distance routes must come before the `{id}` route
/// so they are not captured as identifiers.
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route(
            "/api/locations",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .route("/api/locations/search", get(handlers::search_location))
        .route(
            "/api/locations/distance",
            post(handlers::distance_between_locations),
        )
        .route(
            "/api/locations/{id}",
            put(handlers::update_location).delete(handlers::delete_location),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    // A pool that never connects; these tests only exercise the paths that
    // are rejected before any query is issued.
    fn test_server() -> TestServer {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/geomark_test")
            .expect("lazy pool");
        let service = Arc::new(LocationService::new(pool));
        TestServer::new(routes(service)).expect("test server")
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_latitude() {
        let server = test_server();

        let response = server
            .post("/api/locations")
            .json(&json!({
                "name": "north pole plus",
                "latitude": 95.0,
                "longitude": 0.0
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_non_numeric_latitude() {
        let server = test_server();

        let response = server
            .post("/api/locations")
            .json(&json!({
                "name": "madison",
                "latitude": "not-a-number",
                "longitude": -89.4
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_missing_required_fields() {
        let server = test_server();

        let response = server
            .post("/api/locations")
            .json(&json!({ "name": "madison" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let server = test_server();

        let response = server
            .post("/api/locations")
            .json(&json!({
                "name": "   ",
                "latitude": 43.0,
                "longitude": -89.4
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn distance_rejects_blank_names() {
        let server = test_server();

        let response = server
            .post("/api/locations/distance")
            .json(&json!({ "name1": "", "name2": "state capitol" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_rejects_out_of_range_longitude() {
        let server = test_server();

        let response = server
            .put("/api/locations/00000000-0000-0000-0000-000000000000")
            .json(&json!({ "longitude": 200.0 }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_requires_name_param() {
        let server = test_server();

        let response = server.get("/api/locations/search").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
