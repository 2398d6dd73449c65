//! Sitemap of the API.

use axum::Json;
use serde::Serialize;

/// One entry of the sitemap.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

const fn endpoint(method: &'static str, path: &'static str) -> Endpoint {
    Endpoint { method, path }
}

/// Every route served by the router, in registration order.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/"),
    endpoint("GET", "/livez"),
    endpoint("GET", "/user"),
    endpoint("POST", "/user"),
    endpoint("GET", "/user/{id}"),
    endpoint("POST", "/user/{id}/favorites/planet"),
    endpoint("POST", "/user/{id}/favorites/character"),
    endpoint("GET", "/planets"),
    endpoint("POST", "/planets"),
    endpoint("GET", "/planets/{id}"),
    endpoint("GET", "/character"),
    endpoint("POST", "/character"),
    endpoint("GET", "/character/{id}"),
    endpoint("GET", "/favorites"),
    endpoint("GET", "/favorites/{id}"),
    endpoint("DELETE", "/favorites/user/{id}"),
    endpoint("DELETE", "/favorites/planet/{id}"),
    endpoint("DELETE", "/favorites/character/{id}"),
];

/// GET / - lists every endpoint.
pub async fn sitemap() -> Json<&'static [Endpoint]> {
    Json(ENDPOINTS)
}
