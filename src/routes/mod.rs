use actix_web::web;

/// # API Status Endpoint
///
/// Reports API liveness and database connectivity as a single JSON document.
/// See [`status::configure_routes`] for the route wiring.
///
/// [`status::configure_routes`]: crate::routes::status::configure_routes
pub mod status;

/// # API Route Configuration
///
/// Mounts the API under the `/api/v1` base path.
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/v1/status - API status and database connectivity
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(status::configure_routes));
}
