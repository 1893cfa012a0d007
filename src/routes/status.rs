use crate::db::ConnectionProvider;
use crate::models::StatusResponse;
use actix_web::{HttpResponse, Responder, web};

/// # API Status Endpoint
///
/// Reports API liveness and database connectivity as a single JSON document.
///
/// ## Behavior
///
/// The injected [`ConnectionProvider`] is asked for a connection handle once
/// per request:
///
/// - handle returned: success body with `database: "connected"`
/// - no handle, no failure: success body with `database: "disconnected"`
/// - acquisition failure: error body carrying the failure's description;
///   the failure stops here and is never propagated
///
/// Both branches respond `200 OK` with `Content-Type: application/json`.
/// The error branch deliberately keeps the 200 framing so that the outcome
/// is read from the `status` field of the body, not from the HTTP status.
/// Non-GET methods on this route receive `405 Method Not Allowed`.
///
/// ## Example Success Response
/// ```json
/// {
///   "status": "success",
///   "message": "Forest Trekking System API",
///   "database": "connected",
///   "timestamp": "2024-01-01 12:00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/status",
    responses(
        (status = 200, description = "API status and database connectivity", body = StatusResponse),
        (status = 405, description = "Method not allowed")
    ),
    tag = "Status"
)]
pub async fn status(provider: web::Data<dyn ConnectionProvider>) -> impl Responder {
    let body = match provider.get_connection().await {
        Ok(handle) => StatusResponse::success(handle.is_some()),
        Err(err) => {
            tracing::warn!(error = %err, "database connection acquisition failed");
            StatusResponse::error(err.to_string())
        }
    };

    HttpResponse::Ok().json(body)
}

/// Registers the status endpoint with the Actix-web service configuration.
///
/// The GET guard sits on the route rather than the resource, so other
/// methods on the path hit the resource's default handler and get a 405
/// instead of falling through to a 404.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(web::resource("/status").route(web::get().to(status)));
}
