use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros.
///
/// # Endpoints
/// - API Status: `GET /api/v1/status`
///
/// # Schemas
/// - `StatusResponse`: Tagged success/error status payload
/// - `DatabaseStatus`: Database connectivity value
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::status::status,
    ),
    components(
        schemas(
            crate::models::status::StatusResponse,
            crate::models::status::DatabaseStatus
        )
    ),
    tags(
        (name = "Status", description = "API status and database connectivity probe")
    ),
    info(
        description = "Status endpoint reporting API liveness and database connectivity",
        title = "Forest Trekking System API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
