/// # Status Response Model
///
/// The single data transfer object this service produces, describing the
/// outcome of a status request as a tagged success/error value.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "success",
///   "message": "Forest Trekking System API",
///   "database": "connected",
///   "timestamp": "2024-01-01 12:00:00"
/// }
/// ```
pub mod status;

pub use status::{DatabaseStatus, StatusResponse};
