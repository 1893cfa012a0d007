use std::sync::Arc;

use actix_web::{App, HttpServer, web::Data};
use forest_trekking_api::config::Config;
use forest_trekking_api::db::{ConnectionProvider, MongoConnectionProvider};
use forest_trekking_api::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Forest Trekking System API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Status endpoint reporting API liveness and database connectivity
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - MongoDB connection provider injected as shared application state
///
/// # Endpoints
/// - Status: `GET /api/v1/status`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default (`HOST` / `PORT`)
/// - Database URI from `MONGODB_URI`, database name from `MONGODB_DB`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "forest_trekking_api=info".to_string()),
        )
        .init();

    let config = Config::from_env();

    // One provider for the whole process; handlers receive it as a trait
    // object so tests can substitute a double.
    let provider: Arc<dyn ConnectionProvider> = Arc::new(MongoConnectionProvider::new(
        &config.mongodb_uri,
        &config.mongodb_db,
    ));

    tracing::info!("listening on http://{}", config.addr());

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::from(provider.clone()))
            .configure(forest_trekking_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
