// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::breach::BreachChecker;
use crate::generators::Sampling;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub checker: BreachChecker,
    pub default_length: usize,
    pub sampling: Sampling,
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // Breach endpoints
        crate::api::handlers::breach::check_password,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::SuccessResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::BreachCheckRequest,
            crate::api::types::BreachCheckResponse,
            crate::api::types::BreachReport,
            crate::models::BreachVerdict
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Breach", description = "k-anonymity breach lookup endpoints"),
        (name = "System", description = "Service health")
    ),
    info(
        title = "PassCheck API",
        version = "0.1.0",
        description = "Password generator and k-anonymity breach checker API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: AppState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting PassCheck API server on {}:{}", address, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/generator/password"));
        assert!(paths.iter().any(|p| p.as_str() == "/breach/check"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
