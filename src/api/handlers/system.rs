// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};
use crate::api::types::SuccessResponse;

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = SuccessResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(SuccessResponse {
        success: true,
        message: Some(format!("rust_passcheck {} is running", env!("CARGO_PKG_VERSION"))),
        error: None,
    })
}
