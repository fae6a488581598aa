// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use crate::api::AppState;
use crate::api::types::{BreachReport, PasswordGenerationRequest, PasswordGenerationResponse};
use crate::crypto;
use crate::generators::PasswordGenerator;
use crate::models::CharsetConfig;

/// Generate a secure password
///
/// Generates a password from the selected character classes and, unless
/// disabled, checks it against known breaches.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid generation options", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let length = generation_req.length.unwrap_or(state.default_length);
    let charset = CharsetConfig {
        uppercase: generation_req.include_uppercase.unwrap_or(true),
        lowercase: generation_req.include_lowercase.unwrap_or(true),
        numbers: generation_req.include_numbers.unwrap_or(true),
        symbols: generation_req.include_symbols.unwrap_or(true),
    };

    let generator = PasswordGenerator::with_sampling(state.sampling);

    let password = match generator.generate_password(length, &charset) {
        Ok(pwd) => pwd,
        Err(e) => {
            log::info!("Rejected generation request: {}", e);
            return HttpResponse::BadRequest().json(PasswordGenerationResponse {
                success: false,
                password: None,
                strength: None,
                breach: None,
                error: Some(e.to_string()),
            });
        }
    };

    let strength = crypto::analyze_password_strength(&password);

    let breach: Option<BreachReport> = if generation_req.check_breach.unwrap_or(true) {
        Some(state.checker.check(&password).await.into())
    } else {
        None
    };

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        breach,
        error: None,
    })
}
