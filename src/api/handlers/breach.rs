// src/api/handlers/breach.rs

use actix_web::{web, HttpResponse};
use crate::api::AppState;
use crate::api::types::{BreachCheckRequest, BreachCheckResponse};
use crate::crypto;

/// Check a password against known breaches
///
/// Hashes the password with SHA-1 and queries the breach range for its
/// 5-character prefix. The plaintext and full hash never leave the server.
#[utoipa::path(
    post,
    path = "/breach/check",
    tag = "Breach",
    request_body = BreachCheckRequest,
    responses(
        (status = 200, description = "Breach verdict", body = BreachCheckResponse),
        (status = 400, description = "Empty password", body = BreachCheckResponse)
    )
)]
pub async fn check_password(
    state: web::Data<AppState>,
    check_req: web::Json<BreachCheckRequest>,
) -> HttpResponse {
    if check_req.password.is_empty() {
        return HttpResponse::BadRequest().json(BreachCheckResponse {
            success: false,
            breach: None,
            strength: None,
            feedback: vec![],
            error: Some("Password must not be empty".to_string()),
        });
    }

    let status = state.checker.check(&check_req.password).await;

    HttpResponse::Ok().json(BreachCheckResponse {
        success: true,
        breach: Some(status.into()),
        strength: Some(crypto::analyze_password_strength(&check_req.password)),
        feedback: crypto::strength_feedback(&check_req.password),
        error: None,
    })
}
