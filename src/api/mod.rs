use actix_web::{HttpResponse, Responder};
use shared::api::activity::ErrorResponse;

pub mod activities;

/// Fallback for every unmatched route.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::new("Not Found"))
}
