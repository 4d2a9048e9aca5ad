use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome to {}!", state.config.name),
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /api/v1/forms/validate",
            "POST /api/v1/forms/submit",
            "POST /api/v1/password/strength"
        ]
    }))
}
