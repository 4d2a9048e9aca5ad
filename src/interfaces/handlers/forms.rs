use actix_web::{post, web, HttpResponse, Responder};

use crate::domain::validation::validate;
use crate::entities::form::{FormRequest, ValidationReport};
use crate::errors::AppError;

/// Reports every failing field; always 200 so the form can render inline messages.
#[post("/validate")]
pub async fn validate_form(request: web::Json<FormRequest>) -> impl Responder {
    let FormRequest { values, mode } = request.into_inner();
    let report = ValidationReport::from(validate(&values, mode));
    HttpResponse::Ok().json(report)
}

/// Server-side guard run before values go to an identity provider.
#[post("/submit")]
pub async fn submit_form(request: web::Json<FormRequest>) -> Result<HttpResponse, AppError> {
    let FormRequest { values, mode } = request.into_inner();
    let errors = validate(&values, mode);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    tracing::info!(%mode, "Form accepted");
    Ok(HttpResponse::Ok().json(ValidationReport::from(errors)))
}
