use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::password::score;
use crate::entities::strength::{StrengthRequest, StrengthResponse};
use crate::errors::AppError;

#[post("/strength")]
pub async fn password_strength(
    request: web::Json<StrengthRequest>
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let response = StrengthResponse::from(score(&request.password));
    Ok(HttpResponse::Ok().json(response))
}
