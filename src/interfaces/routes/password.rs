use actix_web::web;

use crate::handlers::password;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/password")
            .service(password::password_strength)
    );
}
