use actix_web::web;

use crate::handlers::forms;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/forms")
            .service(forms::validate_form)
            .service(forms::submit_form)
    );
}
