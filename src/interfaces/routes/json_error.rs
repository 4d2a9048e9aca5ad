use actix_web::web;

use crate::handlers::json_error::JsonError;

const MAX_JSON_PAYLOAD: usize = 16 * 1024;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_JSON_PAYLOAD)
            .error_handler(|err, _req| JsonError::from(err).into())
    );
}
