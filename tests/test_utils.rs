#![allow(dead_code)]

use actix_web::web;
use auth_forms::{
    entities::form::FormValues,
    settings::{AppConfig, AppEnvironment},
    AppState,
};

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Auth-Forms-Test".to_string(),
        worker_count: 1,
        ..AppConfig::default()
    }
}

pub fn app_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(&test_config()))
}

pub fn values(name: &str, email: &str, password: &str, confirm_password: &str) -> FormValues {
    FormValues {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    }
}

pub fn valid_sign_up() -> FormValues {
    values("Al", "a@b.com", "longenough1", "longenough1")
}

pub fn valid_sign_in() -> FormValues {
    values("", "test@example.com", "Secret123!", "")
}
