mod domain;
mod interfaces;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, password, use_cases, validation};
pub use interfaces::{gateway, handlers, routes};

pub use domain::password::score;
pub use domain::validation::validate;

use settings::AppConfig;

pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        AppState {
            config: config.clone(),
        }
    }
}
