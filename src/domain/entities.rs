pub mod auth_outcome;
pub mod form;
pub mod strength;
