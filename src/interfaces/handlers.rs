pub mod forms;
pub mod home;
pub mod json_error;
pub mod password;
pub mod system;
