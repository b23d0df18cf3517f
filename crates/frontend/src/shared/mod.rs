pub mod api_error;
pub mod binding_editor;
pub mod config;
pub mod number_format;
pub mod rest_client;
