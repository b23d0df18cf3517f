pub mod api;
pub mod custom_order;
pub mod ui;
