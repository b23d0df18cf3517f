pub mod custom_order;
pub mod details;
pub mod list;
