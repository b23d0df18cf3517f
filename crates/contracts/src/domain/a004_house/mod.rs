pub mod aggregate;
pub mod custom_order;
pub mod pricing;
