pub mod api;
pub mod lifecycle;
pub mod ui;

pub use lifecycle::{LifecycleError, OrderBackend, OrderLifecycle};
