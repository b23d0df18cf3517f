pub mod aggregate;
pub mod error;
pub mod filter;
pub mod lifecycle;
pub mod payment;
