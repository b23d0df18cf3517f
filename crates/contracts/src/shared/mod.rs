pub mod amount;
pub mod validation;
