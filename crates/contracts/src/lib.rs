//! Shared domain contracts: aggregates, DTOs and the pure business rules
//! (order workflow, attribute bindings, pricing, card checks).

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
