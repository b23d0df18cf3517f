//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod attribute_binding;
pub mod attribute_definition;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use attribute_binding::{
    ApartmentParameterBinding, Binding, BindingSet, HouseAttributeBinding,
    ResolvedBinding, UNKNOWN_ATTRIBUTE_LABEL,
};
pub use attribute_definition::{AttributeDefinition, AttributeKind, Definition, DefinitionForm};
