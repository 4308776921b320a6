//! Common types and traits for all resources

pub mod field_spec;
pub mod labels;
pub mod lang;
pub mod resource;
pub mod resource_kind;
pub mod serde_helpers;

// Re-exports
pub use field_spec::{FieldKind, FieldSpec};
pub use lang::{Lang, Tr};
pub use resource::{HasParent, Resource, ResourceDef};
pub use resource_kind::ResourceKind;
