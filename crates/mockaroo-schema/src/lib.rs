//! Schema descriptor types for the Mockaroo generate API.
//!
//! This crate provides the types that describe a record shape to the
//! Mockaroo data generation service:
//!
//! - [`FieldDescriptor`] - One field's name and generation hints
//! - [`HintValue`] - A scalar or ordered-list hint value
//! - [`RecordSchema`] - Trait a record shape implements to declare its fields
//!
//! # Declaring a schema
//!
//! A record shape declares its fields explicitly, in declaration order,
//! via [`RecordSchema`]:
//!
//! ```rust
//! use mockaroo_schema::{describe_fields, FieldDescriptor, RecordSchema};
//!
//! struct Person {
//!     first_name: String,
//!     age: u8,
//! }
//!
//! impl RecordSchema for Person {
//!     fn fields() -> Vec<FieldDescriptor> {
//!         vec![
//!             FieldDescriptor::new("first_name").data_type("First Name"),
//!             FieldDescriptor::new("age").data_type("Number").min(18).max(80),
//!         ]
//!     }
//! }
//!
//! let descriptors = describe_fields::<Person>();
//! assert_eq!(descriptors.len(), 2);
//! assert_eq!(descriptors[0].name, "first_name");
//! ```

mod descriptor;

pub use descriptor::{FieldDescriptor, HintValue};

/// A record shape whose fields can be described to the generation service.
///
/// Implementations list every field in declaration order. Fields without
/// hints may be listed for completeness; [`describe_fields`] drops them
/// before anything reaches the wire.
pub trait RecordSchema {
    /// The shape's fields, in declaration order.
    fn fields() -> Vec<FieldDescriptor>;
}

/// Derive the wire schema for a record shape.
///
/// Returns `T`'s field descriptors in declaration order, omitting fields
/// that carry no hints. A shape with no hint-bearing fields yields an
/// empty sequence, which is a valid (if degenerate) schema.
pub fn describe_fields<T: RecordSchema>() -> Vec<FieldDescriptor> {
    T::fields()
        .into_iter()
        .filter(FieldDescriptor::has_hints)
        .collect()
}
