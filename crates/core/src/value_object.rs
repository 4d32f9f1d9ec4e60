//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A resolved height (`name`, `number`) is a value object,
//! a door record with its own id is an entity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Dimension {
///     name: String,
///     number: u32,
/// }
///
/// impl ValueObject for Dimension {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
