//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attribute values are the same value. To "modify" one,
/// construct a new one.
///
/// Example: `Price` is a value object (two `$12.99` prices are equal);
/// a catalog entry is an entity (identified by its name, not its fields).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
