//! # Field Storage
//!
//! The capability a concrete configuration record supplies to the engine:
//! resolving a parameter index to the byte slot backing that field.

/// Index-to-slot resolution for a concrete configuration record.
///
/// The contract mirrors the schema exactly: for every index `i` in
/// `0..schema.count()`, the returned slice length equals `schema.size(i)`.
/// Resolution cannot fail at runtime — an out-of-range index means the
/// record and its schema disagree, which is a programmer error;
/// implementations use `unreachable!` for the fallthrough arm.
///
/// Owners read and write typed fields directly through their record between
/// document operations; the engine only ever touches fields through this
/// trait, in schema order.
pub trait FieldStorage {
    /// Immutable view of the slot backing parameter `index`.
    fn field(&self, index: usize) -> &[u8];

    /// Mutable view of the slot backing parameter `index`.
    fn field_mut(&mut self, index: usize) -> &mut [u8];
}
