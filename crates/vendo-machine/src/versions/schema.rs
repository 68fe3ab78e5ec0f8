//! # Storage Layout Descriptors
//!
//! Each logic version declares the ordered field layout it expects of the
//! state record. The upgrade controller checks, at upgrade time, that the
//! target version's layout is an append-only extension of the active one:
//! same fields, same order, same types, new fields only at the end. This
//! catches layout-incompatible migrations before they can reinterpret
//! stored state.

use std::fmt;

/// The storage type of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned 64-bit counter (inventory, threshold).
    U64,
    /// 256-bit wei amount (price, profit).
    U256,
    /// 20-byte account identity.
    Account,
    /// Seconds-since-epoch timestamp.
    Timestamp,
}

/// One field in a version's declared storage layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, as stored.
    pub name: &'static str,
    /// Field storage type.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.name, self.kind)
    }
}

/// Returns true if `new` extends `old` append-only: `old` must be a prefix
/// of `new`, matched field-for-field by name and type.
///
/// A shrinking layout (downgrade) fails this check, as does any rename,
/// reorder, or retype of an existing field.
#[must_use]
pub fn is_append_only_extension(old: &[FieldDescriptor], new: &[FieldDescriptor]) -> bool {
    new.len() >= old.len() && old.iter().zip(new.iter()).all(|(a, b)| a == b)
}

// =============================================================================
// TESTS
// =============================================================================
