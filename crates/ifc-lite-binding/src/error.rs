// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for typed writes
//!
//! Reads never fail: an unset attribute, a select holding another type or an
//! undecodable aggregate element all come back as `None` or are skipped.
//! Errors are reserved for writes the caller should not have attempted.

use ifc_lite_sdai::{StoreError, StoreKind};
use thiserror::Error;

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;

/// Errors reported by the `put_*` family
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    /// Writing through an entity view whose handle is null
    #[error("Cannot write attribute {attribute} through a null {entity}")]
    NullEntity {
        entity: &'static str,
        attribute: String,
    },

    /// A null entity was supplied where a reference is required
    #[error("Null reference supplied for {0}")]
    NullValue(String),

    /// Entity reference does not satisfy the declared domain
    #[error("Expected an instance of {expected}, got {actual}")]
    KindMismatch { expected: String, actual: String },

    /// Native value cannot be carried by the requested store kind
    #[error("{0} cannot carry the supplied value")]
    IncompatibleKind(StoreKind),

    /// Dynamic element does not fit the declared element kind
    #[error("Element does not match declared kind {0}")]
    ElementMismatch(String),

    /// Enumerator index outside its name table
    #[error("Index {index} out of range for enumeration {table}")]
    EnumIndexOutOfRange { table: &'static str, index: usize },

    /// Type name is not a candidate of the select
    #[error("{type_name} is not a member of select {select}")]
    UnknownCandidate {
        select: &'static str,
        type_name: String,
    },

    /// Error reported by the underlying store
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BindingError {
    /// Create a kind mismatch error
    pub fn kind_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        BindingError::KindMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a null entity error
    pub fn null_entity(entity: &'static str, attribute: impl Into<String>) -> Self {
        BindingError::NullEntity {
            entity,
            attribute: attribute.into(),
        }
    }
}
