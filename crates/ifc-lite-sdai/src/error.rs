// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types reported by attribute stores

use crate::{AdbHandle, AggregateHandle, InstanceHandle, ModelHandle};
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors a store reports for bad handles or names
///
/// Absent values are never errors; reads return `None` instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Entity name not present in the schema
    #[error("Unknown entity type: {0}")]
    UnknownEntity(String),

    /// Abstract entities cannot be instantiated
    #[error("Entity type {0} is abstract")]
    AbstractEntity(String),

    /// Attribute name not declared for the instance's type
    #[error("Unknown attribute {attribute} on {entity}")]
    UnknownAttribute { entity: String, attribute: String },

    /// Inverse attributes are derived by the store and cannot be written
    #[error("Attribute {attribute} on {entity} is inverse")]
    InverseAttribute { entity: String, attribute: String },

    /// Instance handle does not refer to a live instance
    #[error("Invalid instance handle {0}")]
    InvalidInstance(InstanceHandle),

    /// ADB handle does not refer to a live ADB
    #[error("Invalid ADB handle {0}")]
    InvalidAdb(AdbHandle),

    /// Aggregate handle does not refer to a live aggregate
    #[error("Invalid aggregate handle {0}")]
    InvalidAggregate(AggregateHandle),

    /// Model handle does not refer to an open model
    #[error("Invalid model handle {0}")]
    InvalidModel(ModelHandle),

    /// Malformed schema data
    #[error("Schema error: {0}")]
    Schema(String),
}

impl StoreError {
    /// Create an unknown attribute error
    pub fn unknown_attribute(entity: impl Into<String>, attribute: impl Into<String>) -> Self {
        StoreError::UnknownAttribute {
            entity: entity.into(),
            attribute: attribute.into(),
        }
    }

    /// Create an inverse attribute error
    pub fn inverse_attribute(entity: impl Into<String>, attribute: impl Into<String>) -> Self {
        StoreError::InverseAttribute {
            entity: entity.into(),
            attribute: attribute.into(),
        }
    }

    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        StoreError::Schema(msg.into())
    }
}
