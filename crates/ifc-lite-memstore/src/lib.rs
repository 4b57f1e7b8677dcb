// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Lite MemStore - In-memory attribute store
//!
//! A reference implementation of the `ifc-lite-sdai` [`AttributeStore`]
//! capability set. It keeps instances, attribute slots, ADBs and aggregates
//! in hash maps and answers reflection queries from a [`Schema`].
//!
//! # Features
//!
//! - **Schema from code or JSON** - [`Schema::builder`] / [`Schema::from_json`]
//! - **Kind coercion** on typed reads (integer as real, logical as boolean, ...)
//! - **Ownership tracking** - [`MemoryStore::live_adbs`] and
//!   [`MemoryStore::live_aggregates`] expose leaks in tests
//! - **IFC4 subset** - [`ifc4::schema`] matches the generated bindings
//!
//! # Example
//!
//! ```ignore
//! use ifc_lite_memstore::{ifc4, MemoryStore};
//! use ifc_lite_sdai::{AttributeStore, StoreValue};
//!
//! let store = MemoryStore::new(ifc4::schema()?);
//! let model = store.create_model("IFC4")?;
//! let wall = store.create_instance(model, "IfcWall")?;
//! store.put_attribute(wall, "Name", StoreValue::String("My wall".into()))?;
//! ```

mod coerce;
pub mod ifc4;
mod schema;
mod store;

pub use schema::{AttributeDef, EntityDef, Schema, SchemaBuilder};
pub use store::MemoryStore;

pub use ifc_lite_sdai::AttributeStore;

/// Behaviour switches for a [`MemoryStore`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Skip duplicate members when appending to SET attributes
    pub dedup_sets: bool,
    /// Reject writes to attributes the schema does not declare
    pub strict_attributes: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dedup_sets: true,
            strict_attributes: true,
        }
    }
}

impl StoreOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether SET aggregates skip duplicate members
    pub fn with_set_dedup(mut self, enabled: bool) -> Self {
        self.dedup_sets = enabled;
        self
    }

    /// Set whether undeclared attribute names are rejected
    pub fn with_strict_attributes(mut self, enabled: bool) -> Self {
        self.strict_attributes = enabled;
        self
    }
}
