// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Lite SDAI - Capability interface for EXPRESS attribute stores
//!
//! This crate describes the store the early-binding layer talks to: an
//! instance/attribute database addressed by opaque handles, where values are
//! read and written by attribute name and a runtime [`StoreKind`] tag.
//! It does not implement a store; `ifc-lite-memstore` provides an in-memory
//! one and native engines can be wrapped behind the same trait.
//!
//! # Architecture
//!
//! - [`AttributeStore`] - the capability set (instances, attributes, ADBs, aggregates)
//! - [`AttributeStoreExt`] - typed convenience reads on top of any store
//! - [`StoreValue`] / [`Scalar`] - values crossing the store boundary
//! - [`AttributeDescriptor`] - read-only schema reflection data
//!
//! # Example
//!
//! ```ignore
//! use ifc_lite_sdai::{AttributeStore, AttributeStoreExt, StoreKind};
//!
//! fn wall_name(store: &dyn AttributeStore, wall: InstanceHandle) -> Option<String> {
//!     store.get_as::<String>(wall, "Name", StoreKind::String)
//! }
//! ```

pub mod error;
pub mod ext;
pub mod schema;
pub mod traits;
pub mod types;

pub use error::*;
pub use ext::*;
pub use schema::*;
pub use traits::*;
pub use types::*;
