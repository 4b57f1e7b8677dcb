// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Lite Binding - Typed access to EXPRESS instances
//!
//! This crate exposes a dynamically typed attribute store (anything
//! implementing [`AttributeStore`]) as statically typed entity wrappers,
//! SELECT accessors and aggregate codecs.
//!
//! # Architecture
//!
//! - [`Entity`] / [`EntityType`] - typed views over instance handles
//! - [`Select`] / [`SelectType`] - lenses onto SELECT-valued slots
//! - [`ElementCodec`] - one encoder/decoder per aggregate element kind,
//!   driven by [`from_aggregate`] and [`to_aggregate`]
//! - [`EnumTable`] / [`Enumeration`] - enumerator name tables
//! - [`describe_entity`] - schema reflection dump
//! - [`ifc4`] - generated wrappers for an IFC4 subset
//!
//! Wrappers for other schemas are declared with [`express_entity!`],
//! [`express_attributes!`], [`express_select!`] and [`express_enum!`].
//!
//! # Example
//!
//! ```ignore
//! use ifc_lite_binding::ifc4::prelude::*;
//! use ifc_lite_binding::EntityType;
//!
//! let wall = IfcWall::create(&store, model)?;
//! wall.set_name("MyWall")?;
//! assert_eq!(wall.name().as_deref(), Some("MyWall"));
//! assert_eq!(wall.description(), None);
//! ```

#[macro_use]
mod macros;

pub mod aggregation;
pub mod entity;
pub mod enums;
pub mod error;
pub mod ifc4;
pub mod reflect;
pub mod select;

pub use aggregation::{
    from_aggregate, from_attribute, to_aggregate, Booleans, Dynamic, Element, ElementCodec,
    ElementKind, Entities, Enums, Integers, Nested, Reals, Selects, Texts,
};
pub use entity::{Entity, EntityType};
pub use enums::{
    index_from_name, name_from_index, EnumTable, EnumValue, Enumeration, Logical, LOGICAL,
};
pub use error::{BindingError, Result};
pub use reflect::{describe_entity, EntityDescription};
pub use select::{Candidate, Select, SelectDescriptor, SelectType, SelectValue};

pub use ifc_lite_sdai::{
    AdbHandle, AggregateHandle, AttributeDescriptor, AttributeStore, InstanceHandle, ModelHandle,
    Scalar, StoreError, StoreKind, StoreValue, TypePath,
};
