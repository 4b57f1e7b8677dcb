// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schema reflection data produced by the store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad category of an attribute's declared domain
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrKind {
    /// Integer, real, boolean or logical
    Simple,
    /// String or binary
    Text,
    /// Reference to another entity instance
    EntityRef,
    Enumeration,
    Select,
    Aggregate,
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttrKind::Simple => "simple",
            AttrKind::Text => "text",
            AttrKind::EntityRef => "entity",
            AttrKind::Enumeration => "enumeration",
            AttrKind::Select => "select",
            AttrKind::Aggregate => "aggregate",
        };
        f.write_str(name)
    }
}

/// EXPRESS aggregation types
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationType {
    List,
    Array,
    Set,
    Bag,
}

impl AggregationType {
    /// Lists and arrays preserve element order; sets and bags do not
    pub fn is_ordered(self) -> bool {
        matches!(self, AggregationType::List | AggregationType::Array)
    }

    /// Name prefix used for unnamed aggregation types (`ListOf`, `SetOf`, ...)
    pub fn prefix(self) -> &'static str {
        match self {
            AggregationType::List => "ListOf",
            AggregationType::Array => "ArrayOf",
            AggregationType::Set => "SetOf",
            AggregationType::Bag => "BagOf",
        }
    }
}

/// Description of one attribute as reported by schema reflection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Attribute name (e.g., "GlobalId")
    pub name: String,
    /// Entity that declares the attribute (may be a supertype of the queried entity)
    pub declaring_entity: String,
    /// Category of the declared domain
    pub kind: AttrKind,
    /// Entity named by the domain, for entity references and aggregates of them
    pub domain: Option<String>,
    /// Aggregation type if the attribute is a collection
    pub aggregation: Option<AggregationType>,
    /// Whether the attribute may be left unset (`$`)
    pub optional: bool,
    /// Whether the attribute is an INVERSE
    pub inverse: bool,
}

impl AttributeDescriptor {
    /// Check if the attribute holds a collection
    pub fn is_aggregate(&self) -> bool {
        self.aggregation.is_some() || self.kind == AttrKind::Aggregate
    }

    /// Explicit attributes are stored; inverse ones are derived
    pub fn is_direct(&self) -> bool {
        !self.inverse
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        if self.is_direct() {
            f.write_str("direct ")?;
        }
        if self.optional {
            f.write_str("optional ")?;
        }
        if let Some(aggregation) = self.aggregation {
            write!(f, "{:?} of ", aggregation)?;
        }
        write!(f, "{}", self.kind)?;
        if let Some(domain) = &self.domain {
            write!(f, " {}", domain)?;
        }
        write!(f, " defined by {}", self.declaring_entity)
    }
}
