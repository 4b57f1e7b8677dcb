// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types crossing the store boundary
//!
//! Handles are plain integers owned by the store; zero is the canonical null.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

macro_rules! store_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, Default,
        )]
        pub struct $name(pub u64);

        impl $name {
            /// The null handle
            pub const NULL: $name = $name(0);

            /// Check if this is the null handle
            pub fn is_null(self) -> bool {
                self.0 == 0
            }

            /// `None` for the null handle
            pub fn non_null(self) -> Option<Self> {
                if self.is_null() {
                    None
                } else {
                    Some(self)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(handle: $name) -> Self {
                handle.0
            }
        }
    };
}

store_handle!(
    /// Opaque handle to a live entity instance
    InstanceHandle
);
store_handle!(
    /// Opaque handle to an Attribute Data Block (boxed, type-tagged value)
    AdbHandle
);
store_handle!(
    /// Opaque handle to a list/array/set/bag held by the store
    AggregateHandle
);
store_handle!(
    /// Opaque handle to an open model
    ModelHandle
);

/// Runtime type tag used to read and write values
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Integer,
    Real,
    Boolean,
    /// Tri-state logical, carried as an enumerator letter (`F`, `T`, `U`)
    Logical,
    Enumeration,
    String,
    Binary,
    Instance,
    Aggregate,
    Adb,
}

impl StoreKind {
    /// Kinds whose values are carried as text
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            StoreKind::String | StoreKind::Binary | StoreKind::Enumeration | StoreKind::Logical
        )
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreKind::Integer => "INTEGER",
            StoreKind::Real => "REAL",
            StoreKind::Boolean => "BOOLEAN",
            StoreKind::Logical => "LOGICAL",
            StoreKind::Enumeration => "ENUM",
            StoreKind::String => "STRING",
            StoreKind::Binary => "BINARY",
            StoreKind::Instance => "INSTANCE",
            StoreKind::Aggregate => "AGGR",
            StoreKind::Adb => "ADB",
        };
        f.write_str(name)
    }
}

/// A value read from or written to the store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StoreValue {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Logical(String),
    Enumeration(String),
    String(String),
    Binary(String),
    Instance(InstanceHandle),
    Aggregate(AggregateHandle),
    Adb(AdbHandle),
}

impl StoreValue {
    /// The kind tag of this value
    pub fn kind(&self) -> StoreKind {
        match self {
            StoreValue::Integer(_) => StoreKind::Integer,
            StoreValue::Real(_) => StoreKind::Real,
            StoreValue::Boolean(_) => StoreKind::Boolean,
            StoreValue::Logical(_) => StoreKind::Logical,
            StoreValue::Enumeration(_) => StoreKind::Enumeration,
            StoreValue::String(_) => StoreKind::String,
            StoreValue::Binary(_) => StoreKind::Binary,
            StoreValue::Instance(_) => StoreKind::Instance,
            StoreValue::Aggregate(_) => StoreKind::Aggregate,
            StoreValue::Adb(_) => StoreKind::Adb,
        }
    }

    /// Try to get as text (string, binary, enumerator or logical letter)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoreValue::String(s)
            | StoreValue::Binary(s)
            | StoreValue::Enumeration(s)
            | StoreValue::Logical(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as instance handle
    pub fn as_instance(&self) -> Option<InstanceHandle> {
        match self {
            StoreValue::Instance(h) => Some(*h),
            _ => None,
        }
    }

    /// Try to get as aggregate handle
    pub fn as_aggregate(&self) -> Option<AggregateHandle> {
        match self {
            StoreValue::Aggregate(h) => Some(*h),
            _ => None,
        }
    }
}

/// Native Rust types that can cross the store boundary
///
/// The same native type may be carried by several kinds (a `String` can be a
/// string, binary, enumerator or logical letter), so the kind is supplied on
/// the way in.
pub trait Scalar: Sized {
    /// Box `self` as a value of `kind`, or `None` if `kind` cannot carry it
    fn into_store(self, kind: StoreKind) -> Option<StoreValue>;

    /// Unbox a value, or `None` if it holds a different native type
    fn from_store(value: StoreValue) -> Option<Self>;
}

impl Scalar for i64 {
    fn into_store(self, kind: StoreKind) -> Option<StoreValue> {
        (kind == StoreKind::Integer).then_some(StoreValue::Integer(self))
    }

    fn from_store(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::Integer(v) => Some(v),
            _ => None,
        }
    }
}

impl Scalar for f64 {
    fn into_store(self, kind: StoreKind) -> Option<StoreValue> {
        (kind == StoreKind::Real).then_some(StoreValue::Real(self))
    }

    fn from_store(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::Real(v) => Some(v),
            _ => None,
        }
    }
}

impl Scalar for bool {
    fn into_store(self, kind: StoreKind) -> Option<StoreValue> {
        (kind == StoreKind::Boolean).then_some(StoreValue::Boolean(self))
    }

    fn from_store(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::Boolean(v) => Some(v),
            _ => None,
        }
    }
}

impl Scalar for String {
    fn into_store(self, kind: StoreKind) -> Option<StoreValue> {
        match kind {
            StoreKind::String => Some(StoreValue::String(self)),
            StoreKind::Binary => Some(StoreValue::Binary(self)),
            StoreKind::Enumeration => Some(StoreValue::Enumeration(self)),
            StoreKind::Logical => Some(StoreValue::Logical(self)),
            _ => None,
        }
    }

    fn from_store(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::String(s)
            | StoreValue::Binary(s)
            | StoreValue::Enumeration(s)
            | StoreValue::Logical(s) => Some(s),
            _ => None,
        }
    }
}

impl Scalar for InstanceHandle {
    fn into_store(self, kind: StoreKind) -> Option<StoreValue> {
        (kind == StoreKind::Instance).then_some(StoreValue::Instance(self))
    }

    fn from_store(value: StoreValue) -> Option<Self> {
        value.as_instance()
    }
}

impl Scalar for AggregateHandle {
    fn into_store(self, kind: StoreKind) -> Option<StoreValue> {
        (kind == StoreKind::Aggregate).then_some(StoreValue::Aggregate(self))
    }

    fn from_store(value: StoreValue) -> Option<Self> {
        value.as_aggregate()
    }
}

impl Scalar for AdbHandle {
    fn into_store(self, kind: StoreKind) -> Option<StoreValue> {
        (kind == StoreKind::Adb).then_some(StoreValue::Adb(self))
    }

    fn from_store(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::Adb(h) => Some(h),
            _ => None,
        }
    }
}

/// Ordered chain of declared type names a value is wrapped under, outermost first
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypePath(SmallVec<[String; 2]>);

impl TypePath {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from type names, outermost first
    pub fn from_names(names: &[&str]) -> Self {
        TypePath(names.iter().map(|n| n.to_string()).collect())
    }

    /// Append a deeper type name
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Number of type names in the path
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the value carries no declared type
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Type name at `depth` (0 = outermost)
    pub fn get(&self, depth: usize) -> Option<&str> {
        self.0.get(depth).map(String::as_str)
    }

    /// Iterate type names, outermost first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Compare against candidate names (EXPRESS names are case-insensitive)
    pub fn matches(&self, candidate: &[&str]) -> bool {
        self.0.len() == candidate.len()
            && self
                .0
                .iter()
                .zip(candidate)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
