// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerator name tables and index mapping
//!
//! The store carries enumerations as text. Each EXPRESS enumeration has a
//! fixed, ordered name table; the Rust enum's discriminant is the index into
//! that table.

use crate::error::{BindingError, Result};
use ifc_lite_sdai::StoreKind;
use std::fmt;

/// Ordered enumerator names for one EXPRESS enumeration
#[derive(Debug, PartialEq, Eq)]
pub struct EnumTable {
    /// EXPRESS type name (e.g., "IfcWallTypeEnum")
    pub name: &'static str,
    /// Store kind the names travel as: `Enumeration`, or `Logical` for LOGICAL
    pub kind: StoreKind,
    /// Enumerator names in declaration order
    pub names: &'static [&'static str],
}

impl EnumTable {
    /// Index of `name`, first match wins
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }

    /// Name at `index`
    pub fn name_of(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    /// Number of enumerators
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Look up an enumerator index by name
pub fn index_from_name(name: &str, table: &EnumTable) -> Option<usize> {
    table.index_of(name)
}

/// Look up an enumerator name by index
///
/// An index outside the table is a caller bug and is reported as
/// [`BindingError::EnumIndexOutOfRange`].
pub fn name_from_index(index: usize, table: &'static EnumTable) -> Result<&'static str> {
    table
        .name_of(index)
        .ok_or(BindingError::EnumIndexOutOfRange {
            table: table.name,
            index,
        })
}

/// Rust enum generated for an EXPRESS enumeration
pub trait Enumeration: Copy + Eq + fmt::Debug + 'static {
    /// The name table
    fn table() -> &'static EnumTable;

    /// Position in the name table
    fn index(self) -> usize;

    /// Enumerator at `index`
    fn from_index(index: usize) -> Option<Self>;

    /// Enumerator name as stored
    fn name(self) -> Result<&'static str> {
        name_from_index(self.index(), Self::table())
    }

    /// Enumerator with the stored name `name`
    fn from_name(name: &str) -> Option<Self> {
        Self::table().index_of(name).and_then(Self::from_index)
    }
}

/// An enumerator held without its Rust enum type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumValue {
    table: &'static EnumTable,
    index: usize,
}

impl EnumValue {
    /// Create a value; `None` if `index` is outside the table
    pub fn new(table: &'static EnumTable, index: usize) -> Option<Self> {
        (index < table.len()).then_some(Self { table, index })
    }

    /// Create a value from a stored name
    pub fn from_name(table: &'static EnumTable, name: &str) -> Option<Self> {
        table.index_of(name).map(|index| Self { table, index })
    }

    pub fn table(&self) -> &'static EnumTable {
        self.table
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Stored name of the enumerator
    pub fn name(&self) -> &'static str {
        self.table.names[self.index]
    }

    /// Convert to a typed enumerator of the same table
    pub fn to_enum<E: Enumeration>(&self) -> Option<E> {
        if E::table() == self.table {
            E::from_index(self.index)
        } else {
            None
        }
    }
}

impl<E: Enumeration> From<E> for EnumValue {
    fn from(value: E) -> Self {
        EnumValue {
            table: E::table(),
            index: value.index(),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}.", self.name())
    }
}

express_enum! {
    /// EXPRESS LOGICAL
    pub enum Logical: LOGICAL("LOGICAL", Logical) {
        False = "F",
        True = "T",
        Unknown = "U",
    }
}

impl Logical {
    /// `None` for [`Logical::Unknown`]
    pub fn to_bool(self) -> Option<bool> {
        match self {
            Logical::False => Some(false),
            Logical::True => Some(true),
            Logical::Unknown => None,
        }
    }
}

impl From<bool> for Logical {
    fn from(value: bool) -> Self {
        if value {
            Logical::True
        } else {
            Logical::False
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLOURS: EnumTable = EnumTable {
        name: "Colour",
        kind: StoreKind::Enumeration,
        names: &["RED", "GREEN", "BLUE", "GREEN"],
    };

    #[test]
    fn test_index_from_name() {
        assert_eq!(index_from_name("RED", &COLOURS), Some(0));
        assert_eq!(index_from_name("GREEN", &COLOURS), Some(1));
        assert_eq!(index_from_name("green", &COLOURS), None);
        assert_eq!(index_from_name("PURPLE", &COLOURS), None);
    }

    #[test]
    fn test_name_from_index() {
        assert_eq!(name_from_index(2, &COLOURS), Ok("BLUE"));
        assert_eq!(
            name_from_index(4, &COLOURS),
            Err(BindingError::EnumIndexOutOfRange {
                table: "Colour",
                index: 4
            })
        );
    }

    #[test]
    fn test_logical_round_trip() {
        for name in LOGICAL.names {
            let value = Logical::from_name(name).unwrap();
            assert_eq!(value.name(), Ok(*name));
        }
        assert_eq!(Logical::table().kind, StoreKind::Logical);
        assert_eq!(Logical::from(true), Logical::True);
        assert_eq!(Logical::Unknown.to_bool(), None);
        assert_eq!(Logical::from_index(3), None);
    }

    #[test]
    fn test_enum_value() {
        let value = EnumValue::from(Logical::Unknown);
        assert_eq!(value.name(), "U");
        assert_eq!(value.to_string(), ".U.");
        assert_eq!(value.to_enum::<Logical>(), Some(Logical::Unknown));
        assert!(EnumValue::new(&COLOURS, 7).is_none());
        assert_eq!(EnumValue::from_name(&COLOURS, "BLUE").unwrap().index(), 2);
        assert_eq!(
            EnumValue::from_name(&COLOURS, "RED").unwrap().to_enum::<Logical>(),
            None
        );
    }
}
