// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schema reflection dump

use crate::entity::Entity;
use ifc_lite_sdai::{AttributeDescriptor, AttributeStore};
use std::fmt;

/// An entity declaration as reported by the store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityDescription {
    pub name: String,
    /// Direct supertypes
    pub supertypes: Vec<String>,
    pub is_abstract: bool,
    /// All attributes, inherited ones first
    pub attributes: Vec<AttributeDescriptor>,
}

impl EntityDescription {
    /// Look up an attribute by case-insensitive name
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Attributes stored on instances (inverse ones excluded)
    pub fn direct_attributes(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes.iter().filter(|a| a.is_direct())
    }
}

impl fmt::Display for EntityDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for supertype in &self.supertypes {
            write!(f, " {}", supertype)?;
        }
        for attr in &self.attributes {
            write!(f, "\n    {}", attr)?;
        }
        Ok(())
    }
}

/// Describe the entity `name`
pub fn describe_entity(store: &dyn AttributeStore, name: &str) -> EntityDescription {
    EntityDescription {
        name: name.to_string(),
        supertypes: store.supertypes(name),
        is_abstract: store.is_abstract(name),
        attributes: store.attributes(name),
    }
}

impl Entity<'_> {
    /// Describe the type the instance was created as; `None` for a null view
    pub fn describe(&self) -> Option<EntityDescription> {
        let name = self.entity_name()?;
        Some(describe_entity(self.store(), &name))
    }
}
