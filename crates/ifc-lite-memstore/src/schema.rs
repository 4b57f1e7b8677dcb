// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schema definitions backing kind-of checks and attribute reflection

use ifc_lite_sdai::{AggregationType, AttrKind, AttributeDescriptor, Result, StoreError};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// One declared attribute
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDef {
    pub name: String,
    pub kind: AttrKind,
    /// Named domain: entity, enumeration or select type
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub aggregation: Option<AggregationType>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub inverse: bool,
}

impl AttributeDef {
    /// Create a required attribute
    pub fn new(name: impl Into<String>, kind: AttrKind) -> Self {
        Self {
            name: name.into(),
            kind,
            domain: None,
            aggregation: None,
            optional: false,
            inverse: false,
        }
    }

    /// Integer, real, boolean or logical attribute
    pub fn simple(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Simple)
    }

    /// String or binary attribute
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Text)
    }

    /// Entity reference attribute
    pub fn entity(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self::new(name, AttrKind::EntityRef).with_domain(domain)
    }

    /// Enumeration attribute
    pub fn enumeration(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Enumeration).with_domain(domain)
    }

    /// SELECT attribute
    pub fn select(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Select).with_domain(domain)
    }

    /// Aggregate attribute; `domain` names the element entity/type if any
    pub fn aggregate(name: impl Into<String>, aggregation: AggregationType) -> Self {
        let mut attr = Self::new(name, AttrKind::Aggregate);
        attr.aggregation = Some(aggregation);
        attr
    }

    /// Set the named domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Mark as OPTIONAL
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as INVERSE
    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }
}

/// One declared entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    pub name: String,
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
}

impl EntityDef {
    /// Create an entity with no supertypes or attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
            is_abstract: false,
            attributes: Vec::new(),
        }
    }

    /// Add a supertype
    pub fn subtype_of(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    /// Mark as ABSTRACT
    pub fn abstract_entity(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Add a declared attribute
    pub fn attribute(mut self, attr: AttributeDef) -> Self {
        self.attributes.push(attr);
        self
    }
}

#[derive(Deserialize)]
struct SchemaData {
    name: String,
    entities: Vec<EntityDef>,
}

/// A validated schema with flattened attribute lists
#[derive(Clone, Debug)]
pub struct Schema {
    name: String,
    /// Upper-cased entity name -> definition
    entities: FxHashMap<String, EntityDef>,
    /// Upper-cased entity name -> attributes, inherited first
    flattened: FxHashMap<String, Vec<AttributeDescriptor>>,
}

impl Schema {
    /// Start building a schema
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            entities: Vec::new(),
        }
    }

    /// Load a schema from JSON (`{"name": ..., "entities": [...]}`)
    pub fn from_json(json: &str) -> Result<Self> {
        let data: SchemaData =
            serde_json::from_str(json).map_err(|e| StoreError::schema(e.to_string()))?;
        let mut builder = Schema::builder(data.name);
        builder.entities = data.entities;
        builder.build()
    }

    /// Schema name (e.g., "IFC4")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an entity by case-insensitive name
    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.get(&name.to_ascii_uppercase())
    }

    /// Number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if `type_name` is `candidate` or one of its subtypes
    pub fn is_kind_of(&self, type_name: &str, candidate: &str) -> bool {
        let mut pending = vec![type_name.to_ascii_uppercase()];
        let target = candidate.to_ascii_uppercase();
        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if let Some(def) = self.entities.get(&current) {
                pending.extend(def.supertypes.iter().map(|s| s.to_ascii_uppercase()));
            }
        }
        false
    }

    /// Attributes of an entity, supertype attributes first
    pub fn attributes(&self, entity: &str) -> &[AttributeDescriptor] {
        self.flattened
            .get(&entity.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find one attribute of an entity by case-insensitive name
    pub fn attribute(&self, entity: &str, attr: &str) -> Option<&AttributeDescriptor> {
        self.attributes(entity)
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(attr))
    }

    /// Direct supertypes of an entity
    pub fn supertypes(&self, entity: &str) -> Vec<String> {
        self.entity(entity)
            .map(|def| def.supertypes.clone())
            .unwrap_or_default()
    }

    fn flatten(
        entities: &FxHashMap<String, EntityDef>,
        key: &str,
        visiting: &mut FxHashSet<String>,
        out: &mut Vec<AttributeDescriptor>,
    ) -> Result<()> {
        let def = entities
            .get(key)
            .ok_or_else(|| StoreError::UnknownEntity(key.to_string()))?;
        if !visiting.insert(key.to_string()) {
            return Err(StoreError::schema(format!(
                "supertype cycle through {}",
                def.name
            )));
        }

        for supertype in &def.supertypes {
            Self::flatten(entities, &supertype.to_ascii_uppercase(), visiting, out)?;
        }

        for attr in &def.attributes {
            // Diamond inheritance and redeclared attributes: first one wins
            if out.iter().any(|a| a.name.eq_ignore_ascii_case(&attr.name)) {
                log::debug!(
                    "skipping duplicate attribute {} declared by {}",
                    attr.name,
                    def.name
                );
                continue;
            }
            out.push(AttributeDescriptor {
                name: attr.name.clone(),
                declaring_entity: def.name.clone(),
                kind: attr.kind,
                domain: attr.domain.clone(),
                aggregation: attr.aggregation,
                optional: attr.optional,
                inverse: attr.inverse,
            });
        }

        visiting.remove(key);
        Ok(())
    }
}

/// Builder for [`Schema`]
pub struct SchemaBuilder {
    name: String,
    entities: Vec<EntityDef>,
}

impl SchemaBuilder {
    /// Add an entity definition
    pub fn entity(mut self, def: EntityDef) -> Self {
        self.entities.push(def);
        self
    }

    /// Validate supertypes and flatten attribute lists
    pub fn build(self) -> Result<Schema> {
        let mut entities: FxHashMap<String, EntityDef> = FxHashMap::default();
        for def in self.entities {
            let key = def.name.to_ascii_uppercase();
            if entities.contains_key(&key) {
                return Err(StoreError::schema(format!("duplicate entity {}", def.name)));
            }
            entities.insert(key, def);
        }

        for def in entities.values() {
            for supertype in &def.supertypes {
                if !entities.contains_key(&supertype.to_ascii_uppercase()) {
                    return Err(StoreError::schema(format!(
                        "{} names unknown supertype {}",
                        def.name, supertype
                    )));
                }
            }
        }

        let mut flattened = FxHashMap::default();
        for key in entities.keys() {
            let mut attrs = Vec::new();
            Schema::flatten(&entities, key, &mut FxHashSet::default(), &mut attrs)?;
            flattened.insert(key.clone(), attrs);
        }

        Ok(Schema {
            name: self.name,
            entities,
            flattened,
        })
    }
}
