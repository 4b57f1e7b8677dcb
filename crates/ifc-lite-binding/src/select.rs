// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SELECT accessors
//!
//! A [`Select`] is a lens onto the ADB that holds a SELECT value. It is bound
//! either to an attribute slot, to the current value of an outer select
//! (for a select nested in a select), or to a detached ADB it owns (for
//! members of aggregates and values under construction).
//!
//! Nothing is cached: every read asks the store for the slot's current ADB,
//! and every write boxes a fresh ADB and hands it to the outermost slot.
//!
//! Which candidate a value is gets decided once, at the store boundary, by
//! [`SelectDescriptor::match_adb`]: the first candidate whose type test passes
//! wins. Value candidates are tested on the ADB's outermost type name, entity
//! candidates with a kind-of check, nested selects recursively.

use crate::aggregation::{
    decode_element, encode_element, from_aggregate, to_aggregate, Element, ElementCodec,
    ElementKind,
};
use crate::entity::{checked_reference, Entity, EntityType};
use crate::enums::Enumeration;
use crate::error::{BindingError, Result};
use ifc_lite_sdai::{
    AdbHandle, AggregateHandle, AttributeStore, AttributeStoreExt, InstanceHandle, Scalar,
    StoreKind, StoreValue, TypePath,
};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// One member type of a SELECT
#[derive(Debug)]
pub struct Candidate {
    /// EXPRESS type name, also the type path tag of its values
    pub type_name: &'static str,
    pub kind: ElementKind,
}

impl Candidate {
    /// Check if the value boxed in `adb` is of this candidate type
    pub fn matches(&self, store: &dyn AttributeStore, adb: AdbHandle) -> bool {
        match self.kind {
            ElementKind::Entity(domain) => store
                .adb_value(adb, StoreKind::Instance)
                .and_then(|value| value.as_instance())
                .is_some_and(|handle| store.is_kind_of(handle, domain)),
            ElementKind::Select(nested) => nested.match_adb(store, adb).is_some(),
            _ => has_type(store, adb, self.type_name),
        }
    }
}

/// Candidate table of one SELECT type
#[derive(Debug)]
pub struct SelectDescriptor {
    pub name: &'static str,
    pub candidates: &'static [Candidate],
}

impl SelectDescriptor {
    /// Index of the first candidate the value boxed in `adb` belongs to
    pub fn match_adb(&self, store: &dyn AttributeStore, adb: AdbHandle) -> Option<usize> {
        self.candidates
            .iter()
            .position(|candidate| candidate.matches(store, adb))
    }

    /// Direct candidate named `type_name`
    pub fn candidate(&self, type_name: &str) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.type_name.eq_ignore_ascii_case(type_name))
    }

    /// Candidate named `type_name`, searching nested selects as well
    pub fn find(&self, type_name: &str) -> Option<&Candidate> {
        self.candidate(type_name).or_else(|| {
            self.candidates.iter().find_map(|candidate| match candidate.kind {
                ElementKind::Select(nested) => nested.find(type_name),
                _ => None,
            })
        })
    }
}

fn has_type(store: &dyn AttributeStore, adb: AdbHandle, type_name: &str) -> bool {
    store
        .adb_type_path(adb, 0)
        .is_some_and(|name| name.eq_ignore_ascii_case(type_name))
}

/// A decoded select value with the candidate it was recognised as
#[derive(Clone, Debug, PartialEq)]
pub struct SelectValue<'s> {
    pub type_name: &'static str,
    pub value: Element<'s>,
}

/// An ADB owned by a detached select; released on drop
struct DetachedSlot<'s> {
    owner: Entity<'s>,
    adb: Cell<AdbHandle>,
}

impl Drop for DetachedSlot<'_> {
    fn drop(&mut self) {
        let adb = self.adb.get();
        if !adb.is_null() {
            self.owner.store().release_adb(adb);
        }
    }
}

#[derive(Clone)]
enum Binding<'s> {
    Attribute {
        entity: Entity<'s>,
        attr: &'static str,
    },
    Nested(Box<Select<'s>>),
    Detached(Rc<DetachedSlot<'s>>),
}

/// Lens onto a SELECT value
///
/// Clones are views onto the same value: a clone of a detached select shares
/// its ADB, and a write through either is seen by both. Use
/// [`to_detached`](Self::to_detached) for an independent copy.
#[derive(Clone)]
pub struct Select<'s> {
    descriptor: &'static SelectDescriptor,
    binding: Binding<'s>,
}

impl<'s> Select<'s> {
    /// Bind to the attribute `attr` of `entity`
    pub fn attribute(
        entity: Entity<'s>,
        attr: &'static str,
        descriptor: &'static SelectDescriptor,
    ) -> Self {
        Self {
            descriptor,
            binding: Binding::Attribute { entity, attr },
        }
    }

    /// Bind to the value of `outer`, viewed as the nested select `descriptor`
    pub fn nested(outer: &Select<'s>, descriptor: &'static SelectDescriptor) -> Self {
        Self {
            descriptor,
            binding: Binding::Nested(Box::new(outer.clone())),
        }
    }

    /// An unset select not attached to any slot
    ///
    /// `owner` is the instance any aggregates written through it belong to.
    pub fn detached(owner: Entity<'s>, descriptor: &'static SelectDescriptor) -> Self {
        Self::adopt(owner, AdbHandle::NULL, descriptor)
    }

    /// Take ownership of a caller-owned ADB
    pub(crate) fn adopt(
        owner: Entity<'s>,
        adb: AdbHandle,
        descriptor: &'static SelectDescriptor,
    ) -> Self {
        Self {
            descriptor,
            binding: Binding::Detached(Rc::new(DetachedSlot {
                owner,
                adb: Cell::new(adb),
            })),
        }
    }

    pub fn descriptor(&self) -> &'static SelectDescriptor {
        self.descriptor
    }

    /// The instance the value belongs to
    pub fn owner(&self) -> Entity<'s> {
        match &self.binding {
            Binding::Attribute { entity, .. } => *entity,
            Binding::Nested(outer) => outer.owner(),
            Binding::Detached(slot) => slot.owner,
        }
    }

    fn store(&self) -> &'s dyn AttributeStore {
        self.owner().store()
    }

    /// The ADB currently holding the value, `None` if unset
    pub fn resolve(&self) -> Option<AdbHandle> {
        match &self.binding {
            Binding::Attribute { entity, attr } => {
                if entity.is_null() {
                    return None;
                }
                entity.store().get_attribute_adb(entity.as_handle(), attr)
            }
            Binding::Nested(outer) => outer.resolve(),
            Binding::Detached(slot) => slot.adb.get().non_null(),
        }
    }

    /// Hand a freshly created ADB to the outermost slot
    ///
    /// The ADB is released if the slot cannot take it.
    fn set_adb(&self, adb: AdbHandle) -> Result<()> {
        match &self.binding {
            Binding::Attribute { entity, attr } => {
                let store = entity.store();
                let result = if entity.is_null() {
                    Err(BindingError::null_entity(entity.declared_kind(), *attr))
                } else {
                    store
                        .put_attribute(entity.as_handle(), attr, StoreValue::Adb(adb))
                        .map_err(BindingError::from)
                };
                match &result {
                    Ok(()) => log::trace!("{:?}.{} replaced by ADB {}", entity, attr, adb),
                    Err(_) => store.release_adb(adb),
                }
                result
            }
            Binding::Nested(outer) => outer.set_adb(adb),
            Binding::Detached(slot) => {
                let previous = slot.adb.replace(adb);
                if !previous.is_null() {
                    slot.owner.store().release_adb(previous);
                }
                Ok(())
            }
        }
    }

    /// Box `value`, tag it with `type_name` and write it
    fn put_tagged(&self, type_name: Option<&str>, value: StoreValue) -> Result<()> {
        let store = self.store();
        let adb = store.create_adb(value);
        if let Some(type_name) = type_name {
            if let Err(err) = store.set_adb_type_path(adb, 0, type_name) {
                store.release_adb(adb);
                return Err(err.into());
            }
        }
        self.set_adb(adb)
    }

    fn check_candidate(&self, type_name: &str) -> Result<&'static Candidate> {
        self.descriptor
            .find(type_name)
            .ok_or_else(|| BindingError::UnknownCandidate {
                select: self.descriptor.name,
                type_name: type_name.to_string(),
            })
    }

    /// Check if the slot holds a value
    pub fn is_set(&self) -> bool {
        self.resolve().is_some()
    }

    /// Type path reported for the current value
    pub fn type_path(&self) -> Option<TypePath> {
        self.resolve().map(|adb| self.store().type_path(adb))
    }

    /// Index of the candidate the current value belongs to
    pub fn choice_index(&self) -> Option<usize> {
        let adb = self.resolve()?;
        self.descriptor.match_adb(self.store(), adb)
    }

    /// The candidate the current value belongs to
    pub fn choice(&self) -> Option<&'static Candidate> {
        let descriptor = self.descriptor;
        self.choice_index().map(|index| &descriptor.candidates[index])
    }

    /// Check if the current value is of the candidate `type_name`
    pub fn is_type(&self, type_name: &str) -> bool {
        self.choice()
            .is_some_and(|candidate| candidate.type_name.eq_ignore_ascii_case(type_name))
    }

    /// Read a value tagged `type_name`
    pub fn get_value<T: Scalar>(&self, type_name: &str, kind: StoreKind) -> Option<T> {
        let adb = self.resolve()?;
        let store = self.store();
        if !has_type(store, adb, type_name) {
            return None;
        }
        store.adb_value_as(adb, kind)
    }

    /// Write `value` tagged `type_name`
    pub fn put_value<T: Scalar>(&self, type_name: &str, kind: StoreKind, value: T) -> Result<()> {
        let candidate = self.check_candidate(type_name)?;
        let value = value
            .into_store(kind)
            .ok_or(BindingError::IncompatibleKind(kind))?;
        self.put_tagged(Some(candidate.type_name), value)
    }

    /// Read an enumeration value tagged `type_name`
    pub fn get_enum<E: Enumeration>(&self, type_name: &str) -> Option<E> {
        let name = self.get_value::<String>(type_name, E::table().kind)?;
        E::from_name(&name)
    }

    /// Write an enumeration value tagged `type_name`
    pub fn put_enum<E: Enumeration>(&self, type_name: &str, value: E) -> Result<()> {
        let name = value.name()?;
        self.put_value(type_name, E::table().kind, name.to_string())
    }

    /// Read an entity reference, `None` if it is not a kind of `E`
    pub fn get_entity<E: EntityType<'s>>(&self) -> Option<E> {
        let adb = self.resolve()?;
        let store = self.store();
        let handle: InstanceHandle = store.adb_value_as(adb, StoreKind::Instance)?;
        E::try_bind(store, handle)
    }

    /// Write an entity reference for the candidate `type_name`
    ///
    /// The entity must be a kind of `type_name`.
    pub fn put_entity(&self, type_name: &str, value: Entity<'_>) -> Result<()> {
        let candidate = self.check_candidate(type_name)?;
        let handle = checked_reference(candidate.type_name, &value)?;
        self.put_tagged(None, StoreValue::Instance(handle))
    }

    /// Read an aggregate value tagged `type_name`
    pub fn get_aggregate<C: ElementCodec<'s>>(
        &self,
        type_name: &str,
        codec: &C,
    ) -> Option<Vec<C::Item>> {
        let aggregate = self.get_value::<AggregateHandle>(type_name, StoreKind::Aggregate)?;
        Some(from_aggregate(self.owner(), aggregate, codec))
    }

    /// Write an aggregate value tagged `type_name`
    pub fn put_aggregate<C: ElementCodec<'s>>(
        &self,
        type_name: &str,
        codec: &C,
        items: &[C::Item],
    ) -> Result<()> {
        let candidate = self.check_candidate(type_name)?;
        let aggregate = to_aggregate(self.owner(), None, codec, items)?;
        self.put_tagged(Some(candidate.type_name), StoreValue::Aggregate(aggregate))
    }

    /// Decode the current value by its candidate's declared kind
    ///
    /// Nested selects are followed down to the innermost candidate.
    pub fn value(&self) -> Option<SelectValue<'s>> {
        let adb = self.resolve()?;
        let store = self.store();
        let index = self.descriptor.match_adb(store, adb)?;
        let candidate = &self.descriptor.candidates[index];
        match candidate.kind {
            ElementKind::Select(nested) => Select::nested(self, nested).value(),
            kind => decode_element(self.owner(), &kind, |k| store.adb_value(adb, k)).map(
                |value| SelectValue {
                    type_name: candidate.type_name,
                    value,
                },
            ),
        }
    }

    /// Write `element` as the candidate `type_name`
    pub fn put_element(&self, type_name: &str, element: &Element<'s>) -> Result<()> {
        let candidate = self.check_candidate(type_name)?;
        let value = encode_element(self.owner(), &candidate.kind, element)?
            .ok_or_else(|| BindingError::NullValue(candidate.type_name.to_string()))?;
        match (candidate.kind, value) {
            // Already boxed and tagged by the source select
            (ElementKind::Select(_), StoreValue::Adb(adb)) => self.set_adb(adb),
            (ElementKind::Entity(_), value) => self.put_tagged(None, value),
            (_, value) => self.put_tagged(Some(candidate.type_name), value),
        }
    }

    /// Fresh copy of the current ADB, owned by the caller
    /// A detached select holding a copy of the current value
    pub fn to_detached(&self) -> Select<'s> {
        let adb = self.snapshot_adb().unwrap_or(AdbHandle::NULL);
        Self::adopt(self.owner(), adb, self.descriptor)
    }

    pub(crate) fn snapshot_adb(&self) -> Option<AdbHandle> {
        let adb = self.resolve()?;
        self.store().create_adb(StoreValue::Adb(adb)).non_null()
    }

    fn probe<T: Scalar>(&self, kind: StoreKind) -> Option<T> {
        let adb = self.resolve()?;
        self.store().adb_value_as(adb, kind)
    }

    /// Current value as an integer, whatever its type
    pub fn as_int(&self) -> Option<i64> {
        self.probe(StoreKind::Integer)
    }

    /// Current value as a real, whatever its type
    pub fn as_double(&self) -> Option<f64> {
        self.probe(StoreKind::Real)
    }

    /// Current value as text, whatever its type
    pub fn as_text(&self) -> Option<String> {
        self.probe(StoreKind::String)
    }

    /// Current value as a boolean, whatever its type
    pub fn as_bool(&self) -> Option<bool> {
        self.probe(StoreKind::Boolean)
    }

    /// Current value as an instance handle, whatever its type
    pub fn as_instance(&self) -> Option<InstanceHandle> {
        self.probe(StoreKind::Instance)
    }
}

impl PartialEq for Select<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.name == other.descriptor.name && self.value() == other.value()
    }
}

impl fmt::Debug for Select<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("descriptor", &self.descriptor.name)
            .field("value", &self.value())
            .finish()
    }
}

/// A generated SELECT wrapper
pub trait SelectType<'s>: Sized {
    /// Tag of the candidate a value belongs to
    type Kind: Copy + Eq + fmt::Debug;

    fn descriptor() -> &'static SelectDescriptor;

    /// Tag for the candidate at `index` in the descriptor
    fn kind_at(index: usize) -> Option<Self::Kind>;

    fn from_select(select: Select<'s>) -> Self;

    fn select(&self) -> &Select<'s>;

    /// Bind to the attribute `attr` of `entity`
    fn bind(entity: Entity<'s>, attr: &'static str) -> Self {
        Self::from_select(Select::attribute(entity, attr, Self::descriptor()))
    }

    /// View the value of `outer` as this select
    fn nested(outer: &Select<'s>) -> Self {
        Self::from_select(Select::nested(outer, Self::descriptor()))
    }

    /// An unset value for aggregates of this select, owned by `owner`
    fn detached(owner: Entity<'s>) -> Self {
        Self::from_select(Select::detached(owner, Self::descriptor()))
    }

    /// Which candidate the current value is, `None` if unset
    fn kind(&self) -> Option<Self::Kind> {
        self.select().choice_index().and_then(Self::kind_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::Reals;
    use crate::enums::{Logical, LOGICAL};
    use ifc_lite_memstore::{AttributeDef, EntityDef, MemoryStore, Schema};

    static SIMPLE: SelectDescriptor = SelectDescriptor {
        name: "Simple",
        candidates: &[
            Candidate {
                type_name: "Count",
                kind: ElementKind::Value(StoreKind::Integer),
            },
            Candidate {
                type_name: "Label",
                kind: ElementKind::Value(StoreKind::String),
            },
            Candidate {
                type_name: "Flag",
                kind: ElementKind::Enumeration(&LOGICAL),
            },
        ],
    };

    static REAL: ElementKind = ElementKind::Value(StoreKind::Real);

    static MEASURE: SelectDescriptor = SelectDescriptor {
        name: "Measure",
        candidates: &[
            Candidate {
                type_name: "Length",
                kind: ElementKind::Value(StoreKind::Real),
            },
            Candidate {
                type_name: "Complex",
                kind: ElementKind::Aggregate(&REAL),
            },
            Candidate {
                type_name: "Simple",
                kind: ElementKind::Select(&SIMPLE),
            },
        ],
    };

    static WHO: SelectDescriptor = SelectDescriptor {
        name: "Who",
        candidates: &[
            Candidate {
                type_name: "Organization",
                kind: ElementKind::Entity("Organization"),
            },
            Candidate {
                type_name: "Person",
                kind: ElementKind::Entity("Person"),
            },
        ],
    };

    fn test_store() -> MemoryStore {
        let schema = Schema::builder("TEST")
            .entity(
                EntityDef::new("Actor")
                    .attribute(AttributeDef::select("Who", "Who").optional())
                    .attribute(AttributeDef::select("Value", "Measure").optional()),
            )
            .entity(EntityDef::new("Person"))
            .entity(EntityDef::new("Employee").subtype_of("Person"))
            .entity(EntityDef::new("Organization"))
            .build()
            .unwrap();
        MemoryStore::new(schema)
    }

    #[test]
    fn test_unset_slot() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();
        let who = Select::attribute(actor, "Who", &WHO);

        assert!(!who.is_set());
        assert!(!who.is_type("Organization"));
        assert!(!who.is_type("Person"));
        assert!(who.choice().is_none());
        assert_eq!(who.value(), None);
        assert_eq!(who.type_path(), None);
        assert_eq!(who.as_text(), None);
        assert_eq!(store.live_adbs(), 0);
    }

    #[test]
    fn test_single_tag_exclusivity() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();
        let org = Entity::create(&store, model, "Organization").unwrap();
        let person = Entity::create(&store, model, "Employee").unwrap();
        let who = Select::attribute(actor, "Who", &WHO);

        who.put_entity("Organization", org).unwrap();
        assert!(who.is_type("Organization"));
        assert!(!who.is_type("Person"));
        assert_eq!(who.as_instance(), Some(org.as_handle()));

        who.put_entity("Person", person).unwrap();
        assert!(who.is_type("Person"));
        assert!(!who.is_type("Organization"));
        assert_eq!(who.choice_index(), Some(1));
        assert_eq!(store.live_adbs(), 1);
    }

    #[test]
    fn test_entity_kind_enforced() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();
        let org = Entity::create(&store, model, "Organization").unwrap();
        let who = Select::attribute(actor, "Who", &WHO);

        assert_eq!(
            who.put_entity("Person", org),
            Err(BindingError::kind_mismatch("Person", "Organization"))
        );
        assert!(matches!(
            who.put_entity("Building", org),
            Err(BindingError::UnknownCandidate { .. })
        ));
        assert!(!who.is_set());
        assert_eq!(store.live_adbs(), 0);
    }

    #[test]
    fn test_nested_write_through() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();

        let outer = Select::attribute(actor, "Value", &MEASURE);
        let inner = Select::nested(&outer, &SIMPLE);
        inner.put_value("Count", StoreKind::Integer, 75i64).unwrap();

        // A fresh lens onto the same slot sees the write
        let fresh = Select::attribute(actor, "Value", &MEASURE);
        assert!(fresh.is_type("Simple"));
        assert!(!fresh.is_type("Length"));
        let fresh_inner = Select::nested(&fresh, &SIMPLE);
        assert!(fresh_inner.is_type("Count"));
        assert_eq!(fresh_inner.get_value::<i64>("Count", StoreKind::Integer), Some(75));
        assert_eq!(fresh.type_path().unwrap().to_string(), "Count");

        // And the old lens sees later writes: nothing is cached
        fresh.put_value("Length", StoreKind::Real, 2.5).unwrap();
        assert!(outer.is_type("Length"));
        assert_eq!(inner.choice_index(), None);
        assert_eq!(inner.get_value::<i64>("Count", StoreKind::Integer), None);
        assert_eq!(store.live_adbs(), 1);
    }

    #[test]
    fn test_untyped_probes() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();
        let value = Select::attribute(actor, "Value", &MEASURE);

        Select::nested(&value, &SIMPLE)
            .put_value("Count", StoreKind::Integer, 75i64)
            .unwrap();
        assert_eq!(value.as_int(), Some(75));
        assert_eq!(value.as_text(), Some("75".to_string()));
        assert_eq!(value.as_double(), Some(75.0));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_instance(), None);
        // Typed reads still check the tag
        assert_eq!(value.get_value::<f64>("Length", StoreKind::Real), None);
    }

    #[test]
    fn test_enum_candidate() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();
        let value = Select::attribute(actor, "Value", &MEASURE);
        let simple = Select::nested(&value, &SIMPLE);

        simple.put_enum("Flag", Logical::Unknown).unwrap();
        assert!(simple.is_type("Flag"));
        assert_eq!(simple.get_enum::<Logical>("Flag"), Some(Logical::Unknown));
        assert_eq!(simple.get_enum::<Logical>("Label"), None);
        assert_eq!(value.value().map(|v| v.type_name), Some("Flag"));
    }

    #[test]
    fn test_aggregate_candidate() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();
        let value = Select::attribute(actor, "Value", &MEASURE);

        value.put_aggregate("Complex", &Reals, &[1.0, -2.0]).unwrap();
        assert!(value.is_type("Complex"));
        assert_eq!(value.get_aggregate("Complex", &Reals), Some(vec![1.0, -2.0]));
        assert_eq!(value.get_aggregate("Length", &Reals), None);
        assert_eq!(
            value.value(),
            Some(SelectValue {
                type_name: "Complex",
                value: Element::Aggregate(vec![Element::Real(1.0), Element::Real(-2.0)]),
            })
        );

        value.put_value("Length", StoreKind::Real, 4.0).unwrap();
        assert_eq!(store.live_aggregates(), 0);
        assert_eq!(store.live_adbs(), 1);
    }

    #[test]
    fn test_detached_select_owns_its_value() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();

        let detached = Select::detached(actor, &MEASURE);
        assert!(!detached.is_set());
        detached.put_value("Length", StoreKind::Real, 2.5).unwrap();
        detached.put_value("Length", StoreKind::Real, 3.5).unwrap();
        assert_eq!(store.live_adbs(), 1);

        let same = Select::detached(actor, &MEASURE);
        same.put_element("Length", &Element::Real(3.5)).unwrap();
        assert_eq!(detached, same);

        let shared = detached.clone();
        drop(detached);
        assert_eq!(shared.as_double(), Some(3.5));
        drop(shared);
        drop(same);
        assert_eq!(store.live_adbs(), 0);
    }

    #[test]
    fn test_clone_shares_and_to_detached_copies() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();

        let original = Select::detached(actor, &MEASURE);
        original.put_value("Length", StoreKind::Real, 1.0).unwrap();

        let view = original.clone();
        view.put_value("Length", StoreKind::Real, 2.0).unwrap();
        assert_eq!(original.as_double(), Some(2.0));

        let copy = original.to_detached();
        copy.put_value("Length", StoreKind::Real, 4.0).unwrap();
        assert_eq!(original.as_double(), Some(2.0));
        assert_eq!(copy.as_double(), Some(4.0));
        assert!(copy.is_type("Length"));
        assert_eq!(store.live_adbs(), 2);

        // Copying a slot yields a value the slot no longer controls
        let slot = Select::attribute(actor, "Value", &MEASURE);
        slot.put_value("Length", StoreKind::Real, 8.0).unwrap();
        let taken = slot.to_detached();
        actor.clear("Value").unwrap();
        assert!(!slot.is_set());
        assert_eq!(taken.as_double(), Some(8.0));

        assert!(!Select::detached(actor, &MEASURE).to_detached().is_set());

        drop((original, view, copy, taken));
        assert_eq!(store.live_adbs(), 0);
    }

    #[test]
    fn test_copy_value_between_instances() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let first = Entity::create(&store, model, "Actor").unwrap();
        let second = Entity::create(&store, model, "Actor").unwrap();

        let source = Select::attribute(first, "Value", &SIMPLE);
        source.put_value("Count", StoreKind::Integer, 7i64).unwrap();
        let adb = source.resolve().unwrap();
        second.put("Value", StoreKind::Adb, adb).unwrap();

        first.clear("Value").unwrap();
        let target = Select::attribute(second, "Value", &SIMPLE);
        assert!(target.is_type("Count"));
        assert_eq!(target.get_value::<i64>("Count", StoreKind::Integer), Some(7));
        assert_eq!(store.live_adbs(), 1);
    }

    #[test]
    fn test_put_element_into_slot() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let actor = Entity::create(&store, model, "Actor").unwrap();
        let person = Entity::create(&store, model, "Person").unwrap();

        let who = Select::attribute(actor, "Who", &WHO);
        who.put_element("Person", &Element::Entity(person)).unwrap();
        assert_eq!(
            who.value(),
            Some(SelectValue {
                type_name: "Person",
                value: Element::Entity(person),
            })
        );

        let value = Select::attribute(actor, "Value", &MEASURE);
        value
            .put_element("Label", &Element::Text("beam".into()))
            .unwrap();
        assert_eq!(Select::nested(&value, &SIMPLE).choice_index(), Some(1));
        assert_eq!(
            value.put_element("Length", &Element::Integer(3)),
            Err(BindingError::ElementMismatch("REAL".to_string()))
        );
    }

    #[test]
    fn test_null_owner_releases_adb() {
        let store = test_store();
        let actor = Entity::null(&store, "Actor");
        let value = Select::attribute(actor, "Value", &MEASURE);
        assert!(matches!(
            value.put_value("Length", StoreKind::Real, 1.0),
            Err(BindingError::NullEntity { .. })
        ));
        assert_eq!(store.live_adbs(), 0);
        assert!(!value.is_set());
    }
}
