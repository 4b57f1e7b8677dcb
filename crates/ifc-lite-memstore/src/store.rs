// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MemoryStore - AttributeStore implementation over in-memory maps

use crate::coerce::coerce;
use crate::schema::Schema;
use crate::StoreOptions;

use ifc_lite_sdai::{
    AdbHandle, AggregateHandle, AggregationType, AttributeDescriptor, AttributeStore,
    InstanceHandle, ModelHandle, Result, StoreError, StoreKind, StoreValue,
};
use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// A value with its declared type path; never holds an ADB handle
#[derive(Clone, Debug, PartialEq)]
struct Boxed {
    path: Vec<String>,
    value: StoreValue,
}

impl Boxed {
    fn plain(value: StoreValue) -> Self {
        Self {
            path: Vec::new(),
            value,
        }
    }
}

/// (instance, upper-cased attribute name)
type SlotKey = (InstanceHandle, String);

#[derive(Clone, Debug)]
enum Slot {
    Plain(StoreValue),
    Boxed(AdbHandle),
}

struct Instance {
    type_name: String,
    step_id: u64,
}

struct AggregateData {
    aggregation: Option<AggregationType>,
    members: Vec<Boxed>,
}

#[derive(Default)]
struct State {
    next_handle: u64,
    next_step_id: u64,
    models: FxHashMap<ModelHandle, String>,
    instances: FxHashMap<InstanceHandle, Instance>,
    slots: FxHashMap<SlotKey, Slot>,
    adbs: FxHashMap<AdbHandle, Boxed>,
    aggregates: FxHashMap<AggregateHandle, AggregateData>,
}

impl State {
    fn next(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn new_adb(&mut self, boxed: Boxed) -> AdbHandle {
        let handle = AdbHandle(self.next());
        self.adbs.insert(handle, boxed);
        handle
    }

    fn new_aggregate(&mut self, aggregation: Option<AggregationType>) -> AggregateHandle {
        let handle = AggregateHandle(self.next());
        self.aggregates.insert(
            handle,
            AggregateData {
                aggregation,
                members: Vec::new(),
            },
        );
        handle
    }

    /// Copy a value, duplicating any aggregate it owns
    fn deep_copy(&mut self, value: &StoreValue) -> StoreValue {
        match value {
            StoreValue::Aggregate(source) => {
                let Some(data) = self.aggregates.get(source) else {
                    return value.clone();
                };
                let aggregation = data.aggregation;
                let members = data.members.clone();
                let copy = self.new_aggregate(aggregation);
                let members: Vec<Boxed> = members
                    .iter()
                    .map(|m| Boxed {
                        path: m.path.clone(),
                        value: self.deep_copy(&m.value),
                    })
                    .collect();
                if let Some(data) = self.aggregates.get_mut(&copy) {
                    data.members = members;
                }
                StoreValue::Aggregate(copy)
            }
            StoreValue::Adb(adb) => match self.adbs.get(adb).cloned() {
                Some(boxed) => self.deep_copy(&boxed.value),
                None => value.clone(),
            },
            _ => value.clone(),
        }
    }

    fn deep_copy_boxed(&mut self, boxed: &Boxed) -> Boxed {
        Boxed {
            path: boxed.path.clone(),
            value: self.deep_copy(&boxed.value),
        }
    }

    fn release_value(&mut self, value: &StoreValue) {
        match value {
            StoreValue::Aggregate(h) => self.release_aggregate(*h),
            StoreValue::Adb(h) => self.release_adb(*h),
            _ => {}
        }
    }

    fn release_adb(&mut self, adb: AdbHandle) {
        if let Some(boxed) = self.adbs.remove(&adb) {
            self.release_value(&boxed.value);
        }
    }

    fn release_aggregate(&mut self, aggregate: AggregateHandle) {
        if let Some(data) = self.aggregates.remove(&aggregate) {
            for member in &data.members {
                self.release_value(&member.value);
            }
        }
    }

    /// Check if a store-owned handle is held anywhere but the slot at `except`
    fn is_held(&self, value: &StoreValue, except: Option<&SlotKey>) -> bool {
        let in_slots = self.slots.iter().any(|(key, slot)| {
            Some(key) != except
                && match slot {
                    Slot::Boxed(adb) => *value == StoreValue::Adb(*adb),
                    Slot::Plain(plain) => plain == value,
                }
        });
        match value {
            StoreValue::Adb(_) => in_slots,
            StoreValue::Aggregate(_) => {
                in_slots
                    || self.adbs.values().any(|boxed| &boxed.value == value)
                    || self
                        .aggregates
                        .values()
                        .any(|data| data.members.iter().any(|m| &m.value == value))
            }
            _ => false,
        }
    }

    /// Give an aggregate the collection semantics of the attribute it is attached to
    fn attach_aggregate(
        &mut self,
        aggregate: AggregateHandle,
        aggregation: Option<AggregationType>,
        dedup_sets: bool,
    ) {
        let Some(data) = self.aggregates.get_mut(&aggregate) else {
            return;
        };
        if aggregation.is_some() {
            data.aggregation = aggregation;
        }
        if dedup_sets && data.aggregation == Some(AggregationType::Set) {
            let mut unique: Vec<Boxed> = Vec::with_capacity(data.members.len());
            for member in std::mem::take(&mut data.members) {
                if !unique.contains(&member) {
                    unique.push(member);
                }
            }
            data.members = unique;
        }
    }

    fn release_slot(&mut self, slot: Slot) {
        match slot {
            Slot::Plain(value) => self.release_value(&value),
            Slot::Boxed(adb) => self.release_adb(adb),
        }
    }

    /// Install a slot value, releasing whatever it replaces
    fn replace_slot(&mut self, key: SlotKey, slot: Slot) {
        let same = |old: &Slot| match (old, &slot) {
            (Slot::Boxed(a), Slot::Boxed(b)) => a == b,
            (Slot::Plain(StoreValue::Aggregate(a)), Slot::Plain(StoreValue::Aggregate(b))) => {
                a == b
            }
            _ => false,
        };
        let keep = self.slots.get(&key).is_some_and(same);
        if let Some(old) = self.slots.insert(key, slot) {
            if !keep {
                self.release_slot(old);
            }
        }
    }
}

/// In-memory implementation of [`AttributeStore`]
///
/// Single-threaded: state lives behind a `RefCell`, so the store is `!Sync`.
pub struct MemoryStore {
    schema: Schema,
    options: StoreOptions,
    state: RefCell<State>,
}

impl MemoryStore {
    /// Create an empty store over `schema` with default options
    pub fn new(schema: Schema) -> Self {
        Self::with_options(schema, StoreOptions::default())
    }

    /// Create an empty store with explicit options
    pub fn with_options(schema: Schema, options: StoreOptions) -> Self {
        Self {
            schema,
            options,
            state: RefCell::new(State::default()),
        }
    }

    /// The schema backing reflection and kind-of checks
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Open a new, empty model under the store's schema
    pub fn create_model(&self, schema_name: &str) -> Result<ModelHandle> {
        if !schema_name.eq_ignore_ascii_case(self.schema.name()) {
            return Err(StoreError::schema(format!(
                "store holds {}, cannot open a {} model",
                self.schema.name(),
                schema_name
            )));
        }
        let mut state = self.state.borrow_mut();
        let handle = ModelHandle(state.next());
        state.models.insert(handle, self.schema.name().to_string());
        Ok(handle)
    }

    /// Number of live instances
    pub fn instance_count(&self) -> usize {
        self.state.borrow().instances.len()
    }

    /// Number of live ADBs (attached or not)
    pub fn live_adbs(&self) -> usize {
        self.state.borrow().adbs.len()
    }

    /// Number of live aggregates (attached or not)
    pub fn live_aggregates(&self) -> usize {
        self.state.borrow().aggregates.len()
    }

    /// Validate a write target and return its slot key
    fn writable_slot(
        &self,
        state: &State,
        instance: InstanceHandle,
        attr: &str,
    ) -> Result<SlotKey> {
        let inst = state
            .instances
            .get(&instance)
            .ok_or(StoreError::InvalidInstance(instance))?;

        match self.schema.attribute(&inst.type_name, attr) {
            Some(descriptor) if descriptor.inverse => Err(StoreError::inverse_attribute(
                inst.type_name.clone(),
                attr,
            )),
            Some(_) => Ok((instance, attr.to_ascii_uppercase())),
            None if self.options.strict_attributes => Err(StoreError::unknown_attribute(
                inst.type_name.clone(),
                attr,
            )),
            None => {
                log::warn!(
                    "writing undeclared attribute {} on {} {}",
                    attr,
                    inst.type_name,
                    instance
                );
                Ok((instance, attr.to_ascii_uppercase()))
            }
        }
    }

    fn aggregation_of(
        &self,
        state: &State,
        instance: InstanceHandle,
        attr: &str,
    ) -> Option<AggregationType> {
        let inst = state.instances.get(&instance)?;
        self.schema.attribute(&inst.type_name, attr)?.aggregation
    }
}

impl AttributeStore for MemoryStore {
    fn create_instance(&self, model: ModelHandle, type_name: &str) -> Result<InstanceHandle> {
        let def = self
            .schema
            .entity(type_name)
            .ok_or_else(|| StoreError::UnknownEntity(type_name.to_string()))?;
        if def.is_abstract {
            return Err(StoreError::AbstractEntity(def.name.clone()));
        }

        let mut state = self.state.borrow_mut();
        if !state.models.contains_key(&model) {
            return Err(StoreError::InvalidModel(model));
        }
        let handle = InstanceHandle(state.next());
        state.next_step_id += 1;
        let step_id = state.next_step_id;
        state.instances.insert(
            handle,
            Instance {
                type_name: def.name.clone(),
                step_id,
            },
        );
        Ok(handle)
    }

    fn is_kind_of(&self, instance: InstanceHandle, type_name: &str) -> bool {
        let state = self.state.borrow();
        match state.instances.get(&instance) {
            Some(inst) => self.schema.is_kind_of(&inst.type_name, type_name),
            None => false,
        }
    }

    fn instance_type(&self, instance: InstanceHandle) -> Option<String> {
        let state = self.state.borrow();
        state.instances.get(&instance).map(|i| i.type_name.clone())
    }

    fn step_id(&self, instance: InstanceHandle) -> Option<u64> {
        let state = self.state.borrow();
        state.instances.get(&instance).map(|i| i.step_id)
    }

    fn get_attribute(
        &self,
        instance: InstanceHandle,
        attr: &str,
        kind: StoreKind,
    ) -> Option<StoreValue> {
        let key = (instance, attr.to_ascii_uppercase());
        let mut state = self.state.borrow_mut();
        let slot = state.slots.get(&key)?.clone();

        match (slot, kind) {
            (Slot::Boxed(adb), StoreKind::Adb) => Some(StoreValue::Adb(adb)),
            (Slot::Plain(value), StoreKind::Adb) => {
                // Box in place so the handle handed out stays store-owned
                let adb = state.new_adb(Boxed::plain(value));
                state.slots.insert(key, Slot::Boxed(adb));
                Some(StoreValue::Adb(adb))
            }
            (Slot::Boxed(adb), kind) => coerce(&state.adbs.get(&adb)?.value, kind),
            (Slot::Plain(value), kind) => coerce(&value, kind),
        }
    }

    fn put_attribute(&self, instance: InstanceHandle, attr: &str, value: StoreValue) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let key = self.writable_slot(&state, instance, attr)?;
        // A handle another slot or value already owns is copied, never shared
        let slot = match value {
            StoreValue::Adb(adb) => {
                let boxed = state
                    .adbs
                    .get(&adb)
                    .cloned()
                    .ok_or(StoreError::InvalidAdb(adb))?;
                if state.is_held(&StoreValue::Adb(adb), Some(&key)) {
                    let copy = state.deep_copy_boxed(&boxed);
                    Slot::Boxed(state.new_adb(copy))
                } else {
                    Slot::Boxed(adb)
                }
            }
            StoreValue::Aggregate(aggregate) => {
                if !state.aggregates.contains_key(&aggregate) {
                    return Err(StoreError::InvalidAggregate(aggregate));
                }
                let value = StoreValue::Aggregate(aggregate);
                let owned = if state.is_held(&value, Some(&key)) {
                    state.deep_copy(&value)
                } else {
                    value
                };
                if let StoreValue::Aggregate(handle) = owned {
                    let aggregation = self.aggregation_of(&state, instance, attr);
                    state.attach_aggregate(handle, aggregation, self.options.dedup_sets);
                }
                Slot::Plain(owned)
            }
            other => Slot::Plain(other),
        };
        state.replace_slot(key, slot);
        Ok(())
    }

    fn clear_attribute(&self, instance: InstanceHandle, attr: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let key = self.writable_slot(&state, instance, attr)?;
        if let Some(old) = state.slots.remove(&key) {
            state.release_slot(old);
        }
        Ok(())
    }

    fn create_adb(&self, value: StoreValue) -> AdbHandle {
        let mut state = self.state.borrow_mut();
        let boxed = match value {
            StoreValue::Adb(source) => match state.adbs.get(&source).cloned() {
                Some(boxed) => state.deep_copy_boxed(&boxed),
                None => return AdbHandle::NULL,
            },
            other => Boxed::plain(other),
        };
        state.new_adb(boxed)
    }

    fn set_adb_type_path(&self, adb: AdbHandle, depth: usize, type_name: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let boxed = state.adbs.get_mut(&adb).ok_or(StoreError::InvalidAdb(adb))?;
        if depth > boxed.path.len() {
            return Err(StoreError::InvalidAdb(adb));
        }
        boxed.path.truncate(depth);
        boxed.path.push(type_name.to_string());
        Ok(())
    }

    fn adb_type_path(&self, adb: AdbHandle, depth: usize) -> Option<String> {
        let state = self.state.borrow();
        state.adbs.get(&adb)?.path.get(depth).cloned()
    }

    fn adb_value(&self, adb: AdbHandle, kind: StoreKind) -> Option<StoreValue> {
        let state = self.state.borrow();
        let boxed = state.adbs.get(&adb)?;
        match kind {
            StoreKind::Adb => Some(StoreValue::Adb(adb)),
            kind => coerce(&boxed.value, kind),
        }
    }

    fn release_adb(&self, adb: AdbHandle) {
        self.state.borrow_mut().release_adb(adb);
    }

    fn create_aggregate(
        &self,
        owner: InstanceHandle,
        attr: Option<&str>,
    ) -> Result<AggregateHandle> {
        let mut state = self.state.borrow_mut();
        if !state.instances.contains_key(&owner) {
            return Err(StoreError::InvalidInstance(owner));
        }

        match attr {
            Some(attr) => {
                let key = self.writable_slot(&state, owner, attr)?;
                let aggregation = self.aggregation_of(&state, owner, attr);
                let handle = state.new_aggregate(aggregation);
                state.replace_slot(key, Slot::Plain(StoreValue::Aggregate(handle)));
                Ok(handle)
            }
            None => Ok(state.new_aggregate(None)),
        }
    }

    fn aggregate_member_count(&self, aggregate: AggregateHandle) -> usize {
        let state = self.state.borrow();
        state
            .aggregates
            .get(&aggregate)
            .map_or(0, |data| data.members.len())
    }

    fn aggregate_element(
        &self,
        aggregate: AggregateHandle,
        index: usize,
        kind: StoreKind,
    ) -> Option<StoreValue> {
        let mut state = self.state.borrow_mut();
        let member = state.aggregates.get(&aggregate)?.members.get(index)?.clone();
        match kind {
            StoreKind::Adb => {
                let copy = state.deep_copy_boxed(&member);
                Some(StoreValue::Adb(state.new_adb(copy)))
            }
            kind => coerce(&member.value, kind),
        }
    }

    fn append_aggregate_element(
        &self,
        aggregate: AggregateHandle,
        value: StoreValue,
    ) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let aggregation = state
            .aggregates
            .get(&aggregate)
            .ok_or(StoreError::InvalidAggregate(aggregate))?
            .aggregation;

        let member = match value {
            StoreValue::Adb(adb) => {
                let boxed = state
                    .adbs
                    .get(&adb)
                    .cloned()
                    .ok_or(StoreError::InvalidAdb(adb))?;
                state.deep_copy_boxed(&boxed)
            }
            StoreValue::Aggregate(nested) => {
                if !state.aggregates.contains_key(&nested) {
                    return Err(StoreError::InvalidAggregate(nested));
                }
                let value = StoreValue::Aggregate(nested);
                if state.is_held(&value, None) {
                    Boxed::plain(state.deep_copy(&value))
                } else {
                    Boxed::plain(value)
                }
            }
            other => Boxed::plain(other),
        };

        let dedup = self.options.dedup_sets && aggregation == Some(AggregationType::Set);
        if let Some(data) = state.aggregates.get_mut(&aggregate) {
            if dedup && data.members.contains(&member) {
                return Ok(());
            }
            data.members.push(member);
        }
        Ok(())
    }

    fn release_aggregate(&self, aggregate: AggregateHandle) {
        self.state.borrow_mut().release_aggregate(aggregate);
    }

    fn attributes(&self, entity: &str) -> Vec<AttributeDescriptor> {
        self.schema.attributes(entity).to_vec()
    }

    fn supertypes(&self, entity: &str) -> Vec<String> {
        self.schema.supertypes(entity)
    }

    fn is_abstract(&self, entity: &str) -> bool {
        self.schema.entity(entity).is_some_and(|def| def.is_abstract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeDef, EntityDef};
    use ifc_lite_sdai::AttributeStoreExt;

    fn test_store() -> MemoryStore {
        let schema = Schema::builder("TEST")
            .entity(
                EntityDef::new("Named")
                    .abstract_entity()
                    .attribute(AttributeDef::text("Name").optional()),
            )
            .entity(
                EntityDef::new("Part")
                    .subtype_of("Named")
                    .attribute(AttributeDef::simple("Count").optional())
                    .attribute(AttributeDef::select("Value", "Measure").optional())
                    .attribute(AttributeDef::aggregate("Tags", AggregationType::Set).optional())
                    .attribute(AttributeDef::aggregate("Steps", AggregationType::List).optional())
                    .attribute(AttributeDef::entity("UsedIn", "Part").inverse()),
            )
            .build()
            .unwrap();
        MemoryStore::new(schema)
    }

    #[test]
    fn test_create_instance() {
        let store = test_store();
        assert!(store.create_model("IFC2X3").is_err());
        let model = store.create_model("test").unwrap();
        let part = store.create_instance(model, "PART").unwrap();
        assert!(!part.is_null());
        assert_eq!(store.instance_type(part).as_deref(), Some("Part"));
        assert_eq!(store.step_id(part), Some(1));
        assert!(store.is_kind_of(part, "Named"));
        assert!(!store.is_kind_of(InstanceHandle::NULL, "Named"));

        assert!(matches!(
            store.create_instance(model, "Named"),
            Err(StoreError::AbstractEntity(_))
        ));
        assert!(matches!(
            store.create_instance(model, "Wheel"),
            Err(StoreError::UnknownEntity(_))
        ));
        assert!(matches!(
            store.create_instance(ModelHandle(999), "Part"),
            Err(StoreError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_put_get_attribute() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();

        assert_eq!(store.get_attribute(part, "Name", StoreKind::String), None);
        store
            .put_attribute(part, "name", StoreValue::String("Bolt".into()))
            .unwrap();
        assert_eq!(
            store.get_as::<String>(part, "NAME", StoreKind::String),
            Some("Bolt".to_string())
        );

        store.put_attribute(part, "Count", StoreValue::Integer(4)).unwrap();
        assert_eq!(store.get_as::<f64>(part, "Count", StoreKind::Real), Some(4.0));

        store.clear_attribute(part, "Count").unwrap();
        assert_eq!(store.get_attribute(part, "Count", StoreKind::Integer), None);
    }

    #[test]
    fn test_write_errors() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();

        assert!(matches!(
            store.put_attribute(part, "Colour", StoreValue::Integer(1)),
            Err(StoreError::UnknownAttribute { .. })
        ));
        assert!(matches!(
            store.put_attribute(part, "UsedIn", StoreValue::Instance(part)),
            Err(StoreError::InverseAttribute { .. })
        ));
        assert!(matches!(
            store.put_attribute(InstanceHandle(4242), "Name", StoreValue::Integer(1)),
            Err(StoreError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_lenient_attributes() {
        let schema = test_store().schema().clone();
        let store = MemoryStore::with_options(
            schema,
            StoreOptions::default().with_strict_attributes(false),
        );
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();
        store
            .put_attribute(part, "Colour", StoreValue::String("red".into()))
            .unwrap();
        assert_eq!(
            store.get_as::<String>(part, "Colour", StoreKind::String),
            Some("red".to_string())
        );
    }

    #[test]
    fn test_adb_slot() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();

        let adb = store.create_adb(StoreValue::Integer(75));
        store.set_adb_type_path(adb, 0, "IFCINTEGER").unwrap();
        store.put_attribute(part, "Value", StoreValue::Adb(adb)).unwrap();

        assert_eq!(store.get_attribute_adb(part, "Value"), Some(adb));
        assert_eq!(store.adb_type_path(adb, 0).as_deref(), Some("IFCINTEGER"));
        assert_eq!(store.adb_type_path(adb, 1), None);
        assert_eq!(
            store.get_as::<String>(part, "Value", StoreKind::String),
            Some("75".to_string())
        );

        // Replacing the slot frees the previous ADB
        let other = store.create_adb(StoreValue::Real(1.5));
        store.put_attribute(part, "Value", StoreValue::Adb(other)).unwrap();
        assert_eq!(store.live_adbs(), 1);
        assert_eq!(store.adb_value(adb, StoreKind::Integer), None);
    }

    #[test]
    fn test_plain_slot_boxed_on_read() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();
        store.put_attribute(part, "Value", StoreValue::Instance(part)).unwrap();

        let adb = store.get_attribute_adb(part, "Value").unwrap();
        assert_eq!(store.get_attribute_adb(part, "Value"), Some(adb));
        assert_eq!(store.adb_type_path(adb, 0), None);
        assert_eq!(store.adb_value_as::<InstanceHandle>(adb, StoreKind::Instance), Some(part));
        assert_eq!(store.live_adbs(), 1);
    }

    #[test]
    fn test_type_path_depth() {
        let store = test_store();
        let adb = store.create_adb(StoreValue::Real(1.0));
        assert!(store.set_adb_type_path(adb, 1, "TOO_DEEP").is_err());
        store.put_type_path(adb, &["A", "B"]).unwrap();
        assert_eq!(store.type_path(adb).to_string(), "A/B");
        store.set_adb_type_path(adb, 0, "C").unwrap();
        assert_eq!(store.type_path(adb).to_string(), "C");
    }

    #[test]
    fn test_set_dedup() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();

        let tags = store.create_aggregate(part, Some("Tags")).unwrap();
        for tag in ["a", "b", "a"] {
            store
                .append_aggregate_element(tags, StoreValue::String(tag.into()))
                .unwrap();
        }
        assert_eq!(store.aggregate_member_count(tags), 2);

        let steps = store.create_aggregate(part, Some("Steps")).unwrap();
        for step in [1, 1, 2] {
            store
                .append_aggregate_element(steps, StoreValue::Integer(step))
                .unwrap();
        }
        assert_eq!(store.aggregate_member_count(steps), 3);
        assert_eq!(
            store.aggregate_element_as::<i64>(steps, 2, StoreKind::Integer),
            Some(2)
        );
        assert_eq!(store.aggregate_element(steps, 3, StoreKind::Integer), None);
    }

    #[test]
    fn test_nested_aggregate_ownership() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();

        let outer = store.create_aggregate(part, Some("Steps")).unwrap();
        let inner = store.create_aggregate(part, None).unwrap();
        store.append_aggregate_element(inner, StoreValue::Real(1.0)).unwrap();
        store
            .append_aggregate_element(outer, StoreValue::Aggregate(inner))
            .unwrap();
        assert_eq!(store.live_aggregates(), 2);

        // Re-binding the attribute frees the old tree
        store.create_aggregate(part, Some("Steps")).unwrap();
        assert_eq!(store.live_aggregates(), 1);
    }

    #[test]
    fn test_adb_elements_are_copies() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();
        let list = store.create_aggregate(part, Some("Steps")).unwrap();

        let adb = store.create_adb(StoreValue::String("Label".into()));
        store.set_adb_type_path(adb, 0, "IFCLABEL").unwrap();
        store.append_aggregate_element(list, StoreValue::Adb(adb)).unwrap();
        store.release_adb(adb);

        let read = store
            .aggregate_element_as::<AdbHandle>(list, 0, StoreKind::Adb)
            .unwrap();
        assert_ne!(read, adb);
        assert_eq!(store.type_path(read).to_string(), "IFCLABEL");
        store.release_adb(read);
        assert_eq!(store.live_adbs(), 0);
    }

    #[test]
    fn test_attached_adb_is_copied_into_second_slot() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let a = store.create_instance(model, "Part").unwrap();
        let b = store.create_instance(model, "Part").unwrap();

        let adb = store.create_adb(StoreValue::Integer(7));
        store.set_adb_type_path(adb, 0, "Count").unwrap();
        store.put_attribute(a, "Value", StoreValue::Adb(adb)).unwrap();

        let held = store.get_attribute_adb(a, "Value").unwrap();
        store.put_attribute(b, "Value", StoreValue::Adb(held)).unwrap();
        let copy = store.get_attribute_adb(b, "Value").unwrap();
        assert_ne!(copy, held);
        assert_eq!(store.type_path(copy).to_string(), "Count");
        assert_eq!(store.live_adbs(), 2);

        store.clear_attribute(a, "Value").unwrap();
        assert_eq!(store.get_as::<i64>(b, "Value", StoreKind::Integer), Some(7));
        assert_eq!(store.live_adbs(), 1);
    }

    #[test]
    fn test_attached_aggregate_is_copied_into_second_slot() {
        let store = test_store();
        let model = store.create_model("TEST").unwrap();
        let a = store.create_instance(model, "Part").unwrap();
        let b = store.create_instance(model, "Part").unwrap();

        let steps = store.create_aggregate(a, Some("Steps")).unwrap();
        for step in [1, 2] {
            store
                .append_aggregate_element(steps, StoreValue::Integer(step))
                .unwrap();
        }
        store.put_attribute(b, "Steps", StoreValue::Aggregate(steps)).unwrap();
        assert_eq!(store.live_aggregates(), 2);

        // Rewriting the first slot leaves the second untouched
        store.create_aggregate(a, Some("Steps")).unwrap();
        let copied = store
            .get_as::<AggregateHandle>(b, "Steps", StoreKind::Aggregate)
            .unwrap();
        assert_ne!(copied, steps);
        assert_eq!(store.aggregate_member_count(copied), 2);
        assert_eq!(
            store.aggregate_element_as::<i64>(copied, 1, StoreKind::Integer),
            Some(2)
        );

        // Re-putting a slot's own aggregate keeps it in place
        store.put_attribute(b, "Steps", StoreValue::Aggregate(copied)).unwrap();
        assert_eq!(
            store.get_as::<AggregateHandle>(b, "Steps", StoreKind::Aggregate),
            Some(copied)
        );
        assert_eq!(store.live_aggregates(), 2);
    }

    #[test]
    fn test_attached_aggregate_is_copied_when_nested() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();

        let steps = store.create_aggregate(part, Some("Steps")).unwrap();
        store.append_aggregate_element(steps, StoreValue::Real(1.0)).unwrap();
        let outer = store.create_aggregate(part, None).unwrap();
        store
            .append_aggregate_element(outer, StoreValue::Aggregate(steps))
            .unwrap();
        assert_eq!(store.live_aggregates(), 3);

        store.release_aggregate(outer);
        assert_eq!(store.aggregate_member_count(steps), 1);
        assert_eq!(store.live_aggregates(), 1);
    }

    #[test]
    fn test_set_semantics_applied_on_attach() {
        let store = test_store();
        let part = store.create_instance(store.create_model("TEST").unwrap(), "Part").unwrap();

        let tags = store.create_aggregate(part, None).unwrap();
        for tag in ["a", "b", "a"] {
            store
                .append_aggregate_element(tags, StoreValue::String(tag.into()))
                .unwrap();
        }
        assert_eq!(store.aggregate_member_count(tags), 3);

        store.put_attribute(part, "Tags", StoreValue::Aggregate(tags)).unwrap();
        assert_eq!(store.aggregate_member_count(tags), 2);
        store
            .append_aggregate_element(tags, StoreValue::String("b".into()))
            .unwrap();
        assert_eq!(store.aggregate_member_count(tags), 2);
    }

    #[test]
    fn test_reflection() {
        let store = test_store();
        let attrs = store.attributes("Part");
        assert_eq!(attrs[0].name, "Name");
        assert_eq!(attrs[0].declaring_entity, "Named");
        assert_eq!(store.supertypes("Part"), vec!["Named".to_string()]);
        assert!(store.is_abstract("Named"));
        assert!(!store.is_abstract("Part"));
    }
}
