// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity views over store instances
//!
//! An [`Entity`] is a handle plus the EXPRESS type it is viewed as. Binding
//! checks the kind once; a handle that is not of the declared kind degrades
//! to null instead of failing. Two views of the same instance compare equal
//! whatever their declared kinds.

use crate::aggregation::{self, ElementCodec};
use crate::enums::Enumeration;
use crate::error::{BindingError, Result};
use crate::select::SelectType;
use ifc_lite_sdai::{
    AggregateHandle, AttributeStore, AttributeStoreExt, InstanceHandle, ModelHandle, Scalar,
    StoreKind, StoreValue,
};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Typed view of one store instance
#[derive(Clone, Copy)]
pub struct Entity<'s> {
    store: &'s dyn AttributeStore,
    handle: InstanceHandle,
    declared: &'static str,
}

impl<'s> Entity<'s> {
    /// View `handle` as `declared`, degrading to null if it is not of that kind
    pub fn bind(
        store: &'s dyn AttributeStore,
        handle: InstanceHandle,
        declared: &'static str,
    ) -> Self {
        let handle = if handle.is_null() || store.is_kind_of(handle, declared) {
            handle
        } else {
            log::debug!(
                "{} is {:?}, not a kind of {}; binding as null",
                handle,
                store.instance_type(handle),
                declared
            );
            InstanceHandle::NULL
        };
        Self {
            store,
            handle,
            declared,
        }
    }

    /// Like [`bind`](Self::bind), but `None` instead of a null view
    pub fn try_bind(
        store: &'s dyn AttributeStore,
        handle: InstanceHandle,
        declared: &'static str,
    ) -> Option<Self> {
        let entity = Self::bind(store, handle, declared);
        (!entity.is_null()).then_some(entity)
    }

    /// A null view of kind `declared`
    pub fn null(store: &'s dyn AttributeStore, declared: &'static str) -> Self {
        Self {
            store,
            handle: InstanceHandle::NULL,
            declared,
        }
    }

    /// Create a new instance of `declared` in `model`
    pub fn create(
        store: &'s dyn AttributeStore,
        model: ModelHandle,
        declared: &'static str,
    ) -> Result<Self> {
        let handle = store.create_instance(model, declared)?;
        Ok(Self {
            store,
            handle,
            declared,
        })
    }

    /// The underlying instance handle
    pub fn as_handle(&self) -> InstanceHandle {
        self.handle
    }

    /// The store this view reads from
    pub fn store(&self) -> &'s dyn AttributeStore {
        self.store
    }

    /// The EXPRESS type this view was bound as
    pub fn declared_kind(&self) -> &'static str {
        self.declared
    }

    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Check if the instance is, or derives from, `type_name`
    pub fn is_kind_of(&self, type_name: &str) -> bool {
        !self.is_null() && self.store.is_kind_of(self.handle, type_name)
    }

    /// Exchange-file line number (`#n`)
    pub fn step_id(&self) -> Option<u64> {
        if self.is_null() {
            return None;
        }
        self.store.step_id(self.handle)
    }

    /// Name of the type the instance was created as
    pub fn entity_name(&self) -> Option<String> {
        if self.is_null() {
            return None;
        }
        self.store.instance_type(self.handle)
    }

    fn writable(&self, attr: &str) -> Result<InstanceHandle> {
        if self.is_null() {
            Err(BindingError::null_entity(self.declared, attr))
        } else {
            Ok(self.handle)
        }
    }

    /// Read a scalar attribute
    pub fn get<T: Scalar>(&self, attr: &str, kind: StoreKind) -> Option<T> {
        if self.is_null() {
            return None;
        }
        self.store.get_as(self.handle, attr, kind)
    }

    /// Write a scalar attribute
    pub fn put<T: Scalar>(&self, attr: &str, kind: StoreKind, value: T) -> Result<()> {
        let handle = self.writable(attr)?;
        let value = value
            .into_store(kind)
            .ok_or(BindingError::IncompatibleKind(kind))?;
        self.store.put_attribute(handle, attr, value)?;
        Ok(())
    }

    /// Reset an attribute to unset
    pub fn clear(&self, attr: &str) -> Result<()> {
        let handle = self.writable(attr)?;
        self.store.clear_attribute(handle, attr)?;
        Ok(())
    }

    /// Read an entity reference, bound as `E`
    pub fn get_entity<E: EntityType<'s>>(&self, attr: &str) -> Option<E> {
        let handle = self.get::<InstanceHandle>(attr, StoreKind::Instance)?;
        E::try_bind(self.store, handle)
    }

    /// Write an entity reference whose declared domain is `domain`
    pub fn put_entity(&self, attr: &str, domain: &str, value: Entity<'_>) -> Result<()> {
        let handle = self.writable(attr)?;
        let target = checked_reference(domain, &value)?;
        self.store
            .put_attribute(handle, attr, StoreValue::Instance(target))?;
        Ok(())
    }

    /// Read an enumeration attribute
    pub fn get_enum<E: Enumeration>(&self, attr: &str) -> Option<E> {
        let name = self.get::<String>(attr, E::table().kind)?;
        let value = E::from_name(&name);
        if value.is_none() {
            log::debug!("{} is not an enumerator of {}", name, E::table().name);
        }
        value
    }

    /// Write an enumeration attribute
    pub fn put_enum<E: Enumeration>(&self, attr: &str, value: E) -> Result<()> {
        let name = value.name()?;
        self.put(attr, E::table().kind, name.to_string())
    }

    /// Select lens onto an attribute slot
    pub fn select<S: SelectType<'s>>(&self, attr: &'static str) -> S {
        S::bind(*self, attr)
    }

    /// The aggregate currently held by an attribute
    pub fn get_aggregate(&self, attr: &str) -> Option<AggregateHandle> {
        self.get::<AggregateHandle>(attr, StoreKind::Aggregate)
            .and_then(AggregateHandle::non_null)
    }

    /// Decode an aggregate attribute with `codec`
    pub fn get_items<C: ElementCodec<'s>>(&self, attr: &str, codec: &C) -> Vec<C::Item> {
        aggregation::from_attribute(*self, attr, codec)
    }

    /// Replace an aggregate attribute with `items`
    pub fn put_items<C: ElementCodec<'s>>(
        &self,
        attr: &str,
        codec: &C,
        items: &[C::Item],
    ) -> Result<AggregateHandle> {
        aggregation::to_aggregate(*self, Some(attr), codec, items)
    }
}

/// Validate an entity reference against a declared domain
pub(crate) fn checked_reference(domain: &str, value: &Entity<'_>) -> Result<InstanceHandle> {
    if value.is_null() {
        return Err(BindingError::NullValue(domain.to_string()));
    }
    if !value.is_kind_of(domain) {
        return Err(BindingError::kind_mismatch(
            domain,
            value.entity_name().unwrap_or_default(),
        ));
    }
    Ok(value.as_handle())
}

impl PartialEq for Entity<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Entity<'_> {}

impl PartialOrd for Entity<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entity<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.handle.cmp(&other.handle)
    }
}

impl Hash for Entity<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl fmt::Debug for Entity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.declared, self.handle)
    }
}

impl From<Entity<'_>> for InstanceHandle {
    fn from(entity: Entity<'_>) -> Self {
        entity.handle
    }
}

/// A generated entity wrapper
///
/// Implementors are thin newtypes over [`Entity`] whose declared kind is
/// [`ENTITY_NAME`](Self::ENTITY_NAME).
pub trait EntityType<'s>: Copy + Sized {
    /// EXPRESS entity name
    const ENTITY_NAME: &'static str;

    /// Wrap an already-checked view
    fn from_entity(entity: Entity<'s>) -> Self;

    /// The untyped view
    fn entity(&self) -> Entity<'s>;

    /// View `handle` as this type, null if it is not of this kind
    fn bind(store: &'s dyn AttributeStore, handle: InstanceHandle) -> Self {
        Self::from_entity(Entity::bind(store, handle, Self::ENTITY_NAME))
    }

    /// View `handle` as this type, `None` if it is null or of another kind
    fn try_bind(store: &'s dyn AttributeStore, handle: InstanceHandle) -> Option<Self> {
        Entity::try_bind(store, handle, Self::ENTITY_NAME).map(Self::from_entity)
    }

    /// A null view
    fn null(store: &'s dyn AttributeStore) -> Self {
        Self::from_entity(Entity::null(store, Self::ENTITY_NAME))
    }

    /// Create a new instance in `model`
    fn create(store: &'s dyn AttributeStore, model: ModelHandle) -> Result<Self> {
        Entity::create(store, model, Self::ENTITY_NAME).map(Self::from_entity)
    }

    /// Re-view the same instance as another type, null if it is not of that kind
    fn cast<E: EntityType<'s>>(&self) -> E {
        let entity = self.entity();
        E::bind(entity.store(), entity.as_handle())
    }
}
