// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aggregate serializers
//!
//! One generic pair of functions moves a native `Vec` to and from a store
//! aggregate: [`from_aggregate`] and [`to_aggregate`]. What differs per
//! element kind is an [`ElementCodec`], an encode/decode pair for one
//! member. Typed codecs exist for every element kind the generated wrappers
//! use; [`Dynamic`] decodes any [`ElementKind`] into the tagged [`Element`].
//!
//! Decoding is tolerant: a member that cannot be decoded is skipped.

use crate::entity::{checked_reference, Entity, EntityType};
use crate::enums::{EnumTable, EnumValue, Enumeration};
use crate::error::{BindingError, Result};
use crate::select::{Select, SelectDescriptor, SelectType};
use ifc_lite_sdai::{
    AggregateHandle, AttributeStore, AttributeStoreExt, InstanceHandle, Scalar, StoreKind,
    StoreValue,
};
use std::fmt;
use std::marker::PhantomData;

/// Declared kind of an aggregate member or select candidate
#[derive(Clone, Copy, Debug)]
pub enum ElementKind {
    /// Integer, real, boolean, string or binary
    Value(StoreKind),
    /// Reference to an instance of the named entity (or a subtype)
    Entity(&'static str),
    Enumeration(&'static EnumTable),
    /// Nested aggregate
    Aggregate(&'static ElementKind),
    Select(&'static SelectDescriptor),
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Value(kind) => write!(f, "{}", kind),
            ElementKind::Entity(name) => f.write_str(name),
            ElementKind::Enumeration(table) => f.write_str(table.name),
            ElementKind::Aggregate(inner) => write!(f, "LIST OF {}", inner),
            ElementKind::Select(descriptor) => f.write_str(descriptor.name),
        }
    }
}

/// A decoded member of any kind
#[derive(Clone, Debug, PartialEq)]
pub enum Element<'s> {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    /// String or binary text
    Text(String),
    Entity(Entity<'s>),
    Enumeration(EnumValue),
    Aggregate(Vec<Element<'s>>),
    Select(Select<'s>),
}

/// Encode/decode capability for one element kind
pub trait ElementCodec<'s> {
    type Item;

    /// Decode the member at `index`, `None` if it does not fit this kind
    fn decode(&self, owner: Entity<'s>, aggregate: AggregateHandle, index: usize)
        -> Option<Self::Item>;

    /// Encode one item into a value the caller owns
    ///
    /// `Ok(None)` means the item has nothing to store (an unset select).
    fn encode(&self, owner: Entity<'s>, item: &Self::Item) -> Result<Option<StoreValue>>;
}

/// Decode every member of `aggregate`, skipping the ones that do not decode
pub fn from_aggregate<'s, C: ElementCodec<'s>>(
    owner: Entity<'s>,
    aggregate: AggregateHandle,
    codec: &C,
) -> Vec<C::Item> {
    let count = owner.store().aggregate_member_count(aggregate);
    let mut items = Vec::with_capacity(count);
    for index in 0..count {
        match codec.decode(owner, aggregate, index) {
            Some(item) => items.push(item),
            None => log::debug!(
                "skipping undecodable member {} of aggregate {}",
                index,
                aggregate
            ),
        }
    }
    items
}

/// Decode the aggregate held by `owner.attr`; empty if unset
pub fn from_attribute<'s, C: ElementCodec<'s>>(
    owner: Entity<'s>,
    attr: &str,
    codec: &C,
) -> Vec<C::Item> {
    match owner.get_aggregate(attr) {
        Some(aggregate) => from_aggregate(owner, aggregate, codec),
        None => Vec::new(),
    }
}

/// Build an aggregate from `items`, bound to `owner.attr` or anonymous
///
/// Items are encoded and appended to a fresh anonymous aggregate, which is
/// attached to `owner.attr` only once complete. On any failure the handles
/// produced so far are released and the attribute keeps its previous value.
pub fn to_aggregate<'s, C: ElementCodec<'s>>(
    owner: Entity<'s>,
    attr: Option<&str>,
    codec: &C,
    items: &[C::Item],
) -> Result<AggregateHandle> {
    if owner.is_null() {
        return Err(BindingError::null_entity(
            owner.declared_kind(),
            attr.unwrap_or("<nested aggregate>"),
        ));
    }
    let store = owner.store();

    let mut encoded = Vec::with_capacity(items.len());
    for item in items {
        match codec.encode(owner, item) {
            Ok(Some(value)) => encoded.push(value),
            Ok(None) => log::debug!("skipping unset element while writing {:?}", attr),
            Err(err) => {
                release_values(store, &encoded);
                return Err(err);
            }
        }
    }

    let aggregate = match store.create_aggregate(owner.as_handle(), None) {
        Ok(aggregate) => aggregate,
        Err(err) => {
            release_values(store, &encoded);
            return Err(err.into());
        }
    };

    for (position, value) in encoded.iter().enumerate() {
        // The store copies ADBs and adopts nested aggregates
        let appended = store.append_aggregate_element(aggregate, value.clone());
        if let StoreValue::Adb(adb) = value {
            store.release_adb(*adb);
        }
        if let Err(err) = appended {
            if !matches!(value, StoreValue::Adb(_)) {
                release_value(store, value);
            }
            release_values(store, &encoded[position + 1..]);
            store.release_aggregate(aggregate);
            return Err(err.into());
        }
    }

    if let Some(attr) = attr {
        let attached =
            store.put_attribute(owner.as_handle(), attr, StoreValue::Aggregate(aggregate));
        if let Err(err) = attached {
            store.release_aggregate(aggregate);
            return Err(err.into());
        }
    }
    Ok(aggregate)
}

fn release_value(store: &dyn AttributeStore, value: &StoreValue) {
    match value {
        StoreValue::Adb(adb) => store.release_adb(*adb),
        StoreValue::Aggregate(aggregate) => store.release_aggregate(*aggregate),
        _ => {}
    }
}

fn release_values(store: &dyn AttributeStore, values: &[StoreValue]) {
    for value in values {
        release_value(store, value);
    }
}

/// Decode one value of `kind`, reading through `read`
///
/// Select members are read as ADBs the caller owns, so `read` must hand out
/// fresh ADBs for [`StoreKind::Adb`].
pub(crate) fn decode_element<'s>(
    owner: Entity<'s>,
    kind: &ElementKind,
    read: impl Fn(StoreKind) -> Option<StoreValue>,
) -> Option<Element<'s>> {
    match *kind {
        ElementKind::Value(store_kind) => match read(store_kind)? {
            StoreValue::Integer(v) => Some(Element::Integer(v)),
            StoreValue::Real(v) => Some(Element::Real(v)),
            StoreValue::Boolean(v) => Some(Element::Boolean(v)),
            other => other.as_text().map(|text| Element::Text(text.to_string())),
        },
        ElementKind::Entity(domain) => {
            let handle = read(StoreKind::Instance)?.as_instance()?;
            Entity::try_bind(owner.store(), handle, domain).map(Element::Entity)
        }
        ElementKind::Enumeration(table) => {
            let value = read(table.kind)?;
            EnumValue::from_name(table, value.as_text()?).map(Element::Enumeration)
        }
        ElementKind::Aggregate(inner) => {
            let nested = read(StoreKind::Aggregate)?.as_aggregate()?.non_null()?;
            Some(Element::Aggregate(from_aggregate(
                owner,
                nested,
                &Dynamic(inner),
            )))
        }
        ElementKind::Select(descriptor) => match read(StoreKind::Adb)? {
            StoreValue::Adb(adb) if !adb.is_null() => {
                Some(Element::Select(Select::adopt(owner, adb, descriptor)))
            }
            _ => None,
        },
    }
}

/// Encode one element of `kind` into a value the caller owns
pub(crate) fn encode_element<'s>(
    owner: Entity<'s>,
    kind: &ElementKind,
    element: &Element<'s>,
) -> Result<Option<StoreValue>> {
    let value = match (*kind, element) {
        (ElementKind::Value(k), Element::Integer(v)) => (*v).into_store(k),
        (ElementKind::Value(k), Element::Real(v)) => (*v).into_store(k),
        (ElementKind::Value(k), Element::Boolean(v)) => (*v).into_store(k),
        (ElementKind::Value(k), Element::Text(v)) => v.clone().into_store(k),
        (ElementKind::Entity(domain), Element::Entity(entity)) => {
            Some(StoreValue::Instance(checked_reference(domain, entity)?))
        }
        (ElementKind::Enumeration(table), Element::Enumeration(value))
            if value.table() == table =>
        {
            value.name().to_string().into_store(table.kind)
        }
        (ElementKind::Aggregate(inner), Element::Aggregate(items)) => Some(StoreValue::Aggregate(
            to_aggregate(owner, None, &Dynamic(inner), items)?,
        )),
        (ElementKind::Select(_), Element::Select(select)) => {
            return Ok(select.snapshot_adb().map(StoreValue::Adb));
        }
        _ => None,
    };
    value
        .map(Some)
        .ok_or_else(|| BindingError::ElementMismatch(kind.to_string()))
}

macro_rules! primitive_codec {
    ($(#[$meta:meta])* $name:ident, $native:ty, $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl<'s> ElementCodec<'s> for $name {
            type Item = $native;

            fn decode(
                &self,
                owner: Entity<'s>,
                aggregate: AggregateHandle,
                index: usize,
            ) -> Option<$native> {
                owner
                    .store()
                    .aggregate_element_as(aggregate, index, StoreKind::$kind)
            }

            fn encode(&self, _owner: Entity<'s>, item: &$native) -> Result<Option<StoreValue>> {
                Ok(Some(StoreValue::$kind(*item)))
            }
        }
    };
}

primitive_codec!(
    /// INTEGER members
    Integers,
    i64,
    Integer
);
primitive_codec!(
    /// REAL members
    Reals,
    f64,
    Real
);
primitive_codec!(
    /// BOOLEAN members
    Booleans,
    bool,
    Boolean
);

/// STRING or BINARY members
#[derive(Clone, Copy, Debug)]
pub struct Texts(pub StoreKind);

impl Texts {
    pub const STRING: Texts = Texts(StoreKind::String);
    pub const BINARY: Texts = Texts(StoreKind::Binary);
}

impl<'s> ElementCodec<'s> for Texts {
    type Item = String;

    fn decode(&self, owner: Entity<'s>, aggregate: AggregateHandle, index: usize) -> Option<String> {
        owner.store().aggregate_element_as(aggregate, index, self.0)
    }

    fn encode(&self, _owner: Entity<'s>, item: &String) -> Result<Option<StoreValue>> {
        item.clone()
            .into_store(self.0)
            .map(Some)
            .ok_or(BindingError::IncompatibleKind(self.0))
    }
}

/// Entity reference members bound as `E`
///
/// Members that are not a kind of `E` are skipped on decode.
pub struct Entities<E>(PhantomData<E>);

impl<E> Entities<E> {
    pub const fn new() -> Self {
        Entities(PhantomData)
    }
}

impl<E> Default for Entities<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, E: EntityType<'s>> ElementCodec<'s> for Entities<E> {
    type Item = E;

    fn decode(&self, owner: Entity<'s>, aggregate: AggregateHandle, index: usize) -> Option<E> {
        let handle: InstanceHandle =
            owner
                .store()
                .aggregate_element_as(aggregate, index, StoreKind::Instance)?;
        E::try_bind(owner.store(), handle)
    }

    fn encode(&self, _owner: Entity<'s>, item: &E) -> Result<Option<StoreValue>> {
        let handle = checked_reference(E::ENTITY_NAME, &item.entity())?;
        Ok(Some(StoreValue::Instance(handle)))
    }
}

/// Enumeration members
///
/// Names outside the table are skipped on decode.
pub struct Enums<E>(PhantomData<E>);

impl<E> Enums<E> {
    pub const fn new() -> Self {
        Enums(PhantomData)
    }
}

impl<E> Default for Enums<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, E: Enumeration> ElementCodec<'s> for Enums<E> {
    type Item = E;

    fn decode(&self, owner: Entity<'s>, aggregate: AggregateHandle, index: usize) -> Option<E> {
        let name: String = owner
            .store()
            .aggregate_element_as(aggregate, index, E::table().kind)?;
        E::from_name(&name)
    }

    fn encode(&self, _owner: Entity<'s>, item: &E) -> Result<Option<StoreValue>> {
        let kind = E::table().kind;
        item.name()?
            .to_string()
            .into_store(kind)
            .map(Some)
            .ok_or(BindingError::IncompatibleKind(kind))
    }
}

/// Nested aggregate members, each decoded with the inner codec
#[derive(Clone, Copy, Debug, Default)]
pub struct Nested<C>(pub C);

impl<'s, C: ElementCodec<'s>> ElementCodec<'s> for Nested<C> {
    type Item = Vec<C::Item>;

    fn decode(
        &self,
        owner: Entity<'s>,
        aggregate: AggregateHandle,
        index: usize,
    ) -> Option<Vec<C::Item>> {
        let nested: AggregateHandle =
            owner
                .store()
                .aggregate_element_as(aggregate, index, StoreKind::Aggregate)?;
        nested
            .non_null()
            .map(|nested| from_aggregate(owner, nested, &self.0))
    }

    fn encode(&self, owner: Entity<'s>, item: &Vec<C::Item>) -> Result<Option<StoreValue>> {
        let nested = to_aggregate(owner, None, &self.0, item)?;
        Ok(Some(StoreValue::Aggregate(nested)))
    }
}

/// SELECT members; each decodes to a select that owns its value
///
/// Unset selects are left out on encode.
pub struct Selects<S>(PhantomData<S>);

impl<S> Selects<S> {
    pub const fn new() -> Self {
        Selects(PhantomData)
    }
}

impl<S> Default for Selects<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s, S: SelectType<'s>> ElementCodec<'s> for Selects<S> {
    type Item = S;

    fn decode(&self, owner: Entity<'s>, aggregate: AggregateHandle, index: usize) -> Option<S> {
        match owner
            .store()
            .aggregate_element(aggregate, index, StoreKind::Adb)?
        {
            StoreValue::Adb(adb) if !adb.is_null() => Some(S::from_select(Select::adopt(
                owner,
                adb,
                S::descriptor(),
            ))),
            _ => None,
        }
    }

    fn encode(&self, _owner: Entity<'s>, item: &S) -> Result<Option<StoreValue>> {
        Ok(item.select().snapshot_adb().map(StoreValue::Adb))
    }
}

/// Members of any declared kind, decoded to [`Element`]
#[derive(Clone, Copy, Debug)]
pub struct Dynamic(pub &'static ElementKind);

impl<'s> ElementCodec<'s> for Dynamic {
    type Item = Element<'s>;

    fn decode(
        &self,
        owner: Entity<'s>,
        aggregate: AggregateHandle,
        index: usize,
    ) -> Option<Element<'s>> {
        let store = owner.store();
        decode_element(owner, self.0, |kind| {
            store.aggregate_element(aggregate, index, kind)
        })
    }

    fn encode(&self, owner: Entity<'s>, item: &Element<'s>) -> Result<Option<StoreValue>> {
        encode_element(owner, self.0, item)
    }
}
