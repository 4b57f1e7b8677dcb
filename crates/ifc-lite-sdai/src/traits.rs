// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The store capability interface
//!
//! Every operation is a direct, synchronous call. Stores use interior
//! mutability behind `&self`; callers serialize access to one store.

use crate::{
    AdbHandle, AggregateHandle, AttributeDescriptor, InstanceHandle, ModelHandle, Result,
    StoreKind, StoreValue,
};

/// Generic get/put-by-name access to an EXPRESS instance population
///
/// Reads return `None` when the slot is unset or the stored value cannot be
/// coerced to the requested kind. Writes report bad handles and names through
/// [`crate::StoreError`].
///
/// # Ownership
///
/// ADBs and aggregates attached to an attribute slot (or nested in an
/// attached aggregate) belong to the store. Handles created but never
/// attached belong to the caller, which releases them with
/// [`release_adb`](Self::release_adb) / [`release_aggregate`](Self::release_aggregate).
pub trait AttributeStore {
    /// Create an instance of `type_name` in `model`
    fn create_instance(&self, model: ModelHandle, type_name: &str) -> Result<InstanceHandle>;

    /// Check if the instance's type is, or derives from, `type_name`
    ///
    /// Returns `false` for the null handle and unknown names.
    fn is_kind_of(&self, instance: InstanceHandle, type_name: &str) -> bool;

    /// Name of the type the instance was created as
    fn instance_type(&self, instance: InstanceHandle) -> Option<String>;

    /// Line number of the instance in exchange-file terms (`#n`)
    fn step_id(&self, instance: InstanceHandle) -> Option<u64>;

    /// Read an attribute, coerced to `kind`
    fn get_attribute(
        &self,
        instance: InstanceHandle,
        attr: &str,
        kind: StoreKind,
    ) -> Option<StoreValue>;

    /// Replace an attribute's value
    ///
    /// An unattached ADB or aggregate is adopted by the slot. One the store
    /// already owns elsewhere is copied, so no two slots share a handle.
    fn put_attribute(&self, instance: InstanceHandle, attr: &str, value: StoreValue) -> Result<()>;

    /// Reset an attribute to unset (`$`)
    fn clear_attribute(&self, instance: InstanceHandle, attr: &str) -> Result<()>;

    /// The ADB currently held by an attribute slot, `None` if unset
    ///
    /// The returned handle stays owned by the store.
    fn get_attribute_adb(&self, instance: InstanceHandle, attr: &str) -> Option<AdbHandle> {
        match self.get_attribute(instance, attr, StoreKind::Adb)? {
            StoreValue::Adb(adb) => adb.non_null(),
            _ => None,
        }
    }

    /// Box a value into a new, unattached ADB with an empty type path
    fn create_adb(&self, value: StoreValue) -> AdbHandle;

    /// Set the type name at `depth` of an ADB's type path
    ///
    /// Deeper entries are discarded; `depth` may be at most the current length.
    fn set_adb_type_path(&self, adb: AdbHandle, depth: usize, type_name: &str) -> Result<()>;

    /// Type name at `depth` of an ADB's type path (0 = outermost)
    fn adb_type_path(&self, adb: AdbHandle, depth: usize) -> Option<String>;

    /// Read an ADB's value, coerced to `kind`
    fn adb_value(&self, adb: AdbHandle, kind: StoreKind) -> Option<StoreValue>;

    /// Free an ADB the caller owns
    fn release_adb(&self, adb: AdbHandle);

    /// Create an empty aggregate, bound to `owner.attr` or anonymous when `attr` is `None`
    ///
    /// A bound aggregate replaces the attribute's current value.
    fn create_aggregate(&self, owner: InstanceHandle, attr: Option<&str>)
        -> Result<AggregateHandle>;

    /// Number of members in an aggregate (0 for unknown handles)
    fn aggregate_member_count(&self, aggregate: AggregateHandle) -> usize;

    /// Read the member at `index`, coerced to `kind`
    ///
    /// Reading as [`StoreKind::Adb`] creates a new ADB owned by the caller.
    fn aggregate_element(
        &self,
        aggregate: AggregateHandle,
        index: usize,
        kind: StoreKind,
    ) -> Option<StoreValue>;

    /// Append a member; ADB values are copied, unattached aggregates are adopted
    fn append_aggregate_element(&self, aggregate: AggregateHandle, value: StoreValue)
        -> Result<()>;

    /// Free an anonymous aggregate the caller owns, with everything nested in it
    fn release_aggregate(&self, aggregate: AggregateHandle);

    /// Attributes of an entity, inherited ones first
    fn attributes(&self, entity: &str) -> Vec<AttributeDescriptor>;

    /// Direct supertypes of an entity
    fn supertypes(&self, entity: &str) -> Vec<String>;

    /// Check if an entity is declared ABSTRACT
    fn is_abstract(&self, entity: &str) -> bool;
}
