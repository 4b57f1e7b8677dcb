// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed convenience methods for any [`AttributeStore`]

use crate::{
    AdbHandle, AggregateHandle, AttributeStore, InstanceHandle, Result, Scalar, StoreKind,
    TypePath,
};

/// Extension methods for AttributeStore
pub trait AttributeStoreExt: AttributeStore {
    /// Read an attribute as a native type
    fn get_as<T: Scalar>(&self, instance: InstanceHandle, attr: &str, kind: StoreKind) -> Option<T> {
        self.get_attribute(instance, attr, kind).and_then(T::from_store)
    }

    /// Read an ADB's value as a native type
    fn adb_value_as<T: Scalar>(&self, adb: AdbHandle, kind: StoreKind) -> Option<T> {
        self.adb_value(adb, kind).and_then(T::from_store)
    }

    /// Read an aggregate member as a native type
    fn aggregate_element_as<T: Scalar>(
        &self,
        aggregate: AggregateHandle,
        index: usize,
        kind: StoreKind,
    ) -> Option<T> {
        self.aggregate_element(aggregate, index, kind)
            .and_then(T::from_store)
    }

    /// The full type path of an ADB
    fn type_path(&self, adb: AdbHandle) -> TypePath {
        let mut path = TypePath::new();
        while let Some(name) = self.adb_type_path(adb, path.len()) {
            path.push(name);
        }
        path
    }

    /// Replace the full type path of an ADB
    fn put_type_path(&self, adb: AdbHandle, names: &[&str]) -> Result<()> {
        for (depth, name) in names.iter().enumerate() {
            self.set_adb_type_path(adb, depth, name)?;
        }
        Ok(())
    }
}

// Blanket implementation for all AttributeStore types
impl<T: AttributeStore + ?Sized> AttributeStoreExt for T {}
