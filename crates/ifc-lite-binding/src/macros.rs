// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative generators for schema wrappers
//!
//! Each EXPRESS declaration becomes one macro invocation:
//!
//! - [`express_enum!`] - a Rust enum plus its name table
//! - [`express_entity!`] - a newtype over [`Entity`](crate::Entity)
//! - [`express_attributes!`] - a trait of typed getters/setters for the
//!   attributes one entity declares, implemented by it and its subtypes
//! - [`express_select!`] - a wrapper over [`Select`](crate::Select), its
//!   candidate table and a kind enum
//!
//! Method names are spelled out at the call site.

/// Declare an EXPRESS enumeration
///
/// ```ignore
/// express_enum! {
///     pub enum IfcDoorTypeEnum: IFC_DOOR_TYPE_ENUM("IfcDoorTypeEnum", Enumeration) {
///         Door = "DOOR",
///         Gate = "GATE",
///     }
/// }
/// ```
#[macro_export]
macro_rules! express_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $table:ident($express:literal, $kind:ident) {
            $($(#[$vmeta:meta])* $variant:ident = $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        #[doc = concat!("Enumerator names of ", $express, ", in declaration order")]
        $vis static $table: $crate::EnumTable = $crate::EnumTable {
            name: $express,
            kind: $crate::StoreKind::$kind,
            names: &[$($text),+],
        };

        impl $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::Enumeration for $name {
            fn table() -> &'static $crate::EnumTable {
                &$table
            }

            fn index(self) -> usize {
                self as usize
            }

            fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, ".{}.", $table.names[*self as usize])
            }
        }
    };
}

/// Declare an EXPRESS entity wrapper
///
/// The attribute traits listed after the colon are implemented for the
/// wrapper; list the traits of every supertype as well.
///
/// ```ignore
/// express_entity! {
///     pub struct IfcWall<'s>("IfcWall"): IfcRootAttributes, IfcWallAttributes;
/// }
/// ```
#[macro_export]
macro_rules! express_entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<$lt:lifetime>($express:literal) $(: $($attrs:ident),+)?;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        $vis struct $name<$lt>($crate::Entity<$lt>);

        impl<$lt> $crate::EntityType<$lt> for $name<$lt> {
            const ENTITY_NAME: &'static str = $express;

            fn from_entity(entity: $crate::Entity<$lt>) -> Self {
                $name(entity)
            }

            fn entity(&self) -> $crate::Entity<$lt> {
                self.0
            }
        }

        impl<$lt> ::std::ops::Deref for $name<$lt> {
            type Target = $crate::Entity<$lt>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<$lt> From<$name<$lt>> for $crate::Entity<$lt> {
            fn from(value: $name<$lt>) -> Self {
                value.0
            }
        }

        $($(impl<$lt> $attrs<$lt> for $name<$lt> {})+)?
    };
}

/// Declare the typed accessors of one entity's own attributes
///
/// Each line names the attribute's form, the attribute, and the getter and
/// setter to generate, optionally followed by a clearing method:
///
/// ```ignore
/// express_attributes! {
///     pub trait IfcRootAttributes<'s> {
///         text GlobalId: global_id, set_global_id;
///         text Name: name, set_name, clear_name;
///         entity OwnerHistory: IfcOwnerHistory, owner_history, set_owner_history;
///         enumeration PredefinedType: IfcWallTypeEnum, predefined_type, set_predefined_type;
///         select TheActor: IfcActorSelect, the_actor;
///         aggregate MiddleNames: String = Texts::STRING, middle_names, set_middle_names;
///     }
/// }
/// ```
///
/// Forms: `integer`, `real`, `boolean`, `logical`, `text`, `binary`,
/// `entity`, `enumeration`, `select`, `aggregate`.
#[macro_export]
macro_rules! express_attributes {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident<$lt:lifetime> $(: $($super:ident),+)? {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name<$lt>: $crate::EntityType<$lt> $($(+ $super<$lt>)+)? {
            $crate::__express_attribute_methods!($lt; $($body)*);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __express_attribute_methods {
    (@scalar $(#[$m:meta])* $attr:ident, $native:ty, $kind:ident, $get:ident, $set:ident $(, $clear:ident)?) => {
        $(#[$m])*
        fn $get(&self) -> Option<$native> {
            self.entity().get(stringify!($attr), $crate::StoreKind::$kind)
        }

        fn $set(&self, value: $native) -> $crate::Result<()> {
            self.entity().put(stringify!($attr), $crate::StoreKind::$kind, value)
        }

        $crate::__express_attribute_methods!(@clear $attr $(, $clear)?);
    };
    (@text $(#[$m:meta])* $attr:ident, $kind:ident, $get:ident, $set:ident $(, $clear:ident)?) => {
        $(#[$m])*
        fn $get(&self) -> Option<String> {
            self.entity().get(stringify!($attr), $crate::StoreKind::$kind)
        }

        fn $set(&self, value: impl Into<String>) -> $crate::Result<()> {
            self.entity().put(stringify!($attr), $crate::StoreKind::$kind, value.into())
        }

        $crate::__express_attribute_methods!(@clear $attr $(, $clear)?);
    };
    (@clear $attr:ident) => {};
    (@clear $attr:ident, $clear:ident) => {
        fn $clear(&self) -> $crate::Result<()> {
            self.entity().clear(stringify!($attr))
        }
    };

    ($lt:lifetime;) => {};
    ($lt:lifetime; $(#[$m:meta])* integer $attr:ident: $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $crate::__express_attribute_methods!(@scalar $(#[$m])* $attr, i64, Integer, $get, $set $(, $clear)?);
        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* real $attr:ident: $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $crate::__express_attribute_methods!(@scalar $(#[$m])* $attr, f64, Real, $get, $set $(, $clear)?);
        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* boolean $attr:ident: $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $crate::__express_attribute_methods!(@scalar $(#[$m])* $attr, bool, Boolean, $get, $set $(, $clear)?);
        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* text $attr:ident: $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $crate::__express_attribute_methods!(@text $(#[$m])* $attr, String, $get, $set $(, $clear)?);
        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* binary $attr:ident: $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $crate::__express_attribute_methods!(@text $(#[$m])* $attr, Binary, $get, $set $(, $clear)?);
        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* logical $attr:ident: $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $crate::__express_attribute_methods!($lt; $(#[$m])* enumeration $attr: $crate::Logical, $get, $set $(, $clear)?; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* enumeration $attr:ident: $enum:ty, $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $(#[$m])*
        fn $get(&self) -> Option<$enum> {
            self.entity().get_enum(stringify!($attr))
        }

        fn $set(&self, value: $enum) -> $crate::Result<()> {
            self.entity().put_enum(stringify!($attr), value)
        }

        $crate::__express_attribute_methods!(@clear $attr $(, $clear)?);
        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* entity $attr:ident: $ty:ident, $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $(#[$m])*
        fn $get(&self) -> Option<$ty<$lt>> {
            self.entity().get_entity(stringify!($attr))
        }

        /// Any wrapper whose instance is a kind of the declared entity is accepted
        fn $set<'v, E: $crate::EntityType<'v>>(&self, value: E) -> $crate::Result<()> {
            self.entity().put_entity(
                stringify!($attr),
                <$ty<'static> as $crate::EntityType<'static>>::ENTITY_NAME,
                value.entity(),
            )
        }

        $crate::__express_attribute_methods!(@clear $attr $(, $clear)?);
        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* select $attr:ident: $ty:ident, $get:ident; $($rest:tt)*) => {
        $(#[$m])*
        fn $get(&self) -> $ty<$lt> {
            self.entity().select(stringify!($attr))
        }

        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
    ($lt:lifetime; $(#[$m:meta])* aggregate $attr:ident: $item:ty = $codec:expr, $get:ident, $set:ident $(, $clear:ident)?; $($rest:tt)*) => {
        $(#[$m])*
        fn $get(&self) -> Vec<$item> {
            self.entity().get_items(stringify!($attr), &$codec)
        }

        fn $set(&self, items: &[$item]) -> $crate::Result<$crate::AggregateHandle> {
            self.entity().put_items(stringify!($attr), &$codec, items)
        }

        $crate::__express_attribute_methods!(@clear $attr $(, $clear)?);
        $crate::__express_attribute_methods!($lt; $($rest)*);
    };
}

/// Declare an EXPRESS SELECT wrapper
///
/// Candidates are listed in declaration order, which is also the order they
/// are tried in when a stored value is recognised. Each names its variant in
/// the kind enum, its form, and the methods to generate:
///
/// ```ignore
/// express_select! {
///     pub struct IfcActorSelect<'s>: IFC_ACTOR_SELECT("IfcActorSelect"), IfcActorSelectKind {
///         Organization(entity IfcOrganization) { is_organization, organization, put_organization }
///         Person(entity IfcPerson) { is_person, person, put_person }
///     }
/// }
/// ```
///
/// Forms and their methods:
///
/// - `value "Name", Kind, native` - `is`, `get`, `put`
/// - `entity Wrapper` - `is`, `get`, `put`
/// - `enumeration "Name", Enum, TABLE` - `is`, `get`, `put`
/// - `aggregate "Name", ELEMENT_KIND, codec => item` - `is`, `get`, `put`
/// - `select "Name", Wrapper, DESCRIPTOR` - `is`, nested view
#[macro_export]
macro_rules! express_select {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<$lt:lifetime>: $desc:ident($express:literal), $kind:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($($form:tt)+) { $($method:ident),+ $(,)? }
            )+
        }
    ) => {
        #[doc = concat!("Candidate a ", $express, " value belongs to")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $kind {
            $($(#[$vmeta])* $variant),+
        }

        #[doc = concat!("Candidate table of ", $express)]
        $vis static $desc: $crate::SelectDescriptor = $crate::SelectDescriptor {
            name: $express,
            candidates: &[$(
                $crate::Candidate {
                    type_name: $crate::__express_select_candidate!(@name $($form)+),
                    kind: $crate::__express_select_candidate!(@kind $($form)+),
                }
            ),+],
        };

        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name<$lt>($crate::Select<$lt>);

        impl<$lt> $crate::SelectType<$lt> for $name<$lt> {
            type Kind = $kind;

            fn descriptor() -> &'static $crate::SelectDescriptor {
                &$desc
            }

            fn kind_at(index: usize) -> Option<$kind> {
                const KINDS: &[$kind] = &[$($kind::$variant),+];
                KINDS.get(index).copied()
            }

            fn from_select(select: $crate::Select<$lt>) -> Self {
                $name(select)
            }

            fn select(&self) -> &$crate::Select<$lt> {
                &self.0
            }
        }

        impl<$lt> ::std::ops::Deref for $name<$lt> {
            type Target = $crate::Select<$lt>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<$lt> $name<$lt> {
            $(
                $crate::__express_select_candidate!(@methods $lt; ($($form)+) $($method),+);
            )+
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __express_select_candidate {
    (@name entity $ty:ident) => {
        <$ty<'static> as $crate::EntityType<'static>>::ENTITY_NAME
    };
    (@name $form:ident $type_name:literal, $($rest:tt)*) => {
        $type_name
    };

    (@kind entity $ty:ident) => {
        $crate::ElementKind::Entity(<$ty<'static> as $crate::EntityType<'static>>::ENTITY_NAME)
    };
    (@kind value $type_name:literal, $kind:ident, $native:ty) => {
        $crate::ElementKind::Value($crate::StoreKind::$kind)
    };
    (@kind enumeration $type_name:literal, $enum:ty, $table:path) => {
        $crate::ElementKind::Enumeration(&$table)
    };
    (@kind aggregate $type_name:literal, $element:path, $codec:expr => $item:ty) => {
        $crate::ElementKind::Aggregate(&$element)
    };
    (@kind select $type_name:literal, $ty:ident, $desc:path) => {
        $crate::ElementKind::Select(&$desc)
    };

    (@methods $lt:lifetime; (entity $ty:ident) $is:ident, $get:ident, $put:ident) => {
        pub fn $is(&self) -> bool {
            self.0.is_type(<$ty<'static> as $crate::EntityType<'static>>::ENTITY_NAME)
        }

        pub fn $get(&self) -> Option<$ty<$lt>> {
            if self.$is() {
                self.0.get_entity()
            } else {
                None
            }
        }

        pub fn $put(&self, value: $ty<'_>) -> $crate::Result<()> {
            self.0.put_entity(
                <$ty<'static> as $crate::EntityType<'static>>::ENTITY_NAME,
                $crate::EntityType::entity(&value),
            )
        }
    };
    (@methods $lt:lifetime; (value $type_name:literal, $kind:ident, $native:ty) $is:ident, $get:ident, $put:ident) => {
        pub fn $is(&self) -> bool {
            self.0.is_type($type_name)
        }

        pub fn $get(&self) -> Option<$native> {
            self.0.get_value($type_name, $crate::StoreKind::$kind)
        }

        pub fn $put(&self, value: $native) -> $crate::Result<()> {
            self.0.put_value($type_name, $crate::StoreKind::$kind, value)
        }
    };
    (@methods $lt:lifetime; (enumeration $type_name:literal, $enum:ty, $table:path) $is:ident, $get:ident, $put:ident) => {
        pub fn $is(&self) -> bool {
            self.0.is_type($type_name)
        }

        pub fn $get(&self) -> Option<$enum> {
            self.0.get_enum($type_name)
        }

        pub fn $put(&self, value: $enum) -> $crate::Result<()> {
            self.0.put_enum($type_name, value)
        }
    };
    (@methods $lt:lifetime; (aggregate $type_name:literal, $element:path, $codec:expr => $item:ty) $is:ident, $get:ident, $put:ident) => {
        pub fn $is(&self) -> bool {
            self.0.is_type($type_name)
        }

        pub fn $get(&self) -> Option<Vec<$item>> {
            self.0.get_aggregate($type_name, &$codec)
        }

        pub fn $put(&self, items: &[$item]) -> $crate::Result<()> {
            self.0.put_aggregate($type_name, &$codec, items)
        }
    };
    (@methods $lt:lifetime; (select $type_name:literal, $ty:ident, $desc:path) $is:ident, $get:ident) => {
        pub fn $is(&self) -> bool {
            self.0.is_type($type_name)
        }

        /// View of the value as the nested select; writes go to the outer slot
        pub fn $get(&self) -> $ty<$lt> {
            <$ty<$lt> as $crate::SelectType<$lt>>::nested(&self.0)
        }
    };
}
