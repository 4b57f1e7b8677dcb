// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC4 entity wrappers and attribute accessors
//!
//! Each entity implements the attribute trait of every entity it derives
//! from. Inverse attributes are not exposed.

use super::enums::*;
use super::selects::*;
use crate::aggregation::{Entities, Integers, Nested, Reals, Selects, Texts};

// Kernel

express_attributes! {
    pub trait IfcRootAttributes<'s> {
        text GlobalId: global_id, set_global_id;
        text Name: name, set_name, clear_name;
        text Description: description, set_description, clear_description;
    }
}

express_attributes! {
    pub trait IfcObjectAttributes<'s> {
        text ObjectType: object_type, set_object_type, clear_object_type;
    }
}

express_attributes! {
    pub trait IfcActorAttributes<'s> {
        select TheActor: IfcActorSelect, the_actor;
    }
}

express_entity! {
    pub struct IfcRoot<'s>("IfcRoot"): IfcRootAttributes;
}

express_entity! {
    pub struct IfcObjectDefinition<'s>("IfcObjectDefinition"): IfcRootAttributes;
}

express_entity! {
    pub struct IfcObject<'s>("IfcObject"): IfcRootAttributes, IfcObjectAttributes;
}

express_entity! {
    pub struct IfcProduct<'s>("IfcProduct"): IfcRootAttributes, IfcObjectAttributes;
}

express_entity! {
    pub struct IfcActor<'s>("IfcActor"): IfcRootAttributes, IfcObjectAttributes, IfcActorAttributes;
}

express_entity! {
    pub struct IfcGroup<'s>("IfcGroup"): IfcRootAttributes, IfcObjectAttributes;
}

// Building elements

express_attributes! {
    pub trait IfcElementAttributes<'s> {
        text Tag: tag, set_tag, clear_tag;
    }
}

express_attributes! {
    pub trait IfcWallAttributes<'s> {
        enumeration PredefinedType: IfcWallTypeEnum, predefined_type, set_predefined_type, clear_predefined_type;
    }
}

express_attributes! {
    pub trait IfcSlabAttributes<'s> {
        enumeration PredefinedType: IfcSlabTypeEnum, predefined_type, set_predefined_type, clear_predefined_type;
    }
}

express_attributes! {
    pub trait IfcDoorAttributes<'s> {
        real OverallHeight: overall_height, set_overall_height, clear_overall_height;
        real OverallWidth: overall_width, set_overall_width, clear_overall_width;
        enumeration PredefinedType: IfcDoorTypeEnum, predefined_type, set_predefined_type, clear_predefined_type;
        text UserDefinedOperationType: user_defined_operation_type, set_user_defined_operation_type;
    }
}

express_entity! {
    pub struct IfcElement<'s>("IfcElement"): IfcRootAttributes, IfcObjectAttributes, IfcElementAttributes;
}

express_entity! {
    pub struct IfcBuildingElement<'s>("IfcBuildingElement"):
        IfcRootAttributes, IfcObjectAttributes, IfcElementAttributes;
}

express_entity! {
    pub struct IfcWall<'s>("IfcWall"):
        IfcRootAttributes, IfcObjectAttributes, IfcElementAttributes, IfcWallAttributes;
}

express_entity! {
    pub struct IfcSlab<'s>("IfcSlab"):
        IfcRootAttributes, IfcObjectAttributes, IfcElementAttributes, IfcSlabAttributes;
}

express_entity! {
    pub struct IfcDoor<'s>("IfcDoor"):
        IfcRootAttributes, IfcObjectAttributes, IfcElementAttributes, IfcDoorAttributes;
}

// Spatial structure

express_attributes! {
    pub trait IfcSpatialElementAttributes<'s> {
        text LongName: long_name, set_long_name, clear_long_name;
    }
}

express_attributes! {
    pub trait IfcSpatialStructureElementAttributes<'s> {
        enumeration CompositionType: IfcElementCompositionEnum, composition_type, set_composition_type;
    }
}

express_attributes! {
    /// Latitude and longitude are compound angles: degrees, minutes, seconds,
    /// millionths of seconds
    pub trait IfcSiteAttributes<'s> {
        aggregate RefLatitude: i64 = Integers, ref_latitude, set_ref_latitude, clear_ref_latitude;
        aggregate RefLongitude: i64 = Integers, ref_longitude, set_ref_longitude, clear_ref_longitude;
        real RefElevation: ref_elevation, set_ref_elevation, clear_ref_elevation;
        text LandTitleNumber: land_title_number, set_land_title_number;
    }
}

express_entity! {
    pub struct IfcSpatialElement<'s>("IfcSpatialElement"):
        IfcRootAttributes, IfcObjectAttributes, IfcSpatialElementAttributes;
}

express_entity! {
    pub struct IfcSpatialStructureElement<'s>("IfcSpatialStructureElement"):
        IfcRootAttributes, IfcObjectAttributes, IfcSpatialElementAttributes,
        IfcSpatialStructureElementAttributes;
}

express_entity! {
    pub struct IfcSite<'s>("IfcSite"):
        IfcRootAttributes, IfcObjectAttributes, IfcSpatialElementAttributes,
        IfcSpatialStructureElementAttributes, IfcSiteAttributes;
}

// Actors

express_attributes! {
    pub trait IfcPersonAttributes<'s> {
        text Identification: identification, set_identification, clear_identification;
        text FamilyName: family_name, set_family_name, clear_family_name;
        text GivenName: given_name, set_given_name, clear_given_name;
        aggregate MiddleNames: String = Texts::STRING, middle_names, set_middle_names, clear_middle_names;
    }
}

express_attributes! {
    pub trait IfcOrganizationAttributes<'s> {
        text Identification: identification, set_identification, clear_identification;
        text Name: name, set_name;
        text Description: description, set_description, clear_description;
    }
}

express_attributes! {
    pub trait IfcPersonAndOrganizationAttributes<'s> {
        entity ThePerson: IfcPerson, the_person, set_the_person;
        entity TheOrganization: IfcOrganization, the_organization, set_the_organization;
    }
}

express_entity! {
    pub struct IfcPerson<'s>("IfcPerson"): IfcPersonAttributes;
}

express_entity! {
    pub struct IfcOrganization<'s>("IfcOrganization"): IfcOrganizationAttributes;
}

express_entity! {
    pub struct IfcPersonAndOrganization<'s>("IfcPersonAndOrganization"): IfcPersonAndOrganizationAttributes;
}

// Measures and units

express_attributes! {
    pub trait IfcMeasureWithUnitAttributes<'s> {
        select ValueComponent: IfcValue, value_component;
        select UnitComponent: IfcUnit, unit_component;
    }
}

express_attributes! {
    pub trait IfcNamedUnitAttributes<'s> {
        enumeration UnitType: IfcUnitEnum, unit_type, set_unit_type;
    }
}

express_attributes! {
    pub trait IfcSIUnitAttributes<'s> {
        enumeration Prefix: IfcSIPrefix, prefix, set_prefix, clear_prefix;
        enumeration Name: IfcSIUnitName, name, set_name;
    }
}

express_attributes! {
    pub trait IfcMonetaryUnitAttributes<'s> {
        text Currency: currency, set_currency;
    }
}

express_attributes! {
    pub trait IfcUnitAssignmentAttributes<'s> {
        aggregate Units: IfcUnit<'s> = Selects::<IfcUnit<'s>>::new(), units, set_units;
    }
}

express_entity! {
    pub struct IfcMeasureWithUnit<'s>("IfcMeasureWithUnit"): IfcMeasureWithUnitAttributes;
}

express_entity! {
    pub struct IfcNamedUnit<'s>("IfcNamedUnit"): IfcNamedUnitAttributes;
}

express_entity! {
    pub struct IfcSIUnit<'s>("IfcSIUnit"): IfcNamedUnitAttributes, IfcSIUnitAttributes;
}

express_entity! {
    pub struct IfcMonetaryUnit<'s>("IfcMonetaryUnit"): IfcMonetaryUnitAttributes;
}

express_entity! {
    pub struct IfcUnitAssignment<'s>("IfcUnitAssignment"): IfcUnitAssignmentAttributes;
}

// Properties

express_attributes! {
    pub trait IfcPropertyAttributes<'s> {
        text Name: name, set_name;
        text Description: description, set_description, clear_description;
    }
}

express_attributes! {
    pub trait IfcPropertySingleValueAttributes<'s> {
        select NominalValue: IfcValue, nominal_value;
        select Unit: IfcUnit, unit;
    }
}

express_attributes! {
    pub trait IfcPropertyEnumeratedValueAttributes<'s> {
        aggregate EnumerationValues: IfcValue<'s> = Selects::<IfcValue<'s>>::new(),
            enumeration_values, set_enumeration_values, clear_enumeration_values;
    }
}

express_entity! {
    pub struct IfcProperty<'s>("IfcProperty"): IfcPropertyAttributes;
}

express_entity! {
    pub struct IfcSimpleProperty<'s>("IfcSimpleProperty"): IfcPropertyAttributes;
}

express_entity! {
    pub struct IfcPropertySingleValue<'s>("IfcPropertySingleValue"):
        IfcPropertyAttributes, IfcPropertySingleValueAttributes;
}

express_entity! {
    pub struct IfcPropertyEnumeratedValue<'s>("IfcPropertyEnumeratedValue"):
        IfcPropertyAttributes, IfcPropertyEnumeratedValueAttributes;
}

// Relationships

express_attributes! {
    pub trait IfcRelAssignsAttributes<'s> {
        aggregate RelatedObjects: IfcObjectDefinition<'s> = Entities::<IfcObjectDefinition<'s>>::new(),
            related_objects, set_related_objects;
        enumeration RelatedObjectsType: IfcObjectTypeEnum,
            related_objects_type, set_related_objects_type, clear_related_objects_type;
    }
}

express_attributes! {
    pub trait IfcRelAssignsToGroupAttributes<'s> {
        entity RelatingGroup: IfcGroup, relating_group, set_relating_group;
    }
}

express_attributes! {
    pub trait IfcRelAggregatesAttributes<'s> {
        entity RelatingObject: IfcObjectDefinition, relating_object, set_relating_object;
        aggregate RelatedObjects: IfcObjectDefinition<'s> = Entities::<IfcObjectDefinition<'s>>::new(),
            related_objects, set_related_objects;
    }
}

express_entity! {
    pub struct IfcRelationship<'s>("IfcRelationship"): IfcRootAttributes;
}

express_entity! {
    pub struct IfcRelAssigns<'s>("IfcRelAssigns"): IfcRootAttributes, IfcRelAssignsAttributes;
}

express_entity! {
    pub struct IfcRelAssignsToGroup<'s>("IfcRelAssignsToGroup"):
        IfcRootAttributes, IfcRelAssignsAttributes, IfcRelAssignsToGroupAttributes;
}

express_entity! {
    pub struct IfcRelDecomposes<'s>("IfcRelDecomposes"): IfcRootAttributes;
}

express_entity! {
    pub struct IfcRelAggregates<'s>("IfcRelAggregates"): IfcRootAttributes, IfcRelAggregatesAttributes;
}

// Geometry

express_attributes! {
    /// Coordinate tuples, one inner list per point
    pub trait IfcCartesianPointList2DAttributes<'s> {
        aggregate CoordList: Vec<f64> = Nested(Reals), coord_list, set_coord_list;
    }
}

express_attributes! {
    pub trait IfcCartesianPointList3DAttributes<'s> {
        aggregate CoordList: Vec<f64> = Nested(Reals), coord_list, set_coord_list;
    }
}

express_attributes! {
    pub trait IfcIndexedPolyCurveAttributes<'s> {
        entity Points: IfcCartesianPointList, points, set_points;
        aggregate Segments: IfcSegmentIndexSelect<'s> = Selects::<IfcSegmentIndexSelect<'s>>::new(),
            segments, set_segments, clear_segments;
        boolean SelfIntersect: self_intersect, set_self_intersect, clear_self_intersect;
    }
}

express_entity! {
    pub struct IfcRepresentationItem<'s>("IfcRepresentationItem");
}

express_entity! {
    pub struct IfcGeometricRepresentationItem<'s>("IfcGeometricRepresentationItem");
}

express_entity! {
    pub struct IfcCartesianPointList<'s>("IfcCartesianPointList");
}

express_entity! {
    pub struct IfcCartesianPointList2D<'s>("IfcCartesianPointList2D"): IfcCartesianPointList2DAttributes;
}

express_entity! {
    pub struct IfcCartesianPointList3D<'s>("IfcCartesianPointList3D"): IfcCartesianPointList3DAttributes;
}

express_entity! {
    pub struct IfcCurve<'s>("IfcCurve");
}

express_entity! {
    pub struct IfcBoundedCurve<'s>("IfcBoundedCurve");
}

express_entity! {
    pub struct IfcIndexedPolyCurve<'s>("IfcIndexedPolyCurve"): IfcIndexedPolyCurveAttributes;
}

// Textures

express_attributes! {
    pub trait IfcSurfaceTextureAttributes<'s> {
        boolean RepeatS: repeat_s, set_repeat_s;
        boolean RepeatT: repeat_t, set_repeat_t;
        text Mode: mode, set_mode, clear_mode;
    }
}

express_attributes! {
    pub trait IfcBlobTextureAttributes<'s> {
        text RasterFormat: raster_format, set_raster_format;
        binary RasterCode: raster_code, set_raster_code;
    }
}

express_attributes! {
    /// `Pixel` holds one binary string per pixel, row by row
    pub trait IfcPixelTextureAttributes<'s> {
        integer Width: width, set_width;
        integer Height: height, set_height;
        integer ColourComponents: colour_components, set_colour_components;
        aggregate Pixel: String = Texts::BINARY, pixel, set_pixel;
    }
}

express_entity! {
    pub struct IfcSurfaceTexture<'s>("IfcSurfaceTexture"): IfcSurfaceTextureAttributes;
}

express_entity! {
    pub struct IfcBlobTexture<'s>("IfcBlobTexture"): IfcSurfaceTextureAttributes, IfcBlobTextureAttributes;
}

express_entity! {
    pub struct IfcPixelTexture<'s>("IfcPixelTexture"): IfcSurfaceTextureAttributes, IfcPixelTextureAttributes;
}
