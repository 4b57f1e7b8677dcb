// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC4 subset schema
//!
//! Covers the entities the `ifc-lite-binding` IFC4 wrappers are generated for.
//! Attributes outside that surface (placements, representations, owner
//! history) are left out.

use crate::schema::{AttributeDef as A, EntityDef as E, Schema};
use ifc_lite_sdai::{AggregationType::*, Result};

/// Build the IFC4 subset schema
pub fn schema() -> Result<Schema> {
    Schema::builder("IFC4")
        // Kernel
        .entity(
            E::new("IfcRoot")
                .abstract_entity()
                .attribute(A::text("GlobalId"))
                .attribute(A::text("Name").optional())
                .attribute(A::text("Description").optional()),
        )
        .entity(
            E::new("IfcObjectDefinition")
                .abstract_entity()
                .subtype_of("IfcRoot")
                .attribute(
                    A::aggregate("HasAssignments", Set)
                        .with_domain("IfcRelAssigns")
                        .inverse(),
                )
                .attribute(
                    A::aggregate("IsDecomposedBy", Set)
                        .with_domain("IfcRelAggregates")
                        .inverse(),
                ),
        )
        .entity(
            E::new("IfcObject")
                .abstract_entity()
                .subtype_of("IfcObjectDefinition")
                .attribute(A::text("ObjectType").optional()),
        )
        .entity(
            E::new("IfcProduct")
                .abstract_entity()
                .subtype_of("IfcObject"),
        )
        .entity(
            E::new("IfcActor")
                .subtype_of("IfcObject")
                .attribute(A::select("TheActor", "IfcActorSelect")),
        )
        .entity(
            E::new("IfcGroup")
                .subtype_of("IfcObject")
                .attribute(
                    A::aggregate("IsGroupedBy", Set)
                        .with_domain("IfcRelAssignsToGroup")
                        .inverse(),
                ),
        )
        // Building elements
        .entity(
            E::new("IfcElement")
                .abstract_entity()
                .subtype_of("IfcProduct")
                .attribute(A::text("Tag").optional()),
        )
        .entity(
            E::new("IfcBuildingElement")
                .abstract_entity()
                .subtype_of("IfcElement"),
        )
        .entity(
            E::new("IfcWall")
                .subtype_of("IfcBuildingElement")
                .attribute(A::enumeration("PredefinedType", "IfcWallTypeEnum").optional()),
        )
        .entity(
            E::new("IfcSlab")
                .subtype_of("IfcBuildingElement")
                .attribute(A::enumeration("PredefinedType", "IfcSlabTypeEnum").optional()),
        )
        .entity(
            E::new("IfcDoor")
                .subtype_of("IfcBuildingElement")
                .attribute(A::simple("OverallHeight").optional())
                .attribute(A::simple("OverallWidth").optional())
                .attribute(A::enumeration("PredefinedType", "IfcDoorTypeEnum").optional())
                .attribute(A::text("UserDefinedOperationType").optional()),
        )
        // Spatial structure
        .entity(
            E::new("IfcSpatialElement")
                .abstract_entity()
                .subtype_of("IfcProduct")
                .attribute(A::text("LongName").optional()),
        )
        .entity(
            E::new("IfcSpatialStructureElement")
                .abstract_entity()
                .subtype_of("IfcSpatialElement")
                .attribute(
                    A::enumeration("CompositionType", "IfcElementCompositionEnum").optional(),
                ),
        )
        .entity(
            E::new("IfcSite")
                .subtype_of("IfcSpatialStructureElement")
                .attribute(A::aggregate("RefLatitude", List).optional())
                .attribute(A::aggregate("RefLongitude", List).optional())
                .attribute(A::simple("RefElevation").optional())
                .attribute(A::text("LandTitleNumber").optional()),
        )
        // Actors
        .entity(
            E::new("IfcPerson")
                .attribute(A::text("Identification").optional())
                .attribute(A::text("FamilyName").optional())
                .attribute(A::text("GivenName").optional())
                .attribute(A::aggregate("MiddleNames", List).optional()),
        )
        .entity(
            E::new("IfcOrganization")
                .attribute(A::text("Identification").optional())
                .attribute(A::text("Name"))
                .attribute(A::text("Description").optional()),
        )
        .entity(
            E::new("IfcPersonAndOrganization")
                .attribute(A::entity("ThePerson", "IfcPerson"))
                .attribute(A::entity("TheOrganization", "IfcOrganization")),
        )
        // Measures and units
        .entity(
            E::new("IfcMeasureWithUnit")
                .attribute(A::select("ValueComponent", "IfcValue"))
                .attribute(A::select("UnitComponent", "IfcUnit")),
        )
        .entity(
            E::new("IfcNamedUnit")
                .abstract_entity()
                .attribute(A::enumeration("UnitType", "IfcUnitEnum")),
        )
        .entity(
            E::new("IfcSIUnit")
                .subtype_of("IfcNamedUnit")
                .attribute(A::enumeration("Prefix", "IfcSIPrefix").optional())
                .attribute(A::enumeration("Name", "IfcSIUnitName")),
        )
        .entity(E::new("IfcMonetaryUnit").attribute(A::text("Currency")))
        .entity(
            E::new("IfcUnitAssignment")
                .attribute(A::aggregate("Units", Set).with_domain("IfcUnit")),
        )
        // Properties
        .entity(
            E::new("IfcProperty")
                .abstract_entity()
                .attribute(A::text("Name"))
                .attribute(A::text("Description").optional()),
        )
        .entity(
            E::new("IfcSimpleProperty")
                .abstract_entity()
                .subtype_of("IfcProperty"),
        )
        .entity(
            E::new("IfcPropertySingleValue")
                .subtype_of("IfcSimpleProperty")
                .attribute(A::select("NominalValue", "IfcValue").optional())
                .attribute(A::select("Unit", "IfcUnit").optional()),
        )
        .entity(
            E::new("IfcPropertyEnumeratedValue")
                .subtype_of("IfcSimpleProperty")
                .attribute(
                    A::aggregate("EnumerationValues", List)
                        .with_domain("IfcValue")
                        .optional(),
                ),
        )
        // Relationships
        .entity(
            E::new("IfcRelationship")
                .abstract_entity()
                .subtype_of("IfcRoot"),
        )
        .entity(
            E::new("IfcRelAssigns")
                .abstract_entity()
                .subtype_of("IfcRelationship")
                .attribute(A::aggregate("RelatedObjects", Set).with_domain("IfcObjectDefinition"))
                .attribute(A::enumeration("RelatedObjectsType", "IfcObjectTypeEnum").optional()),
        )
        .entity(
            E::new("IfcRelAssignsToGroup")
                .subtype_of("IfcRelAssigns")
                .attribute(A::entity("RelatingGroup", "IfcGroup")),
        )
        .entity(
            E::new("IfcRelDecomposes")
                .abstract_entity()
                .subtype_of("IfcRelationship"),
        )
        .entity(
            E::new("IfcRelAggregates")
                .subtype_of("IfcRelDecomposes")
                .attribute(A::entity("RelatingObject", "IfcObjectDefinition"))
                .attribute(A::aggregate("RelatedObjects", Set).with_domain("IfcObjectDefinition")),
        )
        // Geometry
        .entity(E::new("IfcRepresentationItem").abstract_entity())
        .entity(
            E::new("IfcGeometricRepresentationItem")
                .abstract_entity()
                .subtype_of("IfcRepresentationItem"),
        )
        .entity(
            E::new("IfcCartesianPointList")
                .abstract_entity()
                .subtype_of("IfcGeometricRepresentationItem"),
        )
        .entity(
            E::new("IfcCartesianPointList2D")
                .subtype_of("IfcCartesianPointList")
                .attribute(A::aggregate("CoordList", List)),
        )
        .entity(
            E::new("IfcCartesianPointList3D")
                .subtype_of("IfcCartesianPointList")
                .attribute(A::aggregate("CoordList", List)),
        )
        .entity(
            E::new("IfcCurve")
                .abstract_entity()
                .subtype_of("IfcGeometricRepresentationItem"),
        )
        .entity(
            E::new("IfcBoundedCurve")
                .abstract_entity()
                .subtype_of("IfcCurve"),
        )
        .entity(
            E::new("IfcIndexedPolyCurve")
                .subtype_of("IfcBoundedCurve")
                .attribute(A::entity("Points", "IfcCartesianPointList"))
                .attribute(
                    A::aggregate("Segments", List)
                        .with_domain("IfcSegmentIndexSelect")
                        .optional(),
                )
                .attribute(A::simple("SelfIntersect").optional()),
        )
        // Textures
        .entity(
            E::new("IfcSurfaceTexture")
                .abstract_entity()
                .attribute(A::simple("RepeatS"))
                .attribute(A::simple("RepeatT"))
                .attribute(A::text("Mode").optional()),
        )
        .entity(
            E::new("IfcBlobTexture")
                .subtype_of("IfcSurfaceTexture")
                .attribute(A::text("RasterFormat"))
                .attribute(A::text("RasterCode")),
        )
        .entity(
            E::new("IfcPixelTexture")
                .subtype_of("IfcSurfaceTexture")
                .attribute(A::simple("Width"))
                .attribute(A::simple("Height"))
                .attribute(A::simple("ColourComponents"))
                .attribute(A::aggregate("Pixel", List)),
        )
        .build()
}
