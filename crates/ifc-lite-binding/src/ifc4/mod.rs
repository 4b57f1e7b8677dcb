// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generated wrappers for an IFC4 subset
//!
//! Bring [`prelude`] into scope to get the wrappers together with the
//! attribute traits their accessors live on.

pub mod entities;
pub mod enums;
pub mod selects;

pub use entities::*;
pub use enums::*;
pub use selects::*;

/// Wrappers, attribute traits and the binding traits they build on
pub mod prelude {
    pub use super::entities::*;
    pub use super::enums::*;
    pub use super::selects::*;
    pub use crate::{EntityType, Enumeration, Logical, SelectType};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::{BindingError, StoreError};
    use ifc_lite_memstore::{ifc4, MemoryStore};
    use ifc_lite_sdai::ModelHandle;

    fn open() -> (MemoryStore, ModelHandle) {
        let store = MemoryStore::new(ifc4::schema().unwrap());
        let model = store.create_model("IFC4").unwrap();
        (store, model)
    }

    #[test]
    fn test_wall_name() {
        let (store, model) = open();
        let wall = IfcWall::create(&store, model).unwrap();
        wall.set_global_id("2O2Fr$t4X7Zf8NOew3FLOH").unwrap();
        wall.set_name("MyWall").unwrap();

        assert_eq!(wall.name().as_deref(), Some("MyWall"));
        assert_eq!(wall.description(), None);

        wall.set_predefined_type(IfcWallTypeEnum::Partitioning).unwrap();
        assert_eq!(wall.predefined_type(), Some(IfcWallTypeEnum::Partitioning));
        wall.clear_name().unwrap();
        assert_eq!(wall.name(), None);
    }

    #[test]
    fn test_identity_and_cast() {
        let (store, model) = open();
        let wall = IfcWall::create(&store, model).unwrap();
        let slab = IfcSlab::create(&store, model).unwrap();

        let root: IfcRoot = wall.cast();
        assert!(!root.is_null());
        assert_eq!(root.entity(), wall.entity());
        assert_eq!(root.entity_name().as_deref(), Some("IfcWall"));
        assert_eq!(root.declared_kind(), "IfcRoot");

        let door: IfcDoor = wall.cast();
        assert!(door.is_null());
        assert_eq!(door.name(), None);
        assert!(matches!(
            door.set_name("x"),
            Err(BindingError::NullEntity { entity: "IfcDoor", .. })
        ));

        assert_eq!(wall.step_id(), Some(1));
        assert_eq!(slab.step_id(), Some(2));
        assert!(wall.entity() < slab.entity());
        assert!(IfcWall::try_bind(&store, slab.as_handle()).is_none());
        assert!(IfcBuildingElement::try_bind(&store, slab.as_handle()).is_some());
    }

    #[test]
    fn test_abstract_entities_cannot_be_created() {
        let (store, model) = open();
        assert!(matches!(
            IfcRoot::create(&store, model),
            Err(BindingError::Store(StoreError::AbstractEntity(_)))
        ));
    }

    #[test]
    fn test_actor_select_exclusivity() {
        let (store, model) = open();
        let actor = IfcActor::create(&store, model).unwrap();
        let org = IfcOrganization::create(&store, model).unwrap();
        let person = IfcPerson::create(&store, model).unwrap();
        org.set_name("ACME").unwrap();

        let who = actor.the_actor();
        assert!(!who.is_organization());
        assert!(!who.is_person());
        assert!(!who.is_person_and_organization());
        assert_eq!(who.kind(), None);

        who.put_organization(org).unwrap();
        assert!(who.is_organization());
        assert!(!who.is_person());
        assert_eq!(who.kind(), Some(IfcActorSelectKind::Organization));
        assert_eq!(
            who.organization().and_then(|o| o.name()).as_deref(),
            Some("ACME")
        );
        assert_eq!(who.person(), None);

        who.put_person(person).unwrap();
        assert!(who.is_person());
        assert!(!who.is_organization());
        assert_eq!(actor.the_actor().person(), Some(person));
        assert_eq!(store.live_adbs(), 1);
    }

    #[test]
    fn test_measure_with_unit_probes() {
        let (store, model) = open();
        let measure = IfcMeasureWithUnit::create(&store, model).unwrap();
        measure
            .value_component()
            .simple_value()
            .put_integer(75)
            .unwrap();

        let value = measure.value_component();
        assert!(value.is_simple_value());
        assert!(!value.is_measure_value());
        assert_eq!(value.kind(), Some(IfcValueKind::SimpleValue));
        let simple = value.simple_value();
        assert!(simple.is_integer());
        assert!(!simple.is_positive_integer());
        assert_eq!(simple.kind(), Some(IfcSimpleValueKind::Integer));
        assert_eq!(simple.integer(), Some(75));
        assert_eq!(simple.real(), None);

        assert_eq!(value.as_int(), Some(75));
        assert_eq!(value.as_text().as_deref(), Some("75"));
        assert_eq!(value.as_double(), Some(75.0));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.type_path().unwrap().to_string(), "IfcInteger");

        let unit = IfcSIUnit::create(&store, model).unwrap();
        unit.set_unit_type(IfcUnitEnum::LengthUnit).unwrap();
        unit.set_prefix(IfcSIPrefix::Milli).unwrap();
        unit.set_name(IfcSIUnitName::Metre).unwrap();
        measure.unit_component().put_named_unit(unit.cast()).unwrap();

        let named = measure.unit_component().named_unit().unwrap();
        assert_eq!(named.unit_type(), Some(IfcUnitEnum::LengthUnit));
        let si: IfcSIUnit = named.cast();
        assert_eq!(si.prefix(), Some(IfcSIPrefix::Milli));
        assert_eq!(si.name(), Some(IfcSIUnitName::Metre));
    }

    #[test]
    fn test_nested_select_writes_reach_the_slot() {
        let (store, model) = open();
        let prop = IfcPropertySingleValue::create(&store, model).unwrap();
        prop.set_name("Length").unwrap();

        let nominal = prop.nominal_value();
        nominal.measure_value().put_length_measure(2.5).unwrap();
        assert_eq!(prop.nominal_value().kind(), Some(IfcValueKind::MeasureValue));

        // A stale nested view still reads the current slot
        let simple = nominal.simple_value();
        prop.nominal_value().simple_value().put_logical(Logical::Unknown).unwrap();
        assert_eq!(simple.logical(), Some(Logical::Unknown));
        assert!(!nominal.measure_value().is_length_measure());
        assert_eq!(store.live_adbs(), 1);
    }

    #[test]
    fn test_complex_number() {
        let (store, model) = open();
        let prop = IfcPropertySingleValue::create(&store, model).unwrap();
        let measure = prop.nominal_value().measure_value();
        measure.put_complex_number(&[1.5, -2.0]).unwrap();

        let read = prop.nominal_value().measure_value();
        assert!(read.is_complex_number());
        assert_eq!(read.complex_number(), Some(vec![1.5, -2.0]));
        assert_eq!(read.area_measure(), None);

        measure.put_count_measure(3.0).unwrap();
        assert_eq!(store.live_aggregates(), 0);
    }

    #[test]
    fn test_coordinate_lists() {
        let (store, model) = open();
        let points = IfcCartesianPointList3D::create(&store, model).unwrap();
        let coords = vec![
            vec![0.0, 0.0, 0.0],
            vec![1.0, 0.5, 0.0],
            vec![1.0, 1.0, 2.25],
        ];
        points.set_coord_list(&coords).unwrap();
        assert_eq!(points.coord_list(), coords);

        let flat = IfcCartesianPointList2D::create(&store, model).unwrap();
        assert!(flat.coord_list().is_empty());
    }

    #[test]
    fn test_enumerated_values() {
        let (store, model) = open();
        let prop = IfcPropertyEnumeratedValue::create(&store, model).unwrap();
        prop.set_name("Status").unwrap();

        let new = IfcValue::detached(prop.entity());
        new.simple_value().put_label("NEW".to_string()).unwrap();
        let ratio = IfcValue::detached(prop.entity());
        ratio.measure_value().put_ratio_measure(0.25).unwrap();
        let unset = IfcValue::detached(prop.entity());

        prop.set_enumeration_values(&[new, ratio, unset]).unwrap();

        let values = prop.enumeration_values();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].simple_value().label().as_deref(), Some("NEW"));
        assert_eq!(values[1].kind(), Some(IfcValueKind::MeasureValue));
        assert_eq!(values[1].measure_value().ratio_measure(), Some(0.25));

        drop(values);
        assert_eq!(store.live_adbs(), 0);
    }

    #[test]
    fn test_textures() {
        let (store, model) = open();
        let pixels = IfcPixelTexture::create(&store, model).unwrap();
        pixels.set_repeat_s(true).unwrap();
        pixels.set_width(2).unwrap();
        pixels.set_height(1).unwrap();
        pixels.set_colour_components(3).unwrap();
        pixels
            .set_pixel(&["FF0000".to_string(), "00FF00".to_string()])
            .unwrap();

        assert_eq!(pixels.repeat_s(), Some(true));
        assert_eq!(pixels.repeat_t(), None);
        assert_eq!(pixels.width(), Some(2));
        assert_eq!(pixels.pixel(), vec!["FF0000", "00FF00"]);

        let blob = IfcBlobTexture::create(&store, model).unwrap();
        blob.set_raster_format("PNG").unwrap();
        blob.set_raster_code("0A1B").unwrap();
        assert_eq!(blob.raster_code().as_deref(), Some("0A1B"));
    }

    #[test]
    fn test_related_objects_set() {
        let (store, model) = open();
        let group = IfcGroup::create(&store, model).unwrap();
        let wall = IfcWall::create(&store, model).unwrap();
        let slab = IfcSlab::create(&store, model).unwrap();
        let person = IfcPerson::create(&store, model).unwrap();

        let rel = IfcRelAssignsToGroup::create(&store, model).unwrap();
        rel.set_relating_group(group).unwrap();
        rel.set_related_objects(&[wall.cast(), slab.cast(), wall.cast()])
            .unwrap();
        rel.set_related_objects_type(IfcObjectTypeEnum::Product).unwrap();

        let related = rel.related_objects();
        assert_eq!(related.len(), 2);
        assert_eq!(related[0].entity(), wall.entity());
        assert_eq!(related[1].entity_name().as_deref(), Some("IfcSlab"));
        assert_eq!(rel.relating_group(), Some(group));

        // A person is not an object definition: the cast is null and the
        // write is rejected without touching the stored set
        let result = rel.set_related_objects(&[wall.cast(), person.cast()]);
        assert!(matches!(result, Err(BindingError::NullValue(_))));
        assert_eq!(rel.related_objects().len(), 2);
    }

    #[test]
    fn test_entity_reference_kind_checked() {
        let (store, model) = open();
        let person = IfcPerson::create(&store, model).unwrap();
        let org = IfcOrganization::create(&store, model).unwrap();
        person.set_family_name("Doe").unwrap();
        person
            .set_middle_names(&["Alex".to_string(), "Sam".to_string()])
            .unwrap();

        let both = IfcPersonAndOrganization::create(&store, model).unwrap();
        both.set_the_person(person).unwrap();
        assert_eq!(
            both.set_the_organization(person),
            Err(BindingError::kind_mismatch("IfcOrganization", "IfcPerson"))
        );
        both.set_the_organization(org).unwrap();

        let read = both.the_person().unwrap();
        assert_eq!(read.family_name().as_deref(), Some("Doe"));
        assert_eq!(read.middle_names(), vec!["Alex", "Sam"]);
        assert_eq!(both.the_organization(), Some(org));

        let rel = IfcRelAggregates::create(&store, model).unwrap();
        let site = IfcSite::create(&store, model).unwrap();
        rel.set_relating_object(site).unwrap();
        assert_eq!(
            rel.relating_object().map(|o| o.entity_name()),
            Some(Some("IfcSite".to_string()))
        );
    }

    #[test]
    fn test_unit_assignment() {
        let (store, model) = open();
        let assignment = IfcUnitAssignment::create(&store, model).unwrap();
        let metre = IfcSIUnit::create(&store, model).unwrap();
        metre.set_unit_type(IfcUnitEnum::LengthUnit).unwrap();
        metre.set_name(IfcSIUnitName::Metre).unwrap();
        let euro = IfcMonetaryUnit::create(&store, model).unwrap();
        euro.set_currency("EUR").unwrap();

        let length = IfcUnit::detached(assignment.entity());
        length.put_named_unit(metre.cast()).unwrap();
        let money = IfcUnit::detached(assignment.entity());
        money.put_monetary_unit(euro).unwrap();
        assignment.set_units(&[length, money]).unwrap();

        let units = assignment.units();
        let kinds: Vec<_> = units.iter().map(|u| u.kind()).collect();
        assert_eq!(
            kinds,
            vec![Some(IfcUnitKind::NamedUnit), Some(IfcUnitKind::MonetaryUnit)]
        );
        assert_eq!(
            units[1].monetary_unit().and_then(|u| u.currency()).as_deref(),
            Some("EUR")
        );
    }

    #[test]
    fn test_poly_curve_segments() {
        let (store, model) = open();
        let points = IfcCartesianPointList2D::create(&store, model).unwrap();
        points
            .set_coord_list(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![1.0, 1.0], vec![0.0, 1.0]])
            .unwrap();

        let curve = IfcIndexedPolyCurve::create(&store, model).unwrap();
        curve.set_points(points).unwrap();
        curve.set_self_intersect(false).unwrap();

        let line = IfcSegmentIndexSelect::detached(curve.entity());
        line.put_line_index(&[1, 2]).unwrap();
        let arc = IfcSegmentIndexSelect::detached(curve.entity());
        arc.put_arc_index(&[2, 3, 4]).unwrap();
        curve.set_segments(&[line, arc]).unwrap();

        let segments = curve.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].line_index(), Some(vec![1, 2]));
        assert_eq!(segments[0].arc_index(), None);
        assert_eq!(segments[1].arc_index(), Some(vec![2, 3, 4]));
        assert_eq!(curve.points().map(|p| p.entity()), Some(points.entity()));
        assert_eq!(curve.self_intersect(), Some(false));

        curve.clear_segments().unwrap();
        assert!(curve.segments().is_empty());
    }

    #[test]
    fn test_site_and_door() {
        let (store, model) = open();
        let site = IfcSite::create(&store, model).unwrap();
        site.set_ref_latitude(&[47, 22, 30, 0]).unwrap();
        site.set_ref_elevation(412.5).unwrap();
        site.set_composition_type(IfcElementCompositionEnum::Element).unwrap();
        assert_eq!(site.ref_latitude(), vec![47, 22, 30, 0]);
        assert!(site.ref_longitude().is_empty());
        assert_eq!(site.ref_elevation(), Some(412.5));
        assert_eq!(site.composition_type(), Some(IfcElementCompositionEnum::Element));

        let door = IfcDoor::create(&store, model).unwrap();
        door.set_overall_height(2.1).unwrap();
        door.set_predefined_type(IfcDoorTypeEnum::Gate).unwrap();
        assert_eq!(door.overall_height(), Some(2.1));
        assert_eq!(door.overall_width(), None);
        assert_eq!(door.predefined_type(), Some(IfcDoorTypeEnum::Gate));
    }

    #[test]
    fn test_describe_wall() {
        let (store, model) = open();
        let wall = IfcWall::create(&store, model).unwrap();
        let description = wall.describe().unwrap();
        let text = description.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("IfcWall: IfcBuildingElement"));
        assert_eq!(
            lines.next(),
            Some("    GlobalId: direct text defined by IfcRoot")
        );
        assert_eq!(description.attributes.len(), 8);
        assert_eq!(description.direct_attributes().count(), 6);
    }
}
