// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC4 SELECT types
//!
//! Defined types are single-level: a value put as `IfcPositiveLengthMeasure`
//! carries that name alone in its type path.

use super::entities::{
    IfcMonetaryUnit, IfcNamedUnit, IfcOrganization, IfcPerson, IfcPersonAndOrganization,
};
use crate::aggregation::{ElementKind, Integers, Reals};
use crate::enums::{Logical, LOGICAL};
use ifc_lite_sdai::StoreKind;

/// Members of REAL aggregates such as `IfcComplexNumber`
pub static REAL_MEMBER: ElementKind = ElementKind::Value(StoreKind::Real);

/// Members of `IfcPositiveInteger` index lists
pub static POSITIVE_INTEGER_MEMBER: ElementKind = ElementKind::Value(StoreKind::Integer);

express_select! {
    pub struct IfcActorSelect<'s>: IFC_ACTOR_SELECT("IfcActorSelect"), IfcActorSelectKind {
        Organization(entity IfcOrganization) { is_organization, organization, put_organization }
        Person(entity IfcPerson) { is_person, person, put_person }
        PersonAndOrganization(entity IfcPersonAndOrganization) {
            is_person_and_organization,
            person_and_organization,
            put_person_and_organization,
        }
    }
}

express_select! {
    pub struct IfcSimpleValue<'s>: IFC_SIMPLE_VALUE("IfcSimpleValue"), IfcSimpleValueKind {
        Binary(value "IfcBinary", Binary, String) { is_binary, binary, put_binary }
        Boolean(value "IfcBoolean", Boolean, bool) { is_boolean, boolean, put_boolean }
        Identifier(value "IfcIdentifier", String, String) { is_identifier, identifier, put_identifier }
        Integer(value "IfcInteger", Integer, i64) { is_integer, integer, put_integer }
        Label(value "IfcLabel", String, String) { is_label, label, put_label }
        Logical(enumeration "IfcLogical", Logical, LOGICAL) { is_logical, logical, put_logical }
        PositiveInteger(value "IfcPositiveInteger", Integer, i64) {
            is_positive_integer,
            positive_integer,
            put_positive_integer,
        }
        Real(value "IfcReal", Real, f64) { is_real, real, put_real }
        Text(value "IfcText", String, String) { is_text, text, put_text }
        TimeStamp(value "IfcTimeStamp", Integer, i64) { is_time_stamp, time_stamp, put_time_stamp }
    }
}

express_select! {
    pub struct IfcMeasureValue<'s>: IFC_MEASURE_VALUE("IfcMeasureValue"), IfcMeasureValueKind {
        AreaMeasure(value "IfcAreaMeasure", Real, f64) { is_area_measure, area_measure, put_area_measure }
        /// ARRAY [1:2] OF REAL, real part first
        ComplexNumber(aggregate "IfcComplexNumber", REAL_MEMBER, Reals => f64) {
            is_complex_number,
            complex_number,
            put_complex_number,
        }
        CountMeasure(value "IfcCountMeasure", Real, f64) { is_count_measure, count_measure, put_count_measure }
        DescriptiveMeasure(value "IfcDescriptiveMeasure", String, String) {
            is_descriptive_measure,
            descriptive_measure,
            put_descriptive_measure,
        }
        LengthMeasure(value "IfcLengthMeasure", Real, f64) { is_length_measure, length_measure, put_length_measure }
        MassMeasure(value "IfcMassMeasure", Real, f64) { is_mass_measure, mass_measure, put_mass_measure }
        PlaneAngleMeasure(value "IfcPlaneAngleMeasure", Real, f64) {
            is_plane_angle_measure,
            plane_angle_measure,
            put_plane_angle_measure,
        }
        PositiveLengthMeasure(value "IfcPositiveLengthMeasure", Real, f64) {
            is_positive_length_measure,
            positive_length_measure,
            put_positive_length_measure,
        }
        RatioMeasure(value "IfcRatioMeasure", Real, f64) { is_ratio_measure, ratio_measure, put_ratio_measure }
        VolumeMeasure(value "IfcVolumeMeasure", Real, f64) { is_volume_measure, volume_measure, put_volume_measure }
    }
}

express_select! {
    pub struct IfcDerivedMeasureValue<'s>: IFC_DERIVED_MEASURE_VALUE("IfcDerivedMeasureValue"), IfcDerivedMeasureValueKind {
        LinearVelocityMeasure(value "IfcLinearVelocityMeasure", Real, f64) {
            is_linear_velocity_measure,
            linear_velocity_measure,
            put_linear_velocity_measure,
        }
        MassDensityMeasure(value "IfcMassDensityMeasure", Real, f64) {
            is_mass_density_measure,
            mass_density_measure,
            put_mass_density_measure,
        }
        PowerMeasure(value "IfcPowerMeasure", Real, f64) { is_power_measure, power_measure, put_power_measure }
        ThermalTransmittanceMeasure(value "IfcThermalTransmittanceMeasure", Real, f64) {
            is_thermal_transmittance_measure,
            thermal_transmittance_measure,
            put_thermal_transmittance_measure,
        }
    }
}

express_select! {
    pub struct IfcValue<'s>: IFC_VALUE("IfcValue"), IfcValueKind {
        DerivedMeasureValue(select "IfcDerivedMeasureValue", IfcDerivedMeasureValue, IFC_DERIVED_MEASURE_VALUE) {
            is_derived_measure_value,
            derived_measure_value,
        }
        MeasureValue(select "IfcMeasureValue", IfcMeasureValue, IFC_MEASURE_VALUE) {
            is_measure_value,
            measure_value,
        }
        SimpleValue(select "IfcSimpleValue", IfcSimpleValue, IFC_SIMPLE_VALUE) {
            is_simple_value,
            simple_value,
        }
    }
}

express_select! {
    pub struct IfcUnit<'s>: IFC_UNIT("IfcUnit"), IfcUnitKind {
        MonetaryUnit(entity IfcMonetaryUnit) { is_monetary_unit, monetary_unit, put_monetary_unit }
        NamedUnit(entity IfcNamedUnit) { is_named_unit, named_unit, put_named_unit }
    }
}

express_select! {
    pub struct IfcSegmentIndexSelect<'s>: IFC_SEGMENT_INDEX_SELECT("IfcSegmentIndexSelect"), IfcSegmentIndexSelectKind {
        /// Three point indices: start, intermediate, end
        ArcIndex(aggregate "IfcArcIndex", POSITIVE_INTEGER_MEMBER, Integers => i64) {
            is_arc_index,
            arc_index,
            put_arc_index,
        }
        LineIndex(aggregate "IfcLineIndex", POSITIVE_INTEGER_MEMBER, Integers => i64) {
            is_line_index,
            line_index,
            put_line_index,
        }
    }
}
