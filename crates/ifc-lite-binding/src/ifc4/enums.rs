// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC4 enumerations

express_enum! {
    pub enum IfcWallTypeEnum: IFC_WALL_TYPE_ENUM("IfcWallTypeEnum", Enumeration) {
        Movable = "MOVABLE",
        Parapet = "PARAPET",
        Partitioning = "PARTITIONING",
        PlumbingWall = "PLUMBINGWALL",
        Shear = "SHEAR",
        SolidWall = "SOLIDWALL",
        Standard = "STANDARD",
        Polygonal = "POLYGONAL",
        ElementedWall = "ELEMENTEDWALL",
        UserDefined = "USERDEFINED",
        NotDefined = "NOTDEFINED",
    }
}

express_enum! {
    pub enum IfcSlabTypeEnum: IFC_SLAB_TYPE_ENUM("IfcSlabTypeEnum", Enumeration) {
        Floor = "FLOOR",
        Roof = "ROOF",
        Landing = "LANDING",
        BaseSlab = "BASESLAB",
        UserDefined = "USERDEFINED",
        NotDefined = "NOTDEFINED",
    }
}

express_enum! {
    pub enum IfcDoorTypeEnum: IFC_DOOR_TYPE_ENUM("IfcDoorTypeEnum", Enumeration) {
        Door = "DOOR",
        Gate = "GATE",
        Trapdoor = "TRAPDOOR",
        UserDefined = "USERDEFINED",
        NotDefined = "NOTDEFINED",
    }
}

express_enum! {
    pub enum IfcElementCompositionEnum: IFC_ELEMENT_COMPOSITION_ENUM("IfcElementCompositionEnum", Enumeration) {
        Complex = "COMPLEX",
        Element = "ELEMENT",
        Partial = "PARTIAL",
    }
}

express_enum! {
    /// Decimal prefixes of SI units
    pub enum IfcSIPrefix: IFC_SI_PREFIX("IfcSIPrefix", Enumeration) {
        Exa = "EXA",
        Peta = "PETA",
        Tera = "TERA",
        Giga = "GIGA",
        Mega = "MEGA",
        Kilo = "KILO",
        Hecto = "HECTO",
        Deca = "DECA",
        Deci = "DECI",
        Centi = "CENTI",
        Milli = "MILLI",
        Micro = "MICRO",
        Nano = "NANO",
        Pico = "PICO",
        Femto = "FEMTO",
        Atto = "ATTO",
    }
}

express_enum! {
    pub enum IfcSIUnitName: IFC_SI_UNIT_NAME("IfcSIUnitName", Enumeration) {
        Ampere = "AMPERE",
        Becquerel = "BECQUEREL",
        Candela = "CANDELA",
        Coulomb = "COULOMB",
        CubicMetre = "CUBIC_METRE",
        DegreeCelsius = "DEGREE_CELSIUS",
        Farad = "FARAD",
        Gram = "GRAM",
        Gray = "GRAY",
        Henry = "HENRY",
        Hertz = "HERTZ",
        Joule = "JOULE",
        Kelvin = "KELVIN",
        Lumen = "LUMEN",
        Lux = "LUX",
        Metre = "METRE",
        Mole = "MOLE",
        Newton = "NEWTON",
        Ohm = "OHM",
        Pascal = "PASCAL",
        Radian = "RADIAN",
        Second = "SECOND",
        Siemens = "SIEMENS",
        Sievert = "SIEVERT",
        SquareMetre = "SQUARE_METRE",
        Steradian = "STERADIAN",
        Tesla = "TESLA",
        Volt = "VOLT",
        Watt = "WATT",
        Weber = "WEBER",
    }
}

express_enum! {
    pub enum IfcUnitEnum: IFC_UNIT_ENUM("IfcUnitEnum", Enumeration) {
        AbsorbedDoseUnit = "ABSORBEDDOSEUNIT",
        AmountOfSubstanceUnit = "AMOUNTOFSUBSTANCEUNIT",
        AreaUnit = "AREAUNIT",
        DoseEquivalentUnit = "DOSEEQUIVALENTUNIT",
        ElectricCapacitanceUnit = "ELECTRICCAPACITANCEUNIT",
        ElectricChargeUnit = "ELECTRICCHARGEUNIT",
        ElectricConductanceUnit = "ELECTRICCONDUCTANCEUNIT",
        ElectricCurrentUnit = "ELECTRICCURRENTUNIT",
        ElectricResistanceUnit = "ELECTRICRESISTANCEUNIT",
        ElectricVoltageUnit = "ELECTRICVOLTAGEUNIT",
        EnergyUnit = "ENERGYUNIT",
        ForceUnit = "FORCEUNIT",
        FrequencyUnit = "FREQUENCYUNIT",
        IlluminanceUnit = "ILLUMINANCEUNIT",
        InductanceUnit = "INDUCTANCEUNIT",
        LengthUnit = "LENGTHUNIT",
        LuminousFluxUnit = "LUMINOUSFLUXUNIT",
        LuminousIntensityUnit = "LUMINOUSINTENSITYUNIT",
        MagneticFluxDensityUnit = "MAGNETICFLUXDENSITYUNIT",
        MagneticFluxUnit = "MAGNETICFLUXUNIT",
        MassUnit = "MASSUNIT",
        PlaneAngleUnit = "PLANEANGLEUNIT",
        PowerUnit = "POWERUNIT",
        PressureUnit = "PRESSUREUNIT",
        RadioactivityUnit = "RADIOACTIVITYUNIT",
        SolidAngleUnit = "SOLIDANGLEUNIT",
        ThermodynamicTemperatureUnit = "THERMODYNAMICTEMPERATUREUNIT",
        TimeUnit = "TIMEUNIT",
        VolumeUnit = "VOLUMEUNIT",
        UserDefined = "USERDEFINED",
    }
}

express_enum! {
    pub enum IfcObjectTypeEnum: IFC_OBJECT_TYPE_ENUM("IfcObjectTypeEnum", Enumeration) {
        Product = "PRODUCT",
        Process = "PROCESS",
        Control = "CONTROL",
        Resource = "RESOURCE",
        Actor = "ACTOR",
        Group = "GROUP",
        Project = "PROJECT",
        NotDefined = "NOTDEFINED",
    }
}
