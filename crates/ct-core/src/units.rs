//! SI quantity types and shorthand constructors.

use uom::si::f64 as si;

pub type Length = si::Length;
pub type Mass = si::Mass;
pub type Volume = si::Volume;
pub type Density = si::MassDensity;
pub type MassRate = si::MassRate;
pub type Power = si::Power;
pub type Pressure = si::Pressure;
pub type Temperature = si::ThermodynamicTemperature;
pub type ThermalConductivity = si::ThermalConductivity;
/// Specific energy, e.g. enthalpy of vaporisation [J/kg].
pub type SpecEnergy = si::AvailableEnergy;

macro_rules! unit_ctor {
    ($($name:ident => $ty:ident, $unit:ty;)*) => {
        $(
            #[inline]
            pub fn $name(v: f64) -> $ty {
                $ty::new::<$unit>(v)
            }
        )*
    };
}

unit_ctor! {
    m => Length, uom::si::length::meter;
    kg => Mass, uom::si::mass::kilogram;
    m3 => Volume, uom::si::volume::cubic_meter;
    kg_per_m3 => Density, uom::si::mass_density::kilogram_per_cubic_meter;
    kgps => MassRate, uom::si::mass_rate::kilogram_per_second;
    w => Power, uom::si::power::watt;
    pa => Pressure, uom::si::pressure::pascal;
    mpa => Pressure, uom::si::pressure::megapascal;
    k => Temperature, uom::si::thermodynamic_temperature::kelvin;
    w_per_m_k => ThermalConductivity, uom::si::thermal_conductivity::watt_per_meter_kelvin;
    j_per_kg => SpecEnergy, uom::si::available_energy::joule_per_kilogram;
}
