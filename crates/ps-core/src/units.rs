// ps-core/src/units.rs

use uom::si::f64::{Power as UomPower, Pressure as UomPressure, VolumeRate as UomVolumeRate};

// Public canonical unit types (SI, f64)
pub type FlowRate = UomVolumeRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;

#[inline]
pub fn lpm(v: f64) -> FlowRate {
    use uom::si::volume_rate::liter_per_minute;
    FlowRate::new::<liter_per_minute>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

pub mod constants {
    /// Datasheet conversion factor for the pressure column. The product
    /// literature rounds to 14.5 rather than the exact 14.5038, and the
    /// displayed PSI figures must match the printed catalog.
    pub const PSI_PER_BAR: f64 = 14.5;
}

/// PSI equivalent of a pressure given in bar, using the datasheet factor.
#[inline]
pub fn bar_to_psi(bar: f64) -> f64 {
    bar * constants::PSI_PER_BAR
}
