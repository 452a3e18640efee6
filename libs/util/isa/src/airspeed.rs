// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use crate::{error::ensure, Result};
use absolute_unit::{
    meters_per_second, scalar, Kelvin, Meters, Pascals, Pressure, Seconds, Temperature, Velocity,
};
use physical_constants::{
    ADIABATIC_INDEX, GAS_CONSTANT_AIR, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE,
};

/// (kappa - 1) / kappa, the coefficient of the CAS / TAS conversions.
/// See BADA Rev 3.12, Eq 3.2-14.
pub(crate) const MU: f64 = (ADIABATIC_INDEX - 1.0) / ADIABATIC_INDEX;

fn ensure_speed(speed: Velocity<Meters, Seconds>, name: &'static str) -> Result<()> {
    ensure(
        speed.is_finite() && speed.f64() >= 0.0,
        name,
        speed.f64(),
        "must be finite and non-negative",
    )
}

fn ensure_static_air(pressure: Pressure<Pascals>, temperature: Temperature<Kelvin>) -> Result<()> {
    ensure(
        pressure.is_positive(),
        "pressure",
        pressure.f64(),
        "must be positive and finite",
    )?;
    ensure(
        temperature.is_positive(),
        "temperature",
        temperature.f64(),
        "must be above absolute zero",
    )
}

/// Speed of sound in air at the given temperature. See ICAO Doc 7488/3, Eq (21).
pub fn speed_of_sound(temperature: Temperature<Kelvin>) -> Result<Velocity<Meters, Seconds>> {
    ensure(
        temperature.is_positive(),
        "temperature",
        temperature.f64(),
        "must be above absolute zero",
    )?;
    Ok(meters_per_second!(
        (ADIABATIC_INDEX * GAS_CONSTANT_AIR * temperature.f64()).sqrt()
    ))
}

/// True Air Speed (TAS) from Calibrated Air Speed (CAS) at the given static pressure
/// and temperature.
///
/// The CAS fixes the impact pressure it would produce at sea level; we then find the
/// TAS that produces that same impact pressure in the given air.
/// See BADA Rev 3.12, Eq 3.1-23.
pub fn calculate_true_air_speed(
    cas: Velocity<Meters, Seconds>,
    pressure: Pressure<Pascals>,
    temperature: Temperature<Kelvin>,
) -> Result<Velocity<Meters, Seconds>> {
    ensure_speed(cas, "calibrated air speed")?;
    ensure_static_air(pressure, temperature)?;

    let inner = MU / (2.0 * GAS_CONSTANT_AIR * SEA_LEVEL_TEMPERATURE.f64());
    let outer = 2.0 * GAS_CONSTANT_AIR / MU;

    // Impact pressure as a fraction of sea level pressure.
    let impact_ratio = (1.0 + inner * cas.f64() * cas.f64()).powf(1.0 / MU) - 1.0;
    let pressure_factor =
        (1.0 + SEA_LEVEL_PRESSURE.f64() * impact_ratio / pressure.f64()).powf(MU) - 1.0;

    let tas = meters_per_second!((outer * temperature.f64() * pressure_factor).sqrt());
    ensure_speed(tas, "true air speed")?;
    Ok(tas)
}

/// Calibrated Air Speed (CAS) from True Air Speed (TAS) at the given static pressure
/// and temperature; the exact inverse of `calculate_true_air_speed`.
/// See BADA Rev 3.12, Eq 3.1-24.
pub fn calculate_calibrated_air_speed(
    tas: Velocity<Meters, Seconds>,
    pressure: Pressure<Pascals>,
    temperature: Temperature<Kelvin>,
) -> Result<Velocity<Meters, Seconds>> {
    ensure_speed(tas, "true air speed")?;
    ensure_static_air(pressure, temperature)?;

    let inner = MU / (2.0 * GAS_CONSTANT_AIR);
    let outer = 2.0 * GAS_CONSTANT_AIR * SEA_LEVEL_TEMPERATURE.f64() / MU;

    // Impact pressure as a fraction of the static pressure.
    let impact_ratio =
        (1.0 + inner * tas.f64() * tas.f64() / temperature.f64()).powf(1.0 / MU) - 1.0;
    let pressure_factor =
        (1.0 + pressure.f64() * impact_ratio / SEA_LEVEL_PRESSURE.f64()).powf(MU) - 1.0;

    let cas = meters_per_second!((outer * pressure_factor).sqrt());
    ensure_speed(cas, "calibrated air speed")?;
    Ok(cas)
}

/// True Air Speed (TAS) from the Mach number at the given temperature.
pub fn mach_true_air_speed(
    mach: f64,
    temperature: Temperature<Kelvin>,
) -> Result<Velocity<Meters, Seconds>> {
    ensure(
        mach.is_finite() && mach >= 0.0,
        "mach",
        mach,
        "must be finite and non-negative",
    )?;
    let tas = speed_of_sound(temperature)? * scalar!(mach);
    ensure_speed(tas, "true air speed")?;
    Ok(tas)
}
