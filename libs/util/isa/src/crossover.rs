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
use crate::{
    airspeed::{calculate_true_air_speed, mach_true_air_speed, MU},
    atmosphere::{calculate_isa_pressure, calculate_isa_temperature},
    error::ensure,
    IsaError, Result,
};
use absolute_unit::{kelvin, meters, scalar, Length, Meters, Scalar, Seconds, Velocity};
use log::trace;
use physical_constants::{ADIABATIC_INDEX, SEA_LEVEL_SPEED_OF_SOUND};

/// Lower edge of the crossover search, in meters.
pub const CROSSOVER_SEARCH_FLOOR: f64 = -2_000.0;

/// Upper edge of the crossover search, in meters.
pub const CROSSOVER_SEARCH_CEILING: f64 = 20_000.0;

// The search stops once the bracket is narrower than this, in meters. That is far
// below the ~1e-6 relative precision of the reference data at any crossover in range.
const ALTITUDE_TOLERANCE: f64 = 1e-6;

// Halving the 22km bracket down to ALTITUDE_TOLERANCE takes 35 iterations.
const MAX_ITERATIONS: usize = 100;

// TAS from the CAS minus TAS from the Mach number in the standard atmosphere. It
// increases with altitude: CAS yields more TAS as the air thins, while the speed of
// sound falls (or holds, above the tropopause).
fn tas_difference(
    cas: Velocity<Meters, Seconds>,
    mach: f64,
    altitude: Length<Meters>,
) -> Result<f64> {
    let pressure = calculate_isa_pressure(altitude)?;
    let temperature = calculate_isa_temperature(altitude, kelvin!(0))?;
    let from_cas = calculate_true_air_speed(cas, pressure, temperature)?;
    let from_mach = mach_true_air_speed(mach, temperature)?;
    Ok((from_cas - from_mach).f64())
}

/// The altitude at which the given Calibrated Air Speed (CAS) and Mach number
/// correspond to the same True Air Speed (TAS), found by bisection between
/// `CROSSOVER_SEARCH_FLOOR` and `CROSSOVER_SEARCH_CEILING`.
pub fn calculate_crossover_altitude(
    cas: Velocity<Meters, Seconds>,
    mach: f64,
) -> Result<Length<Meters>> {
    ensure(
        cas.is_positive(),
        "calibrated air speed",
        cas.f64(),
        "must be positive and finite",
    )?;
    ensure(
        mach.is_finite() && mach > 0.0,
        "mach",
        mach,
        "must be positive and finite",
    )?;

    let mut low = meters!(CROSSOVER_SEARCH_FLOOR);
    let mut high = meters!(CROSSOVER_SEARCH_CEILING);
    let mut low_difference = tas_difference(cas, mach, low)?;
    let high_difference = tas_difference(cas, mach, high)?;
    if low_difference == 0.0 {
        return Ok(low);
    }
    if high_difference == 0.0 {
        return Ok(high);
    }
    if low_difference.signum() == high_difference.signum() {
        return Err(IsaError::NoCrossover {
            cas: cas.f64(),
            mach,
            min: CROSSOVER_SEARCH_FLOOR,
            max: CROSSOVER_SEARCH_CEILING,
        });
    }

    for iteration in 1..=MAX_ITERATIONS {
        let mid = low + (high - low) * scalar!(0.5);
        let difference = tas_difference(cas, mach, mid)?;
        if !difference.is_finite() {
            break;
        }
        if difference == 0.0 || (high - low).f64() < ALTITUDE_TOLERANCE {
            trace!(
                "crossover for {} CAS at Mach {}: {} after {} iterations",
                cas,
                mach,
                mid,
                iteration
            );
            return Ok(mid);
        }
        if difference.signum() == low_difference.signum() {
            low = mid;
            low_difference = difference;
        } else {
            high = mid;
        }
    }

    Err(IsaError::Convergence {
        iterations: MAX_ITERATIONS,
        width: (high - low).f64(),
    })
}

/// The pressure ratio (P / P0) at which the impact pressure of the given CAS equals
/// that of the given Mach number; the closed form counterpart of
/// `calculate_crossover_altitude` for crossovers in the troposphere.
/// See BADA Rev 3.12, Eq 3.1-29.
pub fn calculate_crossover_pressure_ratio(
    cas: Velocity<Meters, Seconds>,
    mach: f64,
) -> Result<Scalar> {
    ensure(
        cas.is_finite() && cas.f64() >= 0.0,
        "calibrated air speed",
        cas.f64(),
        "must be finite and non-negative",
    )?;
    ensure(
        mach.is_finite() && mach > 0.0,
        "mach",
        mach,
        "must be positive and finite",
    )?;

    let half_kappa_minus_one = (ADIABATIC_INDEX - 1.0) / 2.0;
    let cas_mach = cas / *SEA_LEVEL_SPEED_OF_SOUND;
    let numerator = (1.0 + half_kappa_minus_one * cas_mach * cas_mach).powf(1.0 / MU) - 1.0;
    let denominator = (1.0 + half_kappa_minus_one * mach * mach).powf(1.0 / MU) - 1.0;
    Ok(scalar!(numerator / denominator))
}
