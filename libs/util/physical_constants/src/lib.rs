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

//! ICAO Standard Atmosphere primary constants and characteristics.
//!
//! See the Manual of the ICAO Standard Atmosphere, ICAO Doc 7488/3. Dimensionless
//! coefficients are plain `f64`; everything with a unit is a typed quantity.
use absolute_unit::{
    kelvin, kilograms_per_meter3, meters, meters_per_second, meters_per_second2, pascals,
    Acceleration, Density, Kelvin, Kilograms, Length, Meters, Pascals, Pressure, Seconds,
    Temperature, Velocity,
};
use once_cell::sync::Lazy;

// Constants from ICAO Doc 7488/3, Table A.

/// Acceleration due to gravity at latitude 45°32'33'', per Lambert's equation.
pub static STANDARD_GRAVITY: Lazy<Acceleration<Meters, Seconds>> =
    Lazy::new(|| meters_per_second2!(9.806_65));

/// Adiabatic index of air (kappa).
pub const ADIABATIC_INDEX: f64 = 1.4;

/// Specific gas constant for dry air (R) in J/(kg·K).
pub const GAS_CONSTANT_AIR: f64 = 287.052_87;

pub static SEA_LEVEL_TEMPERATURE: Lazy<Temperature<Kelvin>> = Lazy::new(|| kelvin!(288.15));
pub static SEA_LEVEL_PRESSURE: Lazy<Pressure<Pascals>> = Lazy::new(|| pascals!(101_325.0));
pub static SEA_LEVEL_DENSITY: Lazy<Density<Kilograms, Meters>> =
    Lazy::new(|| kilograms_per_meter3!(1.225));

/// Sea level speed of sound (a0), ICAO Doc 7488/3, Table C.
pub static SEA_LEVEL_SPEED_OF_SOUND: Lazy<Velocity<Meters, Seconds>> =
    Lazy::new(|| meters_per_second!(340.294));

// Constants from ICAO Doc 7488/3, Table D.

pub static TROPOPAUSE_TEMPERATURE: Lazy<Temperature<Kelvin>> = Lazy::new(|| kelvin!(216.65));

/// Temperature gradient (lapse rate) from sea level up to the tropopause, in K/m.
pub const TEMPERATURE_GRADIENT: f64 = -0.006_5;

pub static TROPOPAUSE_ALTITUDE: Lazy<Length<Meters>> = Lazy::new(|| meters!(11_000.0));

/// Pressure at `TROPOPAUSE_ALTITUDE`; BADA Rev 3.12, Eq 3.1-19.
pub static TROPOPAUSE_PRESSURE: Lazy<Pressure<Pascals>> =
    Lazy::new(|| pascals!(22_632.040_095_007_81));
