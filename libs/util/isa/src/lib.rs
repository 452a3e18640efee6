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

//! The ICAO International Standard Atmosphere and the airspeed conversions built on it.
//!
//! Every function is a pure calculation over typed SI quantities. Results can be
//! chained by the caller, e.g. altitude to pressure and temperature, then on to
//! density or a true air speed. Inputs outside the physical domain produce an
//! [`IsaError`] rather than a NaN.
mod airspeed;
mod atmosphere;
mod crossover;
mod error;

pub use crate::{
    airspeed::{
        calculate_calibrated_air_speed, calculate_true_air_speed, mach_true_air_speed,
        speed_of_sound,
    },
    atmosphere::{
        calculate_density, calculate_isa_altitude, calculate_isa_pressure,
        calculate_isa_temperature, calculate_tropopause_altitude, calculate_tropopause_pressure,
        calculate_troposphere_altitude, calculate_troposphere_pressure, AtmosphereState,
        InternationalStandardAtmosphere,
    },
    crossover::{
        calculate_crossover_altitude, calculate_crossover_pressure_ratio, CROSSOVER_SEARCH_CEILING,
        CROSSOVER_SEARCH_FLOOR,
    },
    error::{IsaError, Result},
};

pub use physical_constants::{
    ADIABATIC_INDEX, GAS_CONSTANT_AIR, SEA_LEVEL_DENSITY, SEA_LEVEL_PRESSURE,
    SEA_LEVEL_SPEED_OF_SOUND, SEA_LEVEL_TEMPERATURE, STANDARD_GRAVITY, TEMPERATURE_GRADIENT,
    TROPOPAUSE_ALTITUDE, TROPOPAUSE_PRESSURE, TROPOPAUSE_TEMPERATURE,
};
