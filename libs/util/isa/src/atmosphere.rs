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
use crate::{airspeed::speed_of_sound, error::ensure, Result};
use absolute_unit::{
    kelvin, kilograms_per_meter3, meters, scalar, Density, Kelvin, Kilograms, Length, Meters,
    Pascals, Pressure, Seconds, Temperature, Velocity,
};
use once_cell::sync::Lazy;
use physical_constants::{
    GAS_CONSTANT_AIR, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE, STANDARD_GRAVITY,
    TEMPERATURE_GRADIENT, TROPOPAUSE_ALTITUDE, TROPOPAUSE_PRESSURE, TROPOPAUSE_TEMPERATURE,
};

/// Exponent of the troposphere pressure ratio, -g / (lapse * R) ~= 5.25588.
/// See BADA Rev 3.12, Eq 3.1-18.
pub(crate) static PRESSURE_POWER: Lazy<f64> =
    Lazy::new(|| -STANDARD_GRAVITY.f64() / (TEMPERATURE_GRADIENT * GAS_CONSTANT_AIR));

// Inverse of the above, for solving altitude from a pressure ratio.
pub(crate) static TEMPERATURE_POWER: Lazy<f64> = Lazy::new(|| 1.0 / *PRESSURE_POWER);

// Exponential decay rate of pressure in the isothermal layer, per meter.
static TROPOPAUSE_PRESSURE_FACTOR: Lazy<f64> = Lazy::new(|| {
    -STANDARD_GRAVITY.f64() / (GAS_CONSTANT_AIR * TROPOPAUSE_TEMPERATURE.f64())
});

// Far enough from sea level, the pressure overflows or underflows f64.
fn ensure_pressure(pressure: Pressure<Pascals>) -> Result<Pressure<Pascals>> {
    ensure(
        pressure.is_positive(),
        "pressure",
        pressure.f64(),
        "altitude gives no representable pressure",
    )?;
    Ok(pressure)
}

/// ISA pressure at or below the tropopause.
pub fn calculate_troposphere_pressure(altitude: Length<Meters>) -> Result<Pressure<Pascals>> {
    ensure(
        altitude.is_finite() && altitude <= *TROPOPAUSE_ALTITUDE,
        "altitude",
        altitude.f64(),
        "must be finite and at or below the tropopause",
    )?;
    let theta = 1.0 + altitude.f64() * TEMPERATURE_GRADIENT / SEA_LEVEL_TEMPERATURE.f64();
    ensure_pressure(*SEA_LEVEL_PRESSURE * scalar!(theta.powf(*PRESSURE_POWER)))
}

/// ISA pressure at or above the tropopause, where the modeled layer is isothermal.
/// See BADA Rev 3.12, Eq 3.1-20.
pub fn calculate_tropopause_pressure(altitude: Length<Meters>) -> Result<Pressure<Pascals>> {
    ensure(
        altitude.is_finite() && altitude >= *TROPOPAUSE_ALTITUDE,
        "altitude",
        altitude.f64(),
        "must be finite and at or above the tropopause",
    )?;
    let above = altitude.f64() - TROPOPAUSE_ALTITUDE.f64();
    ensure_pressure(*TROPOPAUSE_PRESSURE * scalar!((*TROPOPAUSE_PRESSURE_FACTOR * above).exp()))
}

/// The ISA pressure at the given pressure altitude.
pub fn calculate_isa_pressure(altitude: Length<Meters>) -> Result<Pressure<Pascals>> {
    ensure(altitude.is_finite(), "altitude", altitude.f64(), "must be finite")?;
    if altitude <= *TROPOPAUSE_ALTITUDE {
        calculate_troposphere_pressure(altitude)
    } else {
        calculate_tropopause_pressure(altitude)
    }
}

/// Pressure altitude for a pressure at or above the tropopause pressure. Pressures
/// higher than sea level pressure yield negative altitudes.
/// See BADA Rev 3.12, Eq 3.1-8.
pub fn calculate_troposphere_altitude(pressure: Pressure<Pascals>) -> Result<Length<Meters>> {
    ensure(
        pressure.is_finite() && pressure >= *TROPOPAUSE_PRESSURE,
        "pressure",
        pressure.f64(),
        "must be finite and at or above the tropopause pressure",
    )?;
    let delta = pressure / *SEA_LEVEL_PRESSURE;
    let theta = delta.f64().powf(*TEMPERATURE_POWER);
    Ok(meters!(
        (theta - 1.0) * SEA_LEVEL_TEMPERATURE.f64() / TEMPERATURE_GRADIENT
    ))
}

pub fn calculate_tropopause_altitude(pressure: Pressure<Pascals>) -> Result<Length<Meters>> {
    ensure(
        pressure.is_positive() && pressure <= *TROPOPAUSE_PRESSURE,
        "pressure",
        pressure.f64(),
        "must be positive and at or below the tropopause pressure",
    )?;
    let above = (pressure / *TROPOPAUSE_PRESSURE).f64().ln() / *TROPOPAUSE_PRESSURE_FACTOR;
    Ok(*TROPOPAUSE_ALTITUDE + meters!(above))
}

/// The pressure altitude for the given pressure: the closed form inverse of
/// `calculate_isa_pressure`.
pub fn calculate_isa_altitude(pressure: Pressure<Pascals>) -> Result<Length<Meters>> {
    ensure(
        pressure.is_positive(),
        "pressure",
        pressure.f64(),
        "must be positive and finite",
    )?;
    if pressure >= *TROPOPAUSE_PRESSURE {
        calculate_troposphere_altitude(pressure)
    } else {
        calculate_tropopause_altitude(pressure)
    }
}

/// The ISA temperature at the given altitude on a day whose sea level temperature
/// differs from standard by `delta_temperature`. The offset applies equally above
/// the tropopause, where the temperature is otherwise constant.
/// See ICAO Doc 7488/3, Eq (11).
pub fn calculate_isa_temperature(
    altitude: Length<Meters>,
    delta_temperature: Temperature<Kelvin>,
) -> Result<Temperature<Kelvin>> {
    ensure(altitude.is_finite(), "altitude", altitude.f64(), "must be finite")?;
    ensure(
        delta_temperature.is_finite(),
        "temperature offset",
        delta_temperature.f64(),
        "must be finite",
    )?;
    let temperature = if altitude <= *TROPOPAUSE_ALTITUDE {
        kelvin!(
            SEA_LEVEL_TEMPERATURE.f64()
                + delta_temperature.f64()
                + TEMPERATURE_GRADIENT * altitude.f64()
        )
    } else {
        *TROPOPAUSE_TEMPERATURE + delta_temperature
    };
    ensure(
        temperature.is_positive(),
        "temperature",
        temperature.f64(),
        "must be above absolute zero",
    )?;
    Ok(temperature)
}

/// Air density from the ideal gas law. See ICAO Doc 7488/3, Eq (3).
pub fn calculate_density(
    pressure: Pressure<Pascals>,
    temperature: Temperature<Kelvin>,
) -> Result<Density<Kilograms, Meters>> {
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
    )?;
    let density = kilograms_per_meter3!(pressure.f64() / (GAS_CONSTANT_AIR * temperature.f64()));
    ensure(
        density.is_positive(),
        "density",
        density.f64(),
        "must be positive and finite",
    )?;
    Ok(density)
}

/// The atmosphere at a single altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereState {
    pub altitude: Length<Meters>,
    pub pressure: Pressure<Pascals>,
    pub temperature: Temperature<Kelvin>,
    pub density: Density<Kilograms, Meters>,
    pub speed_of_sound: Velocity<Meters, Seconds>,
}

pub struct InternationalStandardAtmosphere;

impl InternationalStandardAtmosphere {
    pub fn at_altitude(
        altitude: Length<Meters>,
        delta_temperature: Temperature<Kelvin>,
    ) -> Result<AtmosphereState> {
        let pressure = calculate_isa_pressure(altitude)?;
        let temperature = calculate_isa_temperature(altitude, delta_temperature)?;
        let density = calculate_density(pressure, temperature)?;
        let speed_of_sound = speed_of_sound(temperature)?;

        Ok(AtmosphereState {
            altitude,
            pressure,
            temperature,
            density,
            speed_of_sound,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use absolute_unit::pascals;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_calculate_isa_pressure() -> Result<()> {
        assert_eq!(calculate_isa_pressure(meters!(0))?, *SEA_LEVEL_PRESSURE);
        assert_relative_eq!(
            calculate_isa_pressure(meters!(1_000))?,
            pascals!(89_874.563),
            max_relative = TOLERANCE
        );
        assert_relative_eq!(
            calculate_isa_pressure(meters!(2_000))?,
            pascals!(79_495.202),
            max_relative = TOLERANCE
        );
        assert_relative_eq!(
            calculate_isa_pressure(meters!(10_999))?,
            pascals!(22_635.609),
            max_relative = TOLERANCE
        );
        assert_relative_eq!(
            calculate_isa_pressure(meters!(12_000))?,
            pascals!(19_330.3825),
            max_relative = TOLERANCE
        );
        Ok(())
    }

    #[test]
    fn test_pressure_is_continuous_at_tropopause() -> Result<()> {
        let below = calculate_troposphere_pressure(*TROPOPAUSE_ALTITUDE)?;
        let above = calculate_tropopause_pressure(*TROPOPAUSE_ALTITUDE)?;
        assert_relative_eq!(below, above, max_relative = TOLERANCE);
        assert_relative_eq!(above, *TROPOPAUSE_PRESSURE);
        assert_relative_eq!(
            calculate_isa_pressure(*TROPOPAUSE_ALTITUDE)?,
            pascals!(22_632.0401),
            max_relative = TOLERANCE
        );
        Ok(())
    }

    #[test]
    fn test_pressure_layers_reject_the_other_layer() {
        assert!(calculate_troposphere_pressure(meters!(11_001)).is_err());
        assert!(calculate_tropopause_pressure(meters!(10_999)).is_err());
        assert!(calculate_isa_pressure(meters!(f64::NAN)).is_err());
    }

    #[test]
    fn test_pressure_out_of_representable_range() {
        for h in [5.0e6, 1.0e300, -1.0e300] {
            let err = calculate_isa_pressure(meters!(h)).unwrap_err();
            assert!(err.is_domain_error());
        }
        assert!(calculate_tropopause_pressure(meters!(5.0e6)).is_err());
        assert!(calculate_troposphere_pressure(meters!(-1.0e300)).is_err());
    }

    #[test]
    fn test_calculate_isa_altitude() -> Result<()> {
        assert_abs_diff_eq!(calculate_isa_altitude(*SEA_LEVEL_PRESSURE)?, meters!(0));
        assert_relative_eq!(
            calculate_isa_altitude(pascals!(105_000))?,
            meters!(-301.518_548_043_038_38),
            max_relative = TOLERANCE
        );
        assert_relative_eq!(
            calculate_isa_altitude(pascals!(SEA_LEVEL_PRESSURE.f64() - 10_000.0))?,
            meters!(867.811_522_283_841_9),
            max_relative = TOLERANCE
        );
        assert_relative_eq!(
            calculate_isa_altitude(pascals!(79_495.201_934_05))?,
            meters!(2_000),
            max_relative = TOLERANCE
        );
        assert_relative_eq!(
            calculate_isa_altitude(pascals!(60_000))?,
            meters!(4_206.422_427_725_143_3),
            max_relative = TOLERANCE
        );
        assert_relative_eq!(
            calculate_isa_altitude(*TROPOPAUSE_PRESSURE)?,
            *TROPOPAUSE_ALTITUDE,
            max_relative = TOLERANCE
        );
        assert_relative_eq!(
            calculate_isa_altitude(pascals!(19_330.3825))?,
            meters!(12_000),
            max_relative = TOLERANCE
        );
        Ok(())
    }

    #[test]
    fn test_altitude_round_trip() -> Result<()> {
        for h in (-1_000..=20_000).step_by(250) {
            let altitude = meters!(h);
            let pressure = calculate_isa_pressure(altitude)?;
            assert_abs_diff_eq!(calculate_isa_altitude(pressure)?, altitude, epsilon = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_altitude_rejects_non_positive_pressure() {
        for p in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = calculate_isa_altitude(pascals!(p)).unwrap_err();
            assert!(err.is_domain_error());
        }
    }

    #[test]
    fn test_calculate_isa_temperature() -> Result<()> {
        let standard = kelvin!(0);
        assert_eq!(
            calculate_isa_temperature(meters!(0), standard)?,
            *SEA_LEVEL_TEMPERATURE
        );
        assert_eq!(
            calculate_isa_temperature(meters!(500), standard)?.f64(),
            SEA_LEVEL_TEMPERATURE.f64() - 3.25
        );
        assert_eq!(
            calculate_isa_temperature(meters!(2_000), standard)?.f64(),
            SEA_LEVEL_TEMPERATURE.f64() - 13.0
        );
        assert_relative_eq!(
            calculate_isa_temperature(*TROPOPAUSE_ALTITUDE, standard)?,
            *TROPOPAUSE_TEMPERATURE,
            max_relative = 1e-12
        );
        assert_eq!(
            calculate_isa_temperature(meters!(12_000), standard)?,
            *TROPOPAUSE_TEMPERATURE
        );
        Ok(())
    }

    #[test]
    fn test_temperature_offset_applies_in_both_layers() -> Result<()> {
        let hot = kelvin!(10);
        assert_relative_eq!(
            calculate_isa_temperature(meters!(2_000), hot)?,
            kelvin!(285.15),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            calculate_isa_temperature(meters!(12_000), hot)?,
            kelvin!(226.65),
            max_relative = 1e-12
        );
        assert!(calculate_isa_temperature(meters!(12_000), kelvin!(-216.65)).is_err());
        Ok(())
    }

    #[test]
    fn test_calculate_density() -> Result<()> {
        assert_relative_eq!(
            calculate_density(*SEA_LEVEL_PRESSURE, *SEA_LEVEL_TEMPERATURE)?,
            *physical_constants::SEA_LEVEL_DENSITY,
            max_relative = 2.0 * TOLERANCE
        );
        assert_relative_eq!(
            calculate_density(pascals!(22_632.040_095_01), *TROPOPAUSE_TEMPERATURE)?,
            kilograms_per_meter3!(0.363_917_65),
            max_relative = TOLERANCE
        );
        assert!(calculate_density(pascals!(0), *TROPOPAUSE_TEMPERATURE).is_err());
        assert!(calculate_density(*SEA_LEVEL_PRESSURE, kelvin!(-1)).is_err());
        assert!(calculate_density(pascals!(1e-320), kelvin!(1e10)).is_err());
        Ok(())
    }

    #[test]
    fn test_at_altitude() -> Result<()> {
        let state = InternationalStandardAtmosphere::at_altitude(meters!(0), kelvin!(0))?;
        assert_eq!(state.pressure, *SEA_LEVEL_PRESSURE);
        assert_eq!(state.temperature, *SEA_LEVEL_TEMPERATURE);
        assert_relative_eq!(
            state.speed_of_sound,
            *physical_constants::SEA_LEVEL_SPEED_OF_SOUND,
            max_relative = TOLERANCE
        );

        let state = InternationalStandardAtmosphere::at_altitude(meters!(15_000), kelvin!(0))?;
        assert_eq!(state.temperature, *TROPOPAUSE_TEMPERATURE);
        assert!(state.density < *physical_constants::SEA_LEVEL_DENSITY);
        Ok(())
    }
}
