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
use absolute_unit::{
    kelvin, meters, meters_per_second, pascals, Length, Meters, Seconds, Velocity,
};
use anyhow::{ensure, Result};
use isa::{
    calculate_calibrated_air_speed, calculate_crossover_altitude,
    calculate_crossover_pressure_ratio, calculate_isa_altitude, calculate_isa_pressure,
    calculate_isa_temperature, calculate_true_air_speed, mach_true_air_speed,
    InternationalStandardAtmosphere, SEA_LEVEL_PRESSURE,
};
use log::debug;
use structopt::StructOpt;

/// Query the ICAO International Standard Atmosphere
#[derive(Debug, StructOpt)]
#[structopt(
    name = "standard-atmosphere",
    about = "Atmospheric state and airspeed conversions in the ISA."
)]
enum Opt {
    /// Print pressure, temperature, density and speed of sound by altitude.
    Table {
        /// Lowest altitude in meters.
        #[structopt(long, default_value = "0", allow_hyphen_values = true)]
        from: f64,

        /// Highest altitude in meters.
        #[structopt(long, default_value = "20000", allow_hyphen_values = true)]
        to: f64,

        /// Altitude increment in meters.
        #[structopt(long, default_value = "1000")]
        step: f64,

        /// Offset from the standard temperature, in kelvin.
        #[structopt(long, default_value = "0", allow_hyphen_values = true)]
        delta_t: f64,
    },

    /// Find the pressure altitude of a static pressure.
    Altitude {
        /// Static pressure in pascals.
        #[structopt(long)]
        pressure: f64,
    },

    /// Convert calibrated air speed to true air speed.
    Tas {
        /// Calibrated air speed in m/s.
        #[structopt(long)]
        cas: f64,

        /// Pressure altitude in meters.
        #[structopt(long, allow_hyphen_values = true)]
        altitude: f64,

        #[structopt(long, default_value = "0", allow_hyphen_values = true)]
        delta_t: f64,
    },

    /// Convert true air speed to calibrated air speed.
    Cas {
        /// True air speed in m/s.
        #[structopt(long)]
        tas: f64,

        /// Pressure altitude in meters.
        #[structopt(long, allow_hyphen_values = true)]
        altitude: f64,

        #[structopt(long, default_value = "0", allow_hyphen_values = true)]
        delta_t: f64,
    },

    /// Convert a Mach number to true air speed.
    Mach {
        #[structopt(long)]
        mach: f64,

        /// Pressure altitude in meters.
        #[structopt(long, allow_hyphen_values = true)]
        altitude: f64,

        #[structopt(long, default_value = "0", allow_hyphen_values = true)]
        delta_t: f64,
    },

    /// Find the altitude at which a CAS and a Mach number give the same TAS.
    Crossover {
        /// Calibrated air speed in m/s.
        #[structopt(long)]
        cas: f64,

        #[structopt(long)]
        mach: f64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    debug!("options: {:?}", opt);

    match opt {
        Opt::Table {
            from,
            to,
            step,
            delta_t,
        } => dump_table(from, to, step, delta_t)?,
        Opt::Altitude { pressure } => {
            println!("{}", calculate_isa_altitude(pascals!(pressure))?);
        }
        Opt::Tas {
            cas,
            altitude,
            delta_t,
        } => {
            let pressure = calculate_isa_pressure(meters!(altitude))?;
            let temperature = calculate_isa_temperature(meters!(altitude), kelvin!(delta_t))?;
            let tas = calculate_true_air_speed(meters_per_second!(cas), pressure, temperature)?;
            println!("{}", tas);
        }
        Opt::Cas {
            tas,
            altitude,
            delta_t,
        } => {
            let pressure = calculate_isa_pressure(meters!(altitude))?;
            let temperature = calculate_isa_temperature(meters!(altitude), kelvin!(delta_t))?;
            let cas =
                calculate_calibrated_air_speed(meters_per_second!(tas), pressure, temperature)?;
            println!("{}", cas);
        }
        Opt::Mach {
            mach,
            altitude,
            delta_t,
        } => {
            let temperature = calculate_isa_temperature(meters!(altitude), kelvin!(delta_t))?;
            println!("{}", mach_true_air_speed(mach, temperature)?);
        }
        Opt::Crossover { cas, mach } => {
            let cas = meters_per_second!(cas);
            let altitude = calculate_crossover_altitude(cas, mach)?;
            let temperature = calculate_isa_temperature(altitude, kelvin!(0))?;
            println!("altitude: {}", altitude);
            println!("tas:      {}", mach_true_air_speed(mach, temperature)?);
            match closed_form_crossover(cas, mach) {
                Ok(estimate) => debug!("closed form crossover estimate: {}", estimate),
                Err(e) => debug!("no closed form crossover estimate: {}", e),
            }
        }
    }

    Ok(())
}

// Troposphere-only estimate, logged as a cross-check of the bisection result.
fn closed_form_crossover(
    cas: Velocity<Meters, Seconds>,
    mach: f64,
) -> isa::Result<Length<Meters>> {
    let ratio = calculate_crossover_pressure_ratio(cas, mach)?;
    calculate_isa_altitude(*SEA_LEVEL_PRESSURE * ratio)
}

fn dump_table(from: f64, to: f64, step: f64, delta_t: f64) -> Result<()> {
    ensure!(step.is_finite() && step > 0.0, "step must be positive: {step}");
    ensure!(from <= to, "empty altitude range: {from} to {to}");

    println!(
        "{:>12} {:>14} {:>10} {:>16} {:>14}",
        "altitude", "pressure", "temp", "density", "sound"
    );
    let mut row = 0;
    while from + row as f64 * step <= to {
        let altitude = meters!(from + row as f64 * step);
        let state = InternationalStandardAtmosphere::at_altitude(altitude, kelvin!(delta_t))?;
        println!(
            "{:>12} {:>14} {:>10} {:>16} {:>14}",
            format!("{}", state.altitude),
            format!("{:0.2}", state.pressure),
            format!("{:0.2}", state.temperature),
            format!("{}", state.density),
            format!("{:0.3}", state.speed_of_sound),
        );
        row += 1;
    }
    Ok(())
}
