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

pub(crate) mod acceleration;
pub(crate) mod density;
pub(crate) mod generic;
pub(crate) mod length;
pub(crate) mod pressure;
pub(crate) mod temperature;
pub(crate) mod unit;
pub(crate) mod velocity;

pub use crate::{
    acceleration::Acceleration,
    density::Density,
    length::Length,
    pressure::Pressure,
    temperature::Temperature,
    unit::{
        kelvin::Kelvin, kilograms::Kilograms, meters::Meters, pascals::Pascals, scalar::Scalar,
        seconds::Seconds, LengthUnit, MassUnit, PressureUnit, TemperatureUnit, TimeUnit, Unit,
    },
    velocity::Velocity,
};

pub use approx;
pub use ordered_float;
