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
use std::fmt::Debug;

pub trait Unit {
    const UNIT_SUFFIX: &'static str;
}

// One marker trait per dimension. Only SI units implement them, so quantities of
// the same dimension never need converting.
pub trait LengthUnit: Unit + Copy + Debug + Ord + 'static {}
pub trait MassUnit: Unit + Copy + Debug + Ord + 'static {}
pub trait TimeUnit: Unit + Copy + Debug + Ord + 'static {}
pub trait TemperatureUnit: Unit + Copy + Debug + Ord + 'static {}
pub trait PressureUnit: Unit + Copy + Debug + Ord + 'static {}

// Unitless
pub(crate) mod scalar;

// Distance
pub(crate) mod meters;

// Temperature
pub(crate) mod kelvin;

// Mass
pub(crate) mod kilograms;

// Time
pub(crate) mod seconds;

// Pressure
pub(crate) mod pascals;
