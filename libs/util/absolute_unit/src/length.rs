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
    supports_absdiffeq, supports_quantity_ops, supports_scalar_ops, supports_shift_ops,
    supports_value_type_conversion, LengthUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData};

// Altitudes are signed: anything below mean sea level is negative.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Length<UnitLength: LengthUnit> {
    v: OrderedFloat<f64>,
    phantom: PhantomData<UnitLength>,
}
supports_quantity_ops!(Length<L>, L: LengthUnit);
supports_shift_ops!(Length<L>, L: LengthUnit);
supports_scalar_ops!(Length<L>, L: LengthUnit);
supports_absdiffeq!(Length<L>, L: LengthUnit);
supports_value_type_conversion!(Length<L>, L: LengthUnit);

impl<L> fmt::Display for Length<L>
where
    L: LengthUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0.4}{}", self.v.0, L::UNIT_SUFFIX)
    }
}
