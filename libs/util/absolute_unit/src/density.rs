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
    supports_absdiffeq, supports_quantity_ops, supports_value_type_conversion, LengthUnit,
    MassUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData};

// mass / length^3
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Density<UnitMass: MassUnit, UnitLength: LengthUnit> {
    v: OrderedFloat<f64>,
    phantom: PhantomData<(UnitMass, UnitLength)>,
}
supports_quantity_ops!(Density<M, L>, M: MassUnit, L: LengthUnit);
supports_absdiffeq!(Density<M, L>, M: MassUnit, L: LengthUnit);
supports_value_type_conversion!(Density<M, L>, M: MassUnit, L: LengthUnit);

impl<M, L> fmt::Display for Density<M, L>
where
    M: MassUnit,
    L: LengthUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0.6}{}/{}^3", self.v.0, M::UNIT_SUFFIX, L::UNIT_SUFFIX)
    }
}

#[cfg(test)]
mod test {
    use crate::kilograms_per_meter3;
    use approx::assert_relative_eq;

    #[test]
    fn test_density() {
        let rho = kilograms_per_meter3!(1.225);
        assert_eq!(format!("{}", rho), "1.225000kg/m^3");
        assert_relative_eq!(rho, kilograms_per_meter3!(1.225_000_01), max_relative = 1e-6);
        assert!(kilograms_per_meter3!(0.363_917_65) < rho);
        assert!(!kilograms_per_meter3!(0).is_positive());
    }
}
