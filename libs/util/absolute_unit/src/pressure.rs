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
    scalar, supports_absdiffeq, supports_quantity_ops, supports_scalar_ops,
    supports_value_type_conversion, PressureUnit, Scalar,
};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData, ops::Div};

// Force / Area
// Mass / (Time * Time * Length)
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Pressure<UnitPressure: PressureUnit> {
    v: OrderedFloat<f64>,
    phantom: PhantomData<UnitPressure>,
}
supports_quantity_ops!(Pressure<P>, P: PressureUnit);
supports_scalar_ops!(Pressure<P>, P: PressureUnit);
supports_absdiffeq!(Pressure<P>, P: PressureUnit);
supports_value_type_conversion!(Pressure<P>, P: PressureUnit);

impl<P> fmt::Display for Pressure<P>
where
    P: PressureUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", P::UNIT_SUFFIX)
    }
}

/// Pressure ratios (delta) are unitless.
impl<P> Div<Pressure<P>> for Pressure<P>
where
    P: PressureUnit,
{
    type Output = Scalar;

    fn div(self, other: Pressure<P>) -> Self::Output {
        scalar!(self.v.0 / other.v.0)
    }
}

#[cfg(test)]
mod test {
    use crate::{pascals, scalar};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_pressure() {
        let p = pascals!(101_325);
        assert_abs_diff_eq!(p, pascals!(101_325.0));
        assert_eq!(format!("{}", p), "101325Pa");
        assert_eq!(format!("{:0.2}", pascals!(22_632.040_1)), "22632.04Pa");
    }

    #[test]
    fn test_pressure_ratio() {
        let delta = pascals!(22_632.04) / pascals!(101_325);
        assert_relative_eq!(delta.f64(), 0.223_360_868, max_relative = 1e-8);
        assert_relative_eq!(
            pascals!(101_325) * delta,
            pascals!(22_632.04),
            max_relative = 1e-12
        );
        assert_relative_eq!(pascals!(1_000) * scalar!(0.5), pascals!(500));
    }

    #[test]
    fn test_pressure_domain() {
        assert!(pascals!(1e-320).is_positive());
        assert!(!pascals!(0).is_positive());
        assert!(!pascals!(f64::INFINITY).is_positive());
        assert!(!pascals!(f64::NAN).is_finite());
    }
}
