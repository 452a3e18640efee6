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
    supports_value_type_conversion, LengthUnit, TimeUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData, ops::Div};

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Velocity<UnitLength: LengthUnit, UnitTime: TimeUnit> {
    v: OrderedFloat<f64>,
    phantom: PhantomData<(UnitLength, UnitTime)>,
}
supports_quantity_ops!(Velocity<L, T>, L: LengthUnit, T: TimeUnit);
supports_shift_ops!(Velocity<L, T>, L: LengthUnit, T: TimeUnit);
supports_scalar_ops!(Velocity<L, T>, L: LengthUnit, T: TimeUnit);
supports_absdiffeq!(Velocity<L, T>, L: LengthUnit, T: TimeUnit);
supports_value_type_conversion!(Velocity<L, T>, L: LengthUnit, T: TimeUnit);

impl<L, T> fmt::Display for Velocity<L, T>
where
    L: LengthUnit,
    T: TimeUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}/{}", L::UNIT_SUFFIX, T::UNIT_SUFFIX)
    }
}

/// A speed over a reference speed, e.g. a Mach number.
impl<L, T> Div<Velocity<L, T>> for Velocity<L, T>
where
    L: LengthUnit,
    T: TimeUnit,
{
    type Output = f64;

    fn div(self, other: Velocity<L, T>) -> Self::Output {
        self.v.0 / other.v.0
    }
}

#[cfg(test)]
mod test {
    use crate::{meters_per_second, scalar};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_velocity() {
        let m_p_s = meters_per_second!(100.);
        assert_eq!(format!("{}", m_p_s), "100m/s");
        assert_eq!(format!("{:0.3}", meters_per_second!(239.756_07)), "239.756m/s");
    }

    #[test]
    fn test_velocity_shift() {
        let m_p_s = meters_per_second!(100) + meters_per_second!(44.704);
        assert_abs_diff_eq!(m_p_s, meters_per_second!(144.704), epsilon = 0.001);
        assert_abs_diff_eq!(
            m_p_s - meters_per_second!(100),
            meters_per_second!(44.704),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_velocity_scalar() {
        assert_abs_diff_eq!(
            meters_per_second!(340.294) * scalar!(0.8),
            meters_per_second!(272.2352),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_velocity_cancel() {
        assert_abs_diff_eq!(2., meters_per_second!(6) / meters_per_second!(3))
    }
}
