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
    supports_absdiffeq, supports_quantity_ops, supports_shift_ops,
    supports_value_type_conversion, TemperatureUnit,
};
use ordered_float::OrderedFloat;
use std::{fmt, marker::PhantomData};

/// An absolute temperature, or an offset from one (e.g. a non-standard day delta);
/// both share this type.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Temperature<UnitTemperature: TemperatureUnit> {
    v: OrderedFloat<f64>,
    phantom: PhantomData<UnitTemperature>,
}
supports_quantity_ops!(Temperature<T>, T: TemperatureUnit);
supports_shift_ops!(Temperature<T>, T: TemperatureUnit);
supports_absdiffeq!(Temperature<T>, T: TemperatureUnit);
supports_value_type_conversion!(Temperature<T>, T: TemperatureUnit);

impl<T> fmt::Display for Temperature<T>
where
    T: TemperatureUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v.0, f)?;
        write!(f, "{}", T::UNIT_SUFFIX)
    }
}

#[cfg(test)]
mod test {
    use crate::kelvin;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_temperature_offset() {
        let t = kelvin!(288.15) + kelvin!(-13);
        assert_abs_diff_eq!(t, kelvin!(275.15), epsilon = 1e-12);
        assert_relative_eq!(t - kelvin!(275.15), kelvin!(0), epsilon = 1e-12);
        assert_eq!(format!("{:0.2}", t), "275.15K");
    }

    #[test]
    fn test_temperature_domain() {
        assert!(kelvin!(216.65).is_positive());
        assert!(!kelvin!(0).is_positive());
        assert!(kelvin!(-10).is_finite());
        assert!(!kelvin!(f64::NAN).is_finite());
        assert!(kelvin!(216.65) < kelvin!(288.15));
    }
}
