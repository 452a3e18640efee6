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

// Every quantity is a struct with an `OrderedFloat<f64>` field `v`, holding the value
// in its SI unit, and a `phantom` field carrying the unit markers. The macros below
// rely on that layout. Each takes the quantity type followed by its unit parameters,
// e.g. `supports_quantity_ops!(Velocity<L, T>, L: LengthUnit, T: TimeUnit)`.

#[macro_export]
macro_rules! supports_value_type_conversion {
    ($TypeName:ty, $($Param:ident: $Bound:path),+) => {
        $crate::impl_value_type_conversions!(f64, $TypeName, $($Param: $Bound),+);
        $crate::impl_value_type_conversions!(i32, $TypeName, $($Param: $Bound),+);

        impl<$($Param),+> $TypeName
        where
            $($Param: $Bound),+
        {
            pub fn f64(self) -> f64 {
                self.v.0
            }
        }
    };
}

// Only by reference: the unit constructor macros all expand to `From::from(&x)`.
#[macro_export]
macro_rules! impl_value_type_conversions {
    ($Num:ty, $TypeName:ty, $($Param:ident: $Bound:path),+) => {
        impl<$($Param),+> From<&$Num> for $TypeName
        where
            $($Param: $Bound),+
        {
            fn from(v: &$Num) -> Self {
                Self {
                    v: $crate::ordered_float::OrderedFloat(f64::from(*v)),
                    phantom: std::marker::PhantomData,
                }
            }
        }
    };
}

#[macro_export]
macro_rules! supports_absdiffeq {
    ($TypeName:ty, $($Param:ident: $Bound:path),+) => {
        impl<$($Param),+> $crate::approx::AbsDiffEq for $TypeName
        where
            $($Param: $Bound),+
        {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as $crate::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $crate::approx::AbsDiffEq::abs_diff_eq(&self.v.0, &other.v.0, epsilon)
            }
        }

        impl<$($Param),+> $crate::approx::RelativeEq for $TypeName
        where
            $($Param: $Bound),+
        {
            fn default_max_relative() -> Self::Epsilon {
                <f64 as $crate::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $crate::approx::RelativeEq::relative_eq(&self.v.0, &other.v.0, epsilon, max_relative)
            }
        }
    };
}

/// Range checks used to validate physical inputs and results.
#[macro_export]
macro_rules! supports_quantity_ops {
    ($TypeName:ty, $($Param:ident: $Bound:path),+) => {
        impl<$($Param),+> $TypeName
        where
            $($Param: $Bound),+
        {
            pub fn is_finite(&self) -> bool {
                self.v.0.is_finite()
            }

            /// Finite and strictly greater than zero.
            pub fn is_positive(&self) -> bool {
                self.is_finite() && self.v.0 > 0.
            }
        }
    };
}

#[macro_export]
macro_rules! supports_scalar_ops {
    ($TypeName:ty, $($Param:ident: $Bound:path),+) => {
        impl<$($Param),+> std::ops::Mul<$crate::Scalar> for $TypeName
        where
            $($Param: $Bound),+
        {
            type Output = $TypeName;

            fn mul(self, s: $crate::Scalar) -> Self {
                Self {
                    v: self.v * s.f64(),
                    phantom: std::marker::PhantomData,
                }
            }
        }
    };
}

#[macro_export]
macro_rules! supports_shift_ops {
    ($TypeName:ty, $($Param:ident: $Bound:path),+) => {
        impl<$($Param),+> std::ops::Add<$TypeName> for $TypeName
        where
            $($Param: $Bound),+
        {
            type Output = $TypeName;

            fn add(self, other: $TypeName) -> Self {
                Self {
                    v: self.v + other.v,
                    phantom: std::marker::PhantomData,
                }
            }
        }

        impl<$($Param),+> std::ops::Sub<$TypeName> for $TypeName
        where
            $($Param: $Bound),+
        {
            type Output = $TypeName;

            fn sub(self, other: $TypeName) -> Self {
                Self {
                    v: self.v - other.v,
                    phantom: std::marker::PhantomData,
                }
            }
        }
    };
}
