//! Numeric types usable as edge capacities, flows and weights.
//!
//! Flow values are compared with a type-specific absolute tolerance. Integer
//! types are exact and have zero tolerance.

use std::{
    fmt,
    ops::{Add, Sub},
};

pub trait Capacity: PartialOrd + Add<Output = Self> + Sub<Output = Self> + Copy + fmt::Debug {
    fn zero() -> Self;

    /// A value that is greater or equal than any attainable capacity. Used as
    /// the starting point of minimum searches.
    fn inf() -> Self;

    /// The largest difference between two values that are still considered
    /// equal.
    fn tolerance() -> Self;

    /// Returns `true` if the value is a valid capacity, that is, it is not
    /// negative and not NaN.
    fn is_nonnegative(&self) -> bool {
        // NaN fails the comparison.
        *self >= Self::zero()
    }

    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    fn abs_diff_of(self, other: Self) -> Self {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }

    /// Equality up to [`tolerance`](Capacity::tolerance).
    fn approx_eq(self, other: Self) -> bool {
        self.abs_diff_of(other) <= Self::tolerance()
    }
}

macro_rules! impl_int_capacity {
    ($ty:ty) => {
        impl Capacity for $ty {
            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn tolerance() -> Self {
                0
            }
        }
    };
}

impl_int_capacity!(i8);
impl_int_capacity!(i16);
impl_int_capacity!(i32);
impl_int_capacity!(i64);
impl_int_capacity!(isize);
impl_int_capacity!(u8);
impl_int_capacity!(u16);
impl_int_capacity!(u32);
impl_int_capacity!(u64);
impl_int_capacity!(usize);

macro_rules! impl_float_capacity {
    ($ty:ty, $tolerance:expr) => {
        impl Capacity for $ty {
            fn zero() -> Self {
                0.0
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn tolerance() -> Self {
                $tolerance
            }
        }
    };
}

impl_float_capacity!(f32, 1e-4);
impl_float_capacity!(f64, 1e-10);
