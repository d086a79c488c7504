//!
//! Weight trait for generics of capacity, flow and edge weight
//!
//! integers and floats implement Weight.
//! signed ones also implement SignedWeight (needed for supply/demand vectors).
//!

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

///
/// generic edge weight / capacity / flow amount
///
pub trait Weight:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// unit value = 1, the implicit weight of an unweighted edge
    fn unit() -> Self;
    /// difference allowed to be regarded as a same value
    fn eps() -> Self;
    /// similary equal
    fn sim_eq(self, rhs: Self) -> bool;
    /// strictly larger than `eps()`, i.e. the residual arc is usable
    fn exceeds_eps(self) -> bool {
        self > Self::eps()
    }
}

///
/// Weight that can be negated, for supplies (negative demands)
///
pub trait SignedWeight: Weight + Neg<Output = Self> {
    /// strictly smaller than `-eps()`, i.e. a supply
    fn below_neg_eps(self) -> bool {
        -self > Self::eps()
    }
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }
                fn unit() -> Self {
                    1
                }
                fn eps() -> Self {
                    // integer type does not need to consider the floating error
                    0
                }
                fn sim_eq(self, rhs: Self) -> bool {
                    self == rhs
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }
                fn unit() -> Self {
                    1.0
                }
                fn eps() -> Self {
                    0.000000001
                }
                fn sim_eq(self, rhs: Self) -> bool {
                    (self - rhs).abs() <= Self::eps()
                }
            }
        )*
    };
}

impl_int_weight!(i32, i64, u32, u64, usize);
impl_float_weight!(f32, f64);

impl SignedWeight for i32 {}
impl SignedWeight for i64 {}
impl SignedWeight for f32 {}
impl SignedWeight for f64 {}

///
/// `min` for PartialOrd values (floats are not Ord)
///
pub fn partial_min<W: Weight>(a: W, b: W) -> W {
    if b < a {
        b
    } else {
        a
    }
}
