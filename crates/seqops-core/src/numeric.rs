//! Compile-time numeric capability used by `sum` and `average`.

use std::ops::Add;

/// Additive identity plus addition, and a lossy widening for averages.
pub trait Numeric: Copy + Add<Output = Self> {
    fn zero() -> Self;

    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($zero:expr => $($t:ty),+) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);
