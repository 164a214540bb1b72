//! Zero-value detection.
//!
//! Fragment generation includes a field only when its value differs from the
//! zero value of its type. [`Zero`] is that test.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Types with a distinguished zero/default value.
pub trait Zero {
    /// Whether `self` is the zero value of its type.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_zero_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Zero for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_zero_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Bit-pattern comparison: `-0.0` and NaN are not zero.
impl Zero for f32 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl Zero for f64 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl Zero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Zero for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Zero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Zero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> Zero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Zero + ?Sized> Zero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: Zero + ?Sized> Zero for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl Zero for uuid::Uuid {
    fn is_zero(&self) -> bool {
        self.is_nil()
    }
}

impl Zero for serde_json::Value {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl Zero for NaiveDate {
    fn is_zero(&self) -> bool {
        *self == NaiveDate::default()
    }
}

impl Zero for NaiveDateTime {
    fn is_zero(&self) -> bool {
        *self == NaiveDateTime::default()
    }
}

impl Zero for DateTime<Utc> {
    fn is_zero(&self) -> bool {
        *self == DateTime::<Utc>::default()
    }
}
