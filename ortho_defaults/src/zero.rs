//! Zero-value detection shared by the walker and override hooks.
//!
//! A field is only eligible for a declarative default while it still holds
//! the zero value of its type. Hooks implemented through
//! [`crate::SetDefaults`] should use [`can_update`] so they agree with the
//! walker about what "unset" means.

use std::collections::{BTreeMap, HashMap};

/// Reports whether a value still holds its type's zero value.
///
/// Zero means `0` for numbers, `false` for booleans, the empty string,
/// empty collections, `None`, and, for derived composites, every field
/// being zero. Floats follow bit equality, so `-0.0` counts as set.
pub trait IsZero {
    /// Returns `true` when the value is the zero value of its type.
    fn is_zero(&self) -> bool;
}

/// Returns `true` when `value` is still zero and may receive a default.
///
/// # Examples
///
/// ```rust
/// use ortho_defaults::can_update;
///
/// assert!(can_update(&0_u64));
/// assert!(!can_update(&String::from("set")));
/// assert!(can_update(&None::<u8>));
/// ```
#[must_use]
pub fn can_update<T: IsZero + ?Sized>(value: &T) -> bool {
    value.is_zero()
}

macro_rules! integer_zero {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsZero for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

integer_zero!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl IsZero for f32 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl IsZero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: IsZero + ?Sized> IsZero for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsZero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
