//! Adapters that let built-in rules inspect field values.
//!
//! Built-in length and numeric rules only judge values that are present: a
//! missing value (`None`) passes them, and presence is left to `required`.

/// Whether a value counts as supplied for `required`.
pub trait Presence {
    /// True if the value is supplied.
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        true
    }
}

/// Numeric view of a value for `min` and `max`.
pub trait Numeric {
    /// The value as `f64`, or `None` when absent.
    fn as_f64(&self) -> Option<f64>;
}

/// Length of a value for `min_length` and `max_length`.
///
/// Text is measured in characters, numbers by the length of their decimal
/// rendering, and collections by their item count.
pub trait TextLength {
    /// The length, or `None` when absent.
    fn text_length(&self) -> Option<usize>;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Presence for $t {
                fn is_present(&self) -> bool {
                    true
                }
            }

            impl Numeric for $t {
                fn as_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }

            impl TextLength for $t {
                fn text_length(&self) -> Option<usize> {
                    Some(self.to_string().chars().count())
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Presence for bool {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T: Numeric> Numeric for Option<T> {
    fn as_f64(&self) -> Option<f64> {
        self.as_ref().and_then(Numeric::as_f64)
    }
}

impl TextLength for str {
    fn text_length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl TextLength for String {
    fn text_length(&self) -> Option<usize> {
        self.as_str().text_length()
    }
}

impl<T> TextLength for Vec<T> {
    fn text_length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: TextLength> TextLength for Option<T> {
    fn text_length(&self) -> Option<usize> {
        self.as_ref().and_then(TextLength::text_length)
    }
}
