//! Detection of lifted constants.
//!
//! A type is a lifted constant when it implements [`ConstValue`] and its marker
//! resolves back to itself. The answer is available as [`is_const_value`],
//! [`IsConstValue::IS_CONST_VALUE`], the [`is_const_value!`](crate::is_const_value!)
//! expression and the [`assert_const_value!`](crate::assert_const_value!) bounds.
//! All of them read the same constant, in concrete and in generic code.

use crate::ConstValue;
use crate::marker::Tag;

mod imp {
    use super::*;

    /// Specialized answer. Private, so only the two impls below exist.
    pub trait Detect {
        const LIFTED: bool;
    }

    impl<T: ?Sized> Detect for T {
        default const LIFTED: bool = false;
    }

    impl<T: ConstValue> Detect for T where T::Marker: Tag<Kind = T> {
        const LIFTED: bool = true;
    }
}

/// Answers whether `Self` is a lifted constant.
///
/// Implemented once for every type, downstream crates cannot override it:
///
/// ```compile_fail
/// #![feature(specialization)]
/// struct Plain;
///
/// impl const_value::IsConstValue for Plain {
///     const IS_CONST_VALUE: bool = true;
/// }
/// ```
pub trait IsConstValue {
    const IS_CONST_VALUE: bool;
}

impl<T: ?Sized> IsConstValue for T {
    const IS_CONST_VALUE: bool = <T as imp::Detect>::LIFTED;
}

/// `true` iff `T` is a lifted constant.
#[inline(always)]
pub const fn is_const_value<T: ?Sized> () -> bool {
    return <T as IsConstValue>::IS_CONST_VALUE
}

/// `true` iff the type of `value` is a lifted constant.
#[inline(always)]
pub const fn is_const_value_of<T: ?Sized> (_: &T) -> bool {
    return <T as IsConstValue>::IS_CONST_VALUE
}

/// `is_const_value::<T>()` as an expression over a type.
///
/// ```
/// assert!(const_value::is_const_value!(const_value::ConstU8<3>));
/// assert!(!const_value::is_const_value!(u8));
/// ```
#[macro_export]
macro_rules! is_const_value {
    ($t:ty) => {
        <$t as $crate::IsConstValue>::IS_CONST_VALUE
    };
}

/// Fails compilation unless `T` is a lifted constant.
#[macro_export]
macro_rules! assert_const_value {
    ($($t:ty),+ $(,)?) => {
        $(
            const _: () = {
                #[allow(dead_code)]
                fn assert_const_value () where $crate::marker::Condition<{ $crate::is_const_value::<$t>() }>: $crate::marker::IsTrue {}
            };
        )+
    };
}

/// Fails compilation if `T` is a lifted constant.
#[macro_export]
macro_rules! assert_not_const_value {
    ($($t:ty),+ $(,)?) => {
        $(
            const _: () = {
                #[allow(dead_code)]
                fn assert_not_const_value () where $crate::marker::Condition<{ $crate::is_const_value::<$t>() }>: $crate::marker::IsFalse {}
            };
        )+
    };
}
