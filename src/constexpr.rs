//! The same mechanism under the "constexpr parameter" naming.

pub use crate::ConstValue as ConstexprParameter;
pub use crate::IsConstValue as IsConstexpr;

/// `true` iff `T` is a constexpr parameter, see [`crate::is_const_value`].
#[inline(always)]
pub const fn is_constexpr<T: ?Sized> () -> bool {
    return crate::is_const_value::<T>()
}

/// Turns a value into a constexpr parameter instance, see [`crate::const_v!`].
#[macro_export]
macro_rules! to_constexpr {
    ($($value:tt)+) => {
        $crate::const_v!($($value)+)
    };
}

/// See [`crate::is_const_value!`].
#[macro_export]
macro_rules! is_constexpr {
    ($t:ty) => {
        $crate::is_const_value!($t)
    };
}
