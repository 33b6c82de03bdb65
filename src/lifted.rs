use crate::__private::Sealed;
use crate::marker::Lifted;

/// A value lifted into its own type.
///
/// Implemented by the built-in lifters ([`ConstU8`], [`ConstBool`], ...) and by the
/// lifters generated with [`ConstParam`](crate::ConstParam). The implementing type
/// is zero-sized; its identity is fully determined by `(Type, VALUE)`.
pub trait ConstValue: Sealed + Copy + Default + Send + Sync + 'static {
    /// Type of the lifted value
    type Type: 'static;
    /// The lifted value
    const VALUE: Self::Type;

    #[doc(hidden)]
    type Marker;

    /// Copies the lifted value out of a zero-sized instance
    #[inline(always)]
    fn value (self) -> Self::Type {
        return Self::VALUE
    }
}

/// Reads the lifted value back from an instance, in `const` contexts too.
#[inline(always)]
pub const fn value_of<C: ConstValue> (_: C) -> C::Type {
    return C::VALUE
}

macro_rules! lift {
    ($($ty:ty as $name:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Lifts a `", stringify!($ty), "` value into its own type.")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            pub struct $name<const V: $ty>;

            impl<const V: $ty> $name<V> {
                pub const VALUE: $ty = V;

                #[inline(always)]
                pub const fn get (self) -> $ty {
                    return V
                }
            }

            impl<const V: $ty> Sealed for $name<V> {}

            impl<const V: $ty> ConstValue for $name<V> {
                type Type = $ty;
                const VALUE: $ty = V;
                type Marker = Lifted<Self>;
            }
        )+
    };
}

lift! {
    bool as ConstBool,
    char as ConstChar,
    u8 as ConstU8,
    u16 as ConstU16,
    u32 as ConstU32,
    u64 as ConstU64,
    u128 as ConstU128,
    usize as ConstUsize,
    i8 as ConstI8,
    i16 as ConstI16,
    i32 as ConstI32,
    i64 as ConstI64,
    i128 as ConstI128,
    isize as ConstIsize,
}
