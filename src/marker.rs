use core::marker::PhantomData;

mod sealed { pub trait Sealed {} }
use sealed::Sealed;

/// Type-level boolean, used to turn a `const` answer into a trait bound.
pub struct Condition<const VALUE: bool>;
pub trait IsTrue: Sealed {}
pub trait IsFalse: Sealed {}

impl IsTrue for Condition<true> {}
impl IsFalse for Condition<false> {}
impl<const VALUE: bool> Sealed for Condition<VALUE> {}

/// Marker carried by every lifted constant as its `Marker` type.
/// Not part of the public contract, go through [`crate::is_const_value`] instead.
#[doc(hidden)]
pub struct Lifted<C: ?Sized> (PhantomData<C>);

/// Nested resolution of a marker. For [`Lifted<C>`], `Kind` resolves back to `C`.
#[doc(hidden)]
pub trait Tag {
    type Kind: ?Sized;
}

impl<C: ?Sized> Tag for Lifted<C> {
    type Kind = C;
}
