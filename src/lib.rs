#![no_std]
#![allow(incomplete_features)]
#![feature(specialization)]

//! Lifts compile-time values into types and detects such types.
//!
//! ```
//! use const_value::*;
//!
//! type Answer = const_t!(42u32);
//! assert_eq!(<Answer as ConstValue>::VALUE, 42);
//! assert!(is_const_value::<Answer>());
//! assert!(!is_const_value::<u32>());
//! ```

pub use const_value_proc::*;
pub use lifted::*;
pub use detect::{is_const_value, is_const_value_of, IsConstValue};

pub mod marker;
pub mod detect;
pub mod constexpr;
mod lifted;

#[doc(hidden)]
pub mod __private {
    /// Implemented only by the lifters of this crate and by `#[derive(ConstParam)]`.
    pub trait Sealed {}
}
