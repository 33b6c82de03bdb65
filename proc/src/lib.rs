mod utils;
mod lift;
mod derive;

use syn::{parse_macro_input, DeriveInput};
use lift::LiftInput;

/// Expands to the lifted constant type of a value.
///
/// The lifter is picked from the value: integer literals by their suffix (`i32` when
/// unsuffixed), `true`/`false`, char and byte literals. Anything else names its type
/// first, as in `const_t!(Point = ORIGIN)`, which resolves to `ConstPoint`.
///
/// Built-in lifters are looked up in `::const_value`. A crate that re-exports it
/// names the path first: `const_t!(crate = ::my_crate::const_value; 42u8)`.
#[proc_macro]
pub fn const_t (item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as LiftInput);
    return input.to_type().into()
}

/// Expands to a zero-sized instance of the lifted constant type of a value.
/// Accepts the same input as [`const_t!`].
#[proc_macro]
pub fn const_v (item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as LiftInput);
    return input.to_value().into()
}

/// Generates `Const<Name>`, the lifter for values of a user-defined type.
///
/// The type must also derive `PartialEq`, `Eq` and `core::marker::ConstParamTy`, and
/// the deriving crate needs `#![feature(adt_const_params)]`.
#[proc_macro_derive(ConstParam, attributes(const_param))]
pub fn derive_const_param (item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    return derive::expand(&input).into()
}
