use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, Generics, Ident, Path, Visibility};
use crate::utils::lifter_ident;

#[derive(FromDeriveInput)]
#[darling(attributes(const_param), supports(struct_any, enum_any))]
pub struct ParamInput {
    ident: Ident,
    vis: Visibility,
    generics: Generics,
    /// Path of the `const_value` crate, for crates that re-export it
    #[darling(rename = "crate")]
    krate: Option<Path>
}

impl ParamInput {
    fn validate (self) -> darling::Result<Self> {
        if !self.generics.params.is_empty() || self.generics.where_clause.is_some() {
            return Err(
                darling::Error::custom("generic types cannot be lifted, their values have no single const parameter type")
                    .with_span(&self.generics)
            )
        }
        return Ok(self)
    }

    fn emit (&self) -> TokenStream {
        let Self { ident, vis, krate, .. } = self;
        let krate = krate.clone().unwrap_or_else(|| parse_quote! { ::const_value });
        let name = lifter_ident(ident);
        let doc = format!("Lifts a [`{ident}`] value into its own type.");

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            #vis struct #name<const V: #ident>;

            impl<const V: #ident> #name<V> {
                pub const VALUE: #ident = V;

                #[inline(always)]
                pub const fn get (self) -> #ident {
                    return V
                }
            }

            #[automatically_derived]
            impl<const V: #ident> #krate::__private::Sealed for #name<V> {}

            #[automatically_derived]
            impl<const V: #ident> #krate::ConstValue for #name<V> {
                type Type = #ident;
                const VALUE: #ident = V;
                type Marker = #krate::marker::Lifted<Self>;
            }
        }
    }
}

pub fn expand (input: &DeriveInput) -> TokenStream {
    return match ParamInput::from_derive_input(input).and_then(ParamInput::validate) {
        Ok(param) => param.emit(),
        Err(e) => e.write_errors()
    }
}
