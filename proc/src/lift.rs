use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse::{Parse, ParseStream}, parse_quote, Expr, ExprLit, ExprUnary, Lit, Path, PathArguments, Token, Type, TypePath, UnOp};
use crate::utils::{is_primitive, lifter_ident};

/// Input of `const_t!` / `const_v!`: either `value` or `Type = value`,
/// optionally preceded by `crate = path;` for crates that re-export `const_value`
pub struct LiftInput {
    pub lifter: Path,
    pub value: Expr
}

impl LiftInput {
    /// The lifted constant type, `Lifter<{ value }>`
    pub fn to_type (&self) -> TokenStream {
        let Self { lifter, value } = self;
        return quote! { #lifter<{ #value }> }
    }

    /// A zero-sized instance of the lifted constant, `Lifter::<{ value }>`
    pub fn to_value (&self) -> TokenStream {
        let Self { lifter, value } = self;
        return quote! { #lifter::<{ #value }> }
    }
}

impl Parse for LiftInput {
    fn parse (input: ParseStream) -> syn::Result<Self> {
        let krate = if input.peek(Token![crate]) && input.peek2(Token![=]) {
            input.parse::<Token![crate]>()?;
            input.parse::<Token![=]>()?;
            let krate = input.parse::<Path>()?;
            input.parse::<Token![;]>()?;
            krate
        } else {
            parse_quote! { ::const_value }
        };

        if has_type_prefix(input) {
            let ty = input.parse::<Type>()?;
            input.parse::<Token![=]>()?;
            let value = input.parse::<Expr>()?;
            return Ok(Self { lifter: lifter_for_type(&ty, &krate)?, value })
        }

        let value = input.parse::<Expr>()?;
        return Ok(Self { lifter: lifter_for_value(&value, &krate)?, value })
    }
}

fn has_type_prefix (input: ParseStream) -> bool {
    let fork = input.fork();
    return fork.parse::<Type>().is_ok() && fork.peek(Token![=]) && !fork.peek(Token![==])
}

fn primitive_lifter (ty: &str, span: proc_macro2::Span, krate: &Path) -> Path {
    let ident = lifter_ident(&proc_macro2::Ident::new(ty, span));
    return parse_quote! { #krate::#ident }
}

/// Lifter of an explicitly named value type
pub fn lifter_for_type (ty: &Type, krate: &Path) -> syn::Result<Path> {
    match ty {
        Type::Paren(inner) => lifter_for_type(&inner.elem, krate),
        Type::Group(inner) => lifter_for_type(&inner.elem, krate),
        Type::Path(TypePath { qself: None, path }) => {
            let last = match path.segments.last() {
                Some(last) => last,
                None => return Err(syn::Error::new_spanned(path, "expected a type name"))
            };

            if !matches!(last.arguments, PathArguments::None) {
                return Err(syn::Error::new_spanned(&last.arguments, "values of generic types cannot be lifted"))
            }

            let name = last.ident.to_string();
            if path.leading_colon.is_none() && path.segments.len() == 1 && is_primitive(&name) {
                return Ok(primitive_lifter(&name, last.ident.span(), krate))
            }

            let mut lifter = path.clone();
            if let Some(last) = lifter.segments.last_mut() {
                last.ident = lifter_ident(&last.ident);
            }
            return Ok(lifter)
        },
        other => Err(syn::Error::new_spanned(
            other,
            format!("only named types can be lifted, found `{}`", other.to_token_stream())
        ))
    }
}

/// Lifter of a value whose type is readable from its tokens
pub fn lifter_for_value (value: &Expr, krate: &Path) -> syn::Result<Path> {
    match value {
        Expr::Paren(inner) => lifter_for_value(&inner.expr, krate),
        Expr::Group(inner) => lifter_for_value(&inner.expr, krate),
        Expr::Lit(ExprLit { lit, .. }) => lifter_for_lit(lit, krate),
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr, .. }) => match expr.as_ref() {
            Expr::Lit(ExprLit { lit: lit @ Lit::Int(_), .. }) => lifter_for_lit(lit, krate),
            Expr::Lit(ExprLit { lit: lit @ Lit::Float(_), .. }) => lifter_for_lit(lit, krate),
            other => Err(untyped(other))
        },
        other => Err(untyped(other))
    }
}

fn untyped (value: &Expr) -> syn::Error {
    return syn::Error::new_spanned(
        value,
        format!("cannot tell the type of `{}`, write it as `Type = value`", value.to_token_stream())
    )
}

fn lifter_for_lit (lit: &Lit, krate: &Path) -> syn::Result<Path> {
    let ty = match lit {
        Lit::Bool(_) => "bool",
        Lit::Char(_) => "char",
        Lit::Byte(_) => "u8",
        Lit::Int(int) => match int.suffix() {
            "" => "i32",
            suffix if is_primitive(suffix) => suffix,
            suffix => return Err(syn::Error::new_spanned(int, format!("unsupported integer suffix `{suffix}`")))
        },
        Lit::Float(_) => return Err(syn::Error::new_spanned(
            lit,
            "floating-point values cannot be lifted, `f32` and `f64` are not const parameter types"
        )),
        Lit::Str(_) | Lit::ByteStr(_) | Lit::CStr(_) => return Err(syn::Error::new_spanned(
            lit,
            "string values cannot be lifted, lift a `char` or a `#[derive(ConstParam)]` type instead"
        )),
        other => return Err(syn::Error::new_spanned(other, "unsupported literal"))
    };

    return Ok(primitive_lifter(ty, lit.span(), krate))
}
