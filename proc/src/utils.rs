use proc_macro2::Ident;
use quote::format_ident;

/// Const parameter types that have a lifter in `const_value` itself
pub const PRIMITIVES: &[&str] = &[
    "bool", "char",
    "u8", "u16", "u32", "u64", "u128", "usize",
    "i8", "i16", "i32", "i64", "i128", "isize"
];

pub fn is_primitive (s: &str) -> bool {
    return PRIMITIVES.contains(&s)
}

pub fn to_pascal_case (s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut is_upper = true;

    for c in s.chars() {
        if c == '_' {
            is_upper = true;
            continue;
        }

        if is_upper {
            result.extend(c.to_uppercase());
            is_upper = false;
            continue;
        }

        result.push(c);
    }

    return result;
}

/// Name of the lifter generated for a value type, `u8` -> `ConstU8`, `Point` -> `ConstPoint`
pub fn lifter_ident (ty: &Ident) -> Ident {
    let name = ty.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name);
    return format_ident!("Const{}", to_pascal_case(name), span = ty.span())
}
