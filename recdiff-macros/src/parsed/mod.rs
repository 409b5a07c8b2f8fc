use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Result, spanned::Spanned};

mod field;
mod record;

pub(crate) use field::ParsedField;
pub(crate) use record::ParsedRecord;

/// Converts a PascalCase identifier to snake_case
fn to_snake_case(name: &str) -> String {
    let mut result = String::new();
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Converts a snake_case identifier to PascalCase, using the same casing rule as
/// `recdiff::naming::to_property_name`.
fn to_pascal_case(name: &str) -> String {
    let mut result = String::new();
    let mut upper_next = true;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}

fn parse_non_empty(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<String> {
    let value: LitStr = meta.value()?.parse()?;
    let raw = value.value();
    if raw.trim().is_empty() {
        return Err(Error::new(value.span(), format!("`{key}` must not be empty")));
    }
    Ok(raw)
}
