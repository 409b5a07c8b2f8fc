use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod parsed;

use parsed::ParsedRecord;

/// Derives `recdiff::Record` for a struct with named fields.
///
/// The generated impl carries the schema's field-descriptor table and one accessor per
/// field, in declaration order.
///
/// ```text
/// #[derive(Record)]
/// #[record(schema = "person", table = "people")]
/// struct Person {
///     first_name: String,
///     #[record(column = "years", property = "Age")]
///     age: u32,
///     #[record(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Container keys: `schema` (defaults to the snake_case struct name) and `table`
/// (defaults to the schema). Field keys: `column` (defaults to the field name),
/// `property` (defaults to the PascalCase field name) and `skip`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedRecord::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
