//! Case conversions between the field-name representations.

/// Converts a snake_case column name to the PascalCase property form.
///
/// `first_name` becomes `FirstName`, `isbn` becomes `Isbn`. Runs of underscores collapse.
pub fn to_property_name(column: &str) -> String {
    let mut result = String::with_capacity(column.len());
    let mut upper_next = true;
    for ch in column.chars() {
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

/// Lower-cases the first character of a property name: `FirstName` becomes `firstName`.
pub fn to_studly_name(property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases a column name: `first_name` becomes `FIRST_NAME`.
pub fn to_raw_column_name(column: &str) -> String {
    column.to_uppercase()
}
