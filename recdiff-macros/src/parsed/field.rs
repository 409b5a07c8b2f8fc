#[allow(unused_imports)]
use super::*;

pub(crate) struct ParsedField {
    pub(crate) ident: Ident,
    pub(crate) column: String,
    pub(crate) property: String,
    pub(crate) skip: bool,
}

impl ParsedField {
    pub(crate) fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "Record requires named fields"))?;
        let name = unraw(&ident);

        let mut column = None;
        let mut property = None;
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("record") {
                Self::parse_field_attr(attr, &mut column, &mut property, &mut skip)?;
            }
        }

        Ok(Self {
            column: column.unwrap_or_else(|| name.clone()),
            property: property.unwrap_or_else(|| to_pascal_case(&name)),
            ident,
            skip,
        })
    }

    fn parse_field_attr(
        attr: &Attribute,
        column: &mut Option<String>,
        property: &mut Option<String>,
        skip: &mut bool,
    ) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("column") {
                if column.is_some() {
                    return Err(meta.error("`column` is already set for this field"));
                }
                *column = Some(parse_non_empty(&meta, "column")?);
            } else if meta.path.is_ident("property") {
                if property.is_some() {
                    return Err(meta.error("`property` is already set for this field"));
                }
                *property = Some(parse_non_empty(&meta, "property")?);
            } else if meta.path.is_ident("skip") {
                *skip = true;
            } else if meta.path.is_ident("schema") || meta.path.is_ident("table") {
                return Err(meta.error("`schema` and `table` belong on the struct, not on a field"));
            } else {
                return Err(meta.error("unknown record field attribute, expected `column`, `property` or `skip`"));
            }
            Ok(())
        })
    }

    pub(crate) fn descriptor_tokens(&self) -> TokenStream2 {
        let column = LitStr::new(&self.column, Span::call_site());
        let property = LitStr::new(&self.property, Span::call_site());
        quote! { .field_with_property(#column, #property) }
    }

    pub(crate) fn accessor_tokens(&self) -> TokenStream2 {
        let ident = &self.ident;
        let property = LitStr::new(&self.property, Span::call_site());
        quote! {
            ::recdiff::types::FieldAccessor::new(#property, |record: &Self| {
                ::recdiff::value::ToFieldValue::to_field_value(&record.#ident)
            })
        }
    }
}
