#[allow(unused_imports)]
use super::*;

pub(crate) struct ParsedRecord {
    name: Ident,
    schema: String,
    table: String,
    fields: Vec<ParsedField>,
}

impl ParsedRecord {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(Error::new(
                input.generics.params.span(),
                "Record cannot be derived for generic structs",
            ));
        }

        let mut schema = None;
        let mut table = None;
        for attr in &input.attrs {
            if attr.path().is_ident("record") {
                Self::parse_container_attr(attr, &mut schema, &mut table)?;
            }
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let mut parsed = Vec::new();
                    for field in &named.named {
                        let field = ParsedField::from_field(field)?;
                        if !field.skip {
                            parsed.push(field);
                        }
                    }
                    parsed
                }
                _ => return Err(Error::new(input.ident.span(), "Record requires named fields")),
            },
            _ => return Err(Error::new(input.ident.span(), "Record can only be derived for structs")),
        };

        if fields.is_empty() {
            return Err(Error::new(
                input.ident.span(),
                "Record requires at least one field that is not #[record(skip)]",
            ));
        }
        Self::ensure_unique(&fields)?;

        let schema = schema.unwrap_or_else(|| to_snake_case(&unraw(&input.ident)));
        let table = table.unwrap_or_else(|| schema.clone());

        Ok(Self {
            name: input.ident.clone(),
            schema,
            table,
            fields,
        })
    }

    fn parse_container_attr(attr: &Attribute, schema: &mut Option<String>, table: &mut Option<String>) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("schema") {
                *schema = Some(parse_non_empty(&meta, "schema")?);
            } else if meta.path.is_ident("table") {
                *table = Some(parse_non_empty(&meta, "table")?);
            } else if meta.path.is_ident("column") || meta.path.is_ident("property") || meta.path.is_ident("skip") {
                return Err(meta.error("`column`, `property` and `skip` belong on fields, not on the struct"));
            } else {
                return Err(meta.error("unknown record attribute, expected `schema` or `table`"));
            }
            Ok(())
        })
    }

    fn ensure_unique(fields: &[ParsedField]) -> Result<()> {
        for (i, field) in fields.iter().enumerate() {
            for earlier in &fields[..i] {
                if earlier.column == field.column {
                    return Err(Error::new(
                        field.ident.span(),
                        format!("column `{}` is used by more than one field", field.column),
                    ));
                }
                if earlier.property == field.property {
                    return Err(Error::new(
                        field.ident.span(),
                        format!("property `{}` is used by more than one field", field.property),
                    ));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let schema = LitStr::new(&self.schema, Span::call_site());
        let table = LitStr::new(&self.table, Span::call_site());
        let field_inits = self.fields.iter().map(|field| field.descriptor_tokens());
        let accessors = self.fields.iter().map(|field| field.accessor_tokens());

        quote! {
            impl ::recdiff::types::Record for #name {
                const SCHEMA: &'static str = #schema;

                fn schema_descriptor() -> ::recdiff::types::SchemaDescriptor {
                    static DESCRIPTOR: ::std::sync::OnceLock<::recdiff::types::SchemaDescriptor> =
                        ::std::sync::OnceLock::new();
                    static REGISTERED: ::std::sync::Once = ::std::sync::Once::new();

                    let descriptor = DESCRIPTOR.get_or_init(|| {
                        ::recdiff::types::SchemaDescriptor::new(#schema, #table)
                            #(#field_inits)*
                    });
                    REGISTERED.call_once(|| ::recdiff::registry::register_descriptor(descriptor));
                    descriptor.clone()
                }

                fn accessors() -> ::std::vec::Vec<::recdiff::types::FieldAccessor<Self>> {
                    ::std::vec![#(#accessors),*]
                }

                fn ensure_registered() {
                    let _ = <Self as ::recdiff::types::Record>::schema_descriptor();
                }
            }
        }
    }
}
