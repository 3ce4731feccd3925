//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Field, Fields, GenericArgument, Generics, Ident, PathArguments, Type,
    parse_macro_input,
};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
            .to_compile_error(),
    };

    TokenStream::from(expanded)
}

/// Generates lens methods for a struct's fields.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let lens_methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| (ident, field)))
                .map(|(field_name, field)| generate_field_lens(field_name, field))
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

/// Generates the lens method for one named field.
fn generate_field_lens(field_name: &Ident, field: &Field) -> TokenStream2 {
    let method_name = format_ident!("{}_lens", field_name);

    if let Some(pointee) = arc_pointee(&field.ty) {
        let doc = format!(
            "Returns a lens focusing on the value behind the `{field_name}` field.\n\n\
             Setting a value equal to the current one keeps the existing `Arc`; \
             any other value is stored in a new `Arc`."
        );
        return quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::optica::optics::Lens<Self, #pointee> + Clone
            where
                #pointee: Clone + PartialEq,
            {
                ::optica::optics::FunctionLens::new(
                    |source: &Self| &*source.#field_name,
                    |mut source: Self, value: #pointee| {
                        if *source.#field_name != value {
                            source.#field_name = ::std::sync::Arc::new(value);
                        }
                        source
                    },
                )
            }
        };
    }

    let field_type = &field.ty;
    let doc = format!("Returns a lens focusing on the `{field_name}` field.");
    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Lens<Self, #field_type> + Clone
        where
            #field_type: Clone,
        {
            ::optica::optics::FunctionLens::new(
                |source: &Self| &source.#field_name,
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    }
}

/// Returns `T` when `field_type` is spelled `Arc<T>` (with any path prefix).
fn arc_pointee(field_type: &Type) -> Option<&Type> {
    let Type::Path(type_path) = field_type else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Arc" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    if arguments.args.len() != 1 {
        return None;
    }
    match arguments.args.first()? {
        GenericArgument::Type(pointee) => Some(pointee),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Arc<Street>", Some("Street"))]
    #[case("std::sync::Arc<Address>", Some("Address"))]
    #[case("::std::sync::Arc<Vec<String>>", Some("Vec < String >"))]
    #[case("String", None)]
    #[case("Rc<Street>", None)]
    #[case("Vec<Arc<Street>>", None)]
    fn test_arc_pointee(#[case] source: &str, #[case] expected: Option<&str>) {
        let field_type: Type = syn::parse_str(source).unwrap();
        let pointee = arc_pointee(&field_type).map(|pointee| quote!(#pointee).to_string());
        assert_eq!(pointee.as_deref(), expected);
    }

    #[test]
    fn test_arc_field_lens_goes_through_pointer() {
        let field: Field = syn::parse_quote!(street: Arc<Street>);
        let ident = format_ident!("street");
        let generated = generate_field_lens(&ident, &field).to_string();

        assert!(generated.contains("street_lens"));
        assert!(generated.contains("Arc :: new"));
        assert!(generated.contains("Lens < Self , Street >"));
        assert!(generated.contains("Street : Clone + PartialEq"));
    }

    #[test]
    fn test_generated_doc_names_the_field() {
        let field: Field = syn::parse_quote!(city: String);
        let ident = format_ident!("city");
        let generated = generate_field_lens(&ident, &field).to_string();

        assert!(generated.contains("the `city` field"));
        assert!(!generated.contains("#field_name"));
    }

    #[test]
    fn test_tuple_struct_is_rejected() {
        let input: DeriveInput = syn::parse_quote!(
            struct Pair(u32, u32);
        );
        let Data::Struct(data_struct) = &input.data else {
            panic!("expected a struct");
        };
        let generated = generate_struct_lenses(&input.ident, &input.generics, &data_struct.fields);

        assert!(generated.to_string().contains("compile_error"));
    }
}
