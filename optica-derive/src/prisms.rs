//! Implementation of the `#[derive(Prisms)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(name, generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
            .to_compile_error(),
    };

    TokenStream::from(expanded)
}

/// Generates prism methods for an enum's variants.
fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants.map(generate_variant_prism).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// Generates a prism method for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));

    match &variant.fields {
        Fields::Unit => generate_unit_variant_prism(variant_name, &method_name),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            generate_single_field_prism(variant_name, &method_name, field_type)
        }
        Fields::Unnamed(fields) => {
            let bindings: Vec<Ident> = (0..fields.unnamed.len())
                .map(|index| format_ident!("field_{}", index))
                .collect();
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let pattern = quote! { Self::#variant_name(#(#bindings),*) };

            generate_tuple_focus_prism(variant_name, &method_name, &pattern, &bindings, &field_types)
        }
        Fields::Named(fields) => {
            let bindings: Vec<Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.clone())
                .collect();
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();
            let pattern = quote! { Self::#variant_name { #(#bindings),* } };

            generate_tuple_focus_prism(variant_name, &method_name, &pattern, &bindings, &field_types)
        }
    }
}

/// Generates a prism for a unit variant. The focus is `()`.
fn generate_unit_variant_prism(variant_name: &Ident, method_name: &Ident) -> TokenStream2 {
    let doc = format!("Returns a prism matching the `{variant_name}` variant.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, ()> + Clone {
            ::optica::optics::FunctionPrism::new(
                |source: &Self| match source {
                    Self::#variant_name => Some(&()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(): ()| Self::#variant_name,
            )
        }
    }
}

/// Generates a prism for a tuple variant with a single field, previewed by reference.
fn generate_single_field_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_type: &Type,
) -> TokenStream2 {
    let doc = format!("Returns a prism focusing on the value of the `{variant_name}` variant.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, #field_type> + Clone
        where
            #field_type: Clone,
        {
            ::optica::optics::FunctionPrism::new(
                |source: &Self| match source {
                    Self::#variant_name(value) => Some(value),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |value: #field_type| Self::#variant_name(value),
            )
        }
    }
}

/// Generates a prism whose focus is the tuple of a variant's fields.
///
/// The fields are not stored as a tuple, so preview clones them into one.
fn generate_tuple_focus_prism(
    variant_name: &Ident,
    method_name: &Ident,
    pattern: &TokenStream2,
    bindings: &[Ident],
    field_types: &[&Type],
) -> TokenStream2 {
    let tuple_type = quote! { (#(#field_types,)*) };
    let doc = format!(
        "Returns a prism focusing on the fields of the `{variant_name}` variant as a tuple."
    );

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, #tuple_type> + Clone
        where
            #tuple_type: Clone,
        {
            ::optica::optics::ComputedPrism::new(
                |source: &Self| match source {
                    #pattern => Some((#(::std::clone::Clone::clone(#bindings),)*)),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(#(#bindings,)*): #tuple_type| #pattern,
            )
        }
    }
}

/// Converts a `PascalCase` variant name to `snake_case`.
///
/// Runs of capitals are kept together: `HTTPRequest` becomes `http_request`.
fn to_snake_case(input: &str) -> String {
    let characters: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (index, &character) in characters.iter().enumerate() {
        if character.is_uppercase() {
            let previous = index.checked_sub(1).map(|previous| characters[previous]);
            let next_is_lowercase = characters
                .get(index + 1)
                .is_some_and(|next| next.is_lowercase());
            let starts_word = previous.is_some_and(|previous| {
                previous.is_lowercase()
                    || previous.is_ascii_digit()
                    || (previous.is_uppercase() && next_is_lowercase)
            });
            if starts_word {
                result.push('_');
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
