//! Derive macros for optica optics.
//!
//! This crate provides procedural macros that generate one optic per
//! field or variant of a type, so nested records can be reached without
//! writing getters and setters by hand.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens methods for struct fields
//! - [`Prisms`]: Generates prism methods for enum variants
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use optica::Lenses;
//! use optica::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Lenses)]
//! struct Company {
//!     name: String,
//!     address: Arc<Address>,
//! }
//!
//! // Generated methods:
//! // - Company::name_lens() -> impl Lens<Company, String>
//! // - Company::address_lens() -> impl Lens<Company, Address>
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optica::Prisms;
//! use optica::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Contact {
//!     Email(String),
//!     Postal { street: String, postcode: String },
//!     Unlisted,
//! }
//!
//! // Generated methods:
//! // - Contact::email_prism() -> impl Prism<Contact, String>
//! // - Contact::postal_prism() -> impl Prism<Contact, (String, String)>
//! // - Contact::unlisted_prism() -> impl Prism<Contact, ()>
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro for generating Lens methods for struct fields.
///
/// For each field `foo` of type `T`, generates an associated function
/// `foo_lens()` returning `impl Lens<Self, T> + Clone`.
///
/// A field declared as `Arc<T>` is looked through: its lens focuses on the
/// `T` behind the pointer and reads borrow through the `Arc`. Writing a
/// value equal to the current one keeps the existing `Arc`; any other value
/// is stored in a new `Arc`. Every other field keeps its pointer either way.
/// Use `lens!` for a lens on the `Arc` itself.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
/// - Every focused field type must implement `Clone`
/// - The `T` of an `Arc<T>` field must also implement `PartialEq`
///
/// # Example
///
/// ```rust,ignore
/// use optica::Lenses;
/// use optica::optics::Lens;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Street {
///     name: String,
///     num: u32,
/// }
///
/// let street = Street { name: "high street".to_string(), num: 12 };
///
/// let num_lens = Street::num_lens();
/// assert_eq!(*num_lens.get(&street), 12);
/// ```
///
/// # Generics
///
/// Generic structs are supported; call the method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Tagged<T> {
///     tag: String,
///     value: T,
/// }
///
/// let lens = Tagged::<u32>::value_lens();
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating Prism methods for enum variants.
///
/// For each variant, generates `{variant_name_snake_case}_prism()`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `Unlisted`): `impl Prism<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Email(String)`): `impl Prism<Enum, String>`,
///   previewing by reference
/// - **Multi-field tuple and struct variants**: `impl Prism<Enum, (T1, T2, ...)>`,
///   previewing a tuple of cloned fields
///
/// # Example
///
/// ```rust,ignore
/// use optica::Prisms;
/// use optica::optics::Prism;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Pet {
///     Dog(String),
///     Cat(String),
/// }
///
/// let dog_prism = Pet::dog_prism();
/// assert!(dog_prism.is_match(&Pet::Dog("Rocky".to_string())));
/// assert!(!dog_prism.is_match(&Pet::Cat("Fred".to_string())));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
