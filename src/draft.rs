//! Draft-based updates: edit a scratch copy in place, get a new value back.
//!
//! [`produce`] clones the source, hands the clone to a recipe as `&mut`,
//! and returns it. The source is never touched. When records keep their
//! children behind `Arc`, the clone is shallow and the recipe reaches a
//! nested child with [`Arc::make_mut`], which copies only the children
//! it walks through. Everything else stays shared with the source.
//!
//! [`producer`] turns a recipe that takes an extra argument into a
//! reusable update function.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use optica::draft::produce;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String, postcode: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Restaurant { name: Arc<String>, address: Arc<Address> }
//!
//! let fat_duck = Restaurant {
//!     name: Arc::new("Fat Duck".to_string()),
//!     address: Arc::new(Address {
//!         street: "Some Street".to_string(),
//!         city: "Bray".to_string(),
//!         postcode: "RG12 1AA".to_string(),
//!     }),
//! };
//!
//! let moved = produce(&fat_duck, |draft| {
//!     Arc::make_mut(&mut draft.address).street = "High Street".to_string();
//! });
//!
//! assert_eq!(fat_duck.address.street, "Some Street");
//! assert_eq!(moved.address.street, "High Street");
//! assert!(Arc::ptr_eq(&fat_duck.name, &moved.name));
//! ```
//!
//! [`Arc::make_mut`]: std::sync::Arc::make_mut

/// Produces a new value by running `recipe` against a copy of `source`.
///
/// # Arguments
///
/// * `source` - The value to start from; it is left unchanged
/// * `recipe` - Edits the draft in place
///
/// # Returns
///
/// The edited draft
pub fn produce<S, F>(source: &S, recipe: F) -> S
where
    S: Clone,
    F: FnOnce(&mut S),
{
    let mut draft = source.clone();
    recipe(&mut draft);
    draft
}

/// Turns a recipe taking an extra argument into a reusable update function.
///
/// `producer(recipe)(source, argument)` is `produce(source, |draft| recipe(draft, argument))`.
///
/// # Example
///
/// ```
/// use optica::draft::producer;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { street: String, city: String }
///
/// let relocate = producer(|draft: &mut Address, city: &str| draft.city = city.to_string());
///
/// let restaurants = vec![
///     Address { street: "Main Street".to_string(), city: "Bray".to_string() },
///     Address { street: "High Street".to_string(), city: "Bray".to_string() },
/// ];
/// let relocated: Vec<Address> = restaurants.iter().map(|address| relocate(address, "Reading")).collect();
///
/// assert!(relocated.iter().all(|address| address.city == "Reading"));
/// assert!(restaurants.iter().all(|address| address.city == "Bray"));
/// ```
pub fn producer<S, A, F>(recipe: F) -> impl Fn(&S, A) -> S
where
    S: Clone,
    F: Fn(&mut S, A),
{
    move |source: &S, argument: A| produce(source, |draft| recipe(draft, argument))
}
