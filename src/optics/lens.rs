//! Lenses: optics on a field that is always there.
//!
//! Reading through a lens borrows the field out of the source. Writing
//! consumes the source and rebuilds only the record that owns the field, so
//! a composed lens copies exactly the records along its path.
//!
//! # Laws
//!
//! - get-set: `lens.set(source, lens.get(&source).into_owned()) == source`
//! - set-get: `lens.get(&lens.set(source, value)) == value`
//! - set-set: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Examples
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Street { name: String, num: u32 }
//!
//! let name_lens = lens!(Street, name);
//!
//! let street = Street { name: "high street".to_string(), num: 12 };
//! assert_eq!(*name_lens.get(&street), "high street");
//!
//! let renamed = name_lens.set(street, "broad street".to_string());
//! assert_eq!(renamed.name, "broad street");
//! assert_eq!(renamed.num, 12);
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;

use super::iso::{Iso, IsoAsLens};
use super::optional::{ComposedOptional, Optional};
use super::prism::{Prism, PrismAsOptional};
use super::traversal::{ComposedTraversal, Traversal};

/// A Lens focuses on a single field within a larger structure.
///
/// The focus is handed out as a [`Cow`]: borrowed when it lives inside the
/// source, owned when it has to be computed (for example through an [`Iso`]).
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// Implementations must satisfy the laws listed in the [module docs](self).
pub trait Lens<S, A: Clone> {
    /// Gets the focused field.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The focused field, borrowed from `source` whenever possible
    fn get<'a>(&self, source: &'a S) -> Cow<'a, A>;

    /// Sets the focused field to a new value, returning a new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused field
    ///
    /// # Returns
    ///
    /// A new source with the focused field updated
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// This is equivalent to getting the current value, applying the function,
    /// and setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Street { name: String, num: u32 }
    ///
    /// let num_lens = lens!(Street, num);
    /// let street = Street { name: "high street".to_string(), num: 12 };
    /// let next_door = num_lens.modify(street, |num| num + 2);
    /// assert_eq!(next_door.num, 14);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source).into_owned();
        self.set(source, function(current))
    }

    /// Modifies the focused field by applying a function to a reference.
    ///
    /// Avoids cloning the current focus when the new value can be computed
    /// from a borrow.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Company { name: String }
    ///
    /// let name_lens = lens!(Company, name);
    /// let company = Company { name: "new orbit".to_string() };
    /// let shouting = name_lens.modify_ref(company, |name| name.to_uppercase());
    /// assert_eq!(shouting.name, "NEW ORBIT");
    /// ```
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(&*self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Street { name: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { city: String, street: Street }
    ///
    /// let street_name = lens!(Address, street).compose(lens!(Street, name));
    ///
    /// let address = Address {
    ///     city: "oxford".to_string(),
    ///     street: Street { name: "high street".to_string() },
    /// };
    ///
    /// assert_eq!(*street_name.get(&address), "high street");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
        B: Clone,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with an iso, viewing the field through a conversion.
    ///
    /// The result is still a lens.
    fn compose_iso<B, I>(self, iso: I) -> ComposedLens<Self, IsoAsLens<I, A, B>, A>
    where
        Self: Sized,
        I: Iso<A, B>,
        B: Clone,
    {
        ComposedLens::new(self, iso.to_lens())
    }

    /// Composes this lens with a prism, narrowing the field to one variant.
    ///
    /// Since the variant may not match, the result is an [`Optional`].
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, Optional, some};
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Street { optional_name: Option<String> }
    ///
    /// let optional_name = lens!(Street, optional_name).compose_prism(some());
    ///
    /// let named = Street { optional_name: Some("high street".to_string()) };
    /// assert_eq!(optional_name.get_option(&named).as_deref(), Some(&"high street".to_string()));
    ///
    /// let unnamed = Street { optional_name: None };
    /// assert!(optional_name.get_option(&unnamed).is_none());
    /// ```
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> ComposedOptional<LensAsOptional<Self, S, A>, PrismAsOptional<P, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self.to_optional(), prism.to_optional())
    }

    /// Composes this lens with an optional. The result is an [`Optional`].
    fn compose_optional<B, O>(self, optional: O) -> ComposedOptional<LensAsOptional<Self, S, A>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self.to_optional(), optional)
    }

    /// Composes this lens with a traversal. The result is a [`Traversal`].
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<LensAsTraversal<Self, S, A>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
        B: Clone,
    {
        ComposedTraversal::new(self.to_traversal(), traversal)
    }

    /// Views this lens as an optional whose focus is always present.
    fn to_optional(self) -> LensAsOptional<Self, S, A>
    where
        Self: Sized,
    {
        LensAsOptional::new(self)
    }

    /// Converts this lens to a traversal.
    ///
    /// A lens can always be viewed as a traversal that focuses on exactly one element.
    fn to_traversal(self) -> LensAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        LensAsTraversal::new(self)
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the most common way to create a lens. The `lens!` macro and
/// `#[derive(Lenses)]` generate a `FunctionLens` internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Street { name: String, num: u32 }
///
/// let num_lens = FunctionLens::new(
///     |street: &Street| &street.num,
///     |street: Street, num: u32| Street { num, ..street },
/// );
///
/// let street = Street { name: "high street".to_string(), num: 12 };
/// assert_eq!(*num_lens.get(&street), 12);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - A function that borrows the focused field from the source
    /// * `setter` - A function that creates a new source with the field updated
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    A: Clone,
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> Cow<'a, A> {
        Cow::Borrowed((self.getter)(source))
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// `get` chains both getters. `set` reads the intermediate structure, sets the
/// value into it with the inner lens, and writes it back with the outer lens,
/// so every sibling of the path is moved over untouched.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
    B: Clone,
{
    fn get<'a>(&self, source: &'a S) -> Cow<'a, B> {
        match self.first.get(source) {
            Cow::Borrowed(intermediate) => self.second.get(intermediate),
            Cow::Owned(intermediate) => {
                let focus = self.second.get(&intermediate).into_owned();
                Cow::Owned(focus)
            }
        }
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).into_owned();
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens viewed as an optional.
///
/// The focus is always present, so `get_option` never returns `None`.
/// The `Optional` implementation lives in the optional module.
pub struct LensAsOptional<L, S, A> {
    pub(crate) lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsOptional<L, S, A> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L: Clone, S, A> Clone for LensAsOptional<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for LensAsOptional<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsOptional")
            .field("lens", &self.lens)
            .finish()
    }
}

/// A lens converted to a traversal.
///
/// This wrapper allows using a lens where a traversal is expected.
/// It will always yield exactly one element.
pub struct LensAsTraversal<L, S, A> {
    pub(crate) lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsTraversal<L, S, A> {
    /// Creates a new `LensAsTraversal` from a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L: Clone, S, A> Clone for LensAsTraversal<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for LensAsTraversal<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsTraversal")
            .field("lens", &self.lens)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// This macro generates a `FunctionLens` that focuses on the specified field
/// of the given struct type.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Restaurant { name: String, rating: u8 }
///
/// let rating_lens = lens!(Restaurant, rating);
///
/// let restaurant = Restaurant { name: "Fat Duck".to_string(), rating: 3 };
/// assert_eq!(*rating_lens.get(&restaurant), 3);
///
/// let updated = rating_lens.set(restaurant, 2);
/// assert_eq!(updated, Restaurant { name: "Fat Duck".to_string(), rating: 2 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

/// Builds the composition of derived field lenses along a typed path.
///
/// Each segment `Type::field` stands for `Type::field_lens()`, the method
/// generated by `#[derive(Lenses)]`. Consecutive segments are joined with
/// [`Lens::compose`], so a segment whose type does not match the previous
/// focus is a compile error.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use optica::optics::Lens;
/// use optica::{lens_path, Lenses};
///
/// #[derive(Clone, PartialEq, Debug, Lenses)]
/// struct Street { name: String }
///
/// #[derive(Clone, PartialEq, Debug, Lenses)]
/// struct Address { city: String, street: Arc<Street> }
///
/// let street_name = lens_path!(Address::street, Street::name);
///
/// let address = Address {
///     city: "oxford".to_string(),
///     street: Arc::new(Street { name: "high street".to_string() }),
/// };
/// assert_eq!(*street_name.get(&address), "high street");
/// ```
#[macro_export]
macro_rules! lens_path {
    ($struct_type:ident :: $field:ident) => {
        $crate::paste::paste! { $struct_type::[<$field _lens>]() }
    };
    ($struct_type:ident :: $field:ident, $($rest:tt)+) => {
        $crate::optics::Lens::compose(
            $crate::lens_path!($struct_type::$field),
            $crate::lens_path!($($rest)+),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Street {
        name: String,
        num: u32,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Address {
        city: String,
        street: Street,
    }

    fn high_street() -> Street {
        Street {
            name: "high street".to_string(),
            num: 12,
        }
    }

    #[test]
    fn test_function_lens_get() {
        let num_lens = FunctionLens::new(
            |street: &Street| &street.num,
            |street: Street, num: u32| Street { num, ..street },
        );

        assert_eq!(*num_lens.get(&high_street()), 12);
    }

    #[test]
    fn test_function_lens_get_borrows() {
        let name_lens = lens!(Street, name);
        let street = high_street();

        assert!(matches!(name_lens.get(&street), Cow::Borrowed(_)));
    }

    #[test]
    fn test_function_lens_set() {
        let num_lens = lens!(Street, num);

        let updated = num_lens.set(high_street(), 14);
        assert_eq!(updated.num, 14);
        assert_eq!(updated.name, "high street");
    }

    #[test]
    fn test_lens_modify() {
        let num_lens = lens!(Street, num);
        let doubled = num_lens.modify(high_street(), |num| num * 2);
        assert_eq!(doubled.num, 24);
    }

    #[test]
    fn test_lens_modify_ref() {
        let name_lens = lens!(Street, name);
        let upper = name_lens.modify_ref(high_street(), |name| name.to_uppercase());
        assert_eq!(upper.name, "HIGH STREET");
    }

    #[test]
    fn test_lens_compose() {
        let composed = lens!(Address, street).compose(lens!(Street, name));

        let address = Address {
            city: "oxford".to_string(),
            street: high_street(),
        };

        assert_eq!(*composed.get(&address), "high street");

        let updated = composed.set(address, "broad street".to_string());
        assert_eq!(updated.street.name, "broad street");
        assert_eq!(updated.street.num, 12);
        assert_eq!(updated.city, "oxford");
    }

    #[test]
    fn test_lens_to_traversal() {
        let num_lens = lens!(Street, num);
        let traversal = num_lens.to_traversal();

        let street = high_street();
        let all: Vec<u32> = traversal.to_vec(&street);
        assert_eq!(all, vec![12]);
    }

    #[test]
    fn test_lens_to_optional_is_always_present() {
        let num_lens = lens!(Street, num).to_optional();
        assert!(num_lens.is_present(&high_street()));
    }
}
