//! Prism optics for focusing on enum variants.
//!
//! A Prism is an optic that provides preview/review access to a variant of an enum.
//! Unlike a Lens which always succeeds, a Prism may fail to extract a value
//! if the enum is not the expected variant.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **PreviewReview Law**: Reviewing then previewing yields the original value.
//!    ```text
//!    prism.preview(&prism.review(value)) == Some(value)
//!    ```
//!
//! 2. **ReviewPreview Law**: If preview succeeds, reviewing the result yields the original.
//!    ```text
//!    if let Some(value) = prism.preview(&source) {
//!        prism.review(value.into_owned()) == source
//!    }
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Prism;
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Contact {
//!     Email(String),
//!     Phone(u64),
//! }
//!
//! let email_prism = prism!(Contact, Email);
//!
//! let email = Contact::Email("jaz@example.com".to_string());
//! assert_eq!(email_prism.preview(&email).as_deref(), Some(&"jaz@example.com".to_string()));
//!
//! let phone = Contact::Phone(1234);
//! assert!(email_prism.preview(&phone).is_none());
//!
//! let constructed = email_prism.review("fred@example.com".to_string());
//! assert_eq!(constructed, Contact::Email("fred@example.com".to_string()));
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;

use super::iso::{Iso, IsoAsPrism};
use super::lens::{Lens, LensAsOptional};
use super::optional::{ComposedOptional, Optional};
use super::traversal::{ComposedTraversal, Traversal};

/// A Prism focuses on a single variant of an enum.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The target type (the value inside the variant)
///
/// # Laws
///
/// 1. **PreviewReview Law**: `prism.preview(&prism.review(value)) == Some(value)`
/// 2. **ReviewPreview Law**: If preview succeeds, `prism.review(prism.preview(&source).unwrap().into_owned()) == source`
pub trait Prism<S, A: Clone> {
    /// Attempts to extract the value from the source.
    ///
    /// Returns `Some` if the source is the expected variant, `None` otherwise.
    ///
    /// # Arguments
    ///
    /// * `source` - The source enum
    ///
    /// # Returns
    ///
    /// The inner value if the variant matches, `None` otherwise
    fn preview<'a>(&self, source: &'a S) -> Option<Cow<'a, A>>;

    /// Constructs the source from a value.
    ///
    /// This always succeeds, creating the expected variant from the given value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to wrap in the variant
    ///
    /// # Returns
    ///
    /// The source containing the value
    fn review(&self, value: A) -> S;

    /// Returns `true` if the source is the expected variant.
    fn is_match(&self, source: &S) -> bool {
        self.preview(source).is_some()
    }

    /// Replaces the focused value if the variant matches.
    ///
    /// A source of any other variant is returned untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Prism, some};
    ///
    /// let prism = some::<i32>();
    /// assert_eq!(prism.set(Some(1), 2), Some(2));
    /// assert_eq!(prism.set(None, 2), None);
    /// ```
    fn set(&self, source: S, value: A) -> S {
        if self.is_match(&source) {
            self.review(value)
        } else {
            source
        }
    }

    /// Modifies the value if the variant matches.
    ///
    /// If the variant does not match, returns the original source unchanged.
    ///
    /// # Arguments
    ///
    /// * `source` - The source enum (consumed)
    /// * `function` - The function to apply to the inner value
    ///
    /// # Returns
    ///
    /// The modified source if the variant matched, otherwise the original source
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.preview(&source).map(Cow::into_owned);
        match current {
            Some(value) => self.review(function(value)),
            None => source,
        }
    }

    /// Modifies the value if the variant matches, reporting a mismatch as `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Prism, some};
    ///
    /// let prism = some::<i32>();
    /// assert_eq!(prism.modify_option(Some(20), |value| value + 1), Some(Some(21)));
    /// assert_eq!(prism.modify_option(None, |value| value + 1), None);
    /// ```
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let current = self.preview(&source)?.into_owned();
        Some(self.review(function(current)))
    }

    /// Composes this prism with another prism to focus on a nested variant.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
        B: Clone,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with an iso. The result is still a prism.
    fn compose_iso<B, I>(self, iso: I) -> ComposedPrism<Self, IsoAsPrism<I, A, B>, A>
    where
        Self: Sized,
        I: Iso<A, B>,
        B: Clone,
    {
        ComposedPrism::new(self, iso.to_prism())
    }

    /// Composes this prism with a lens on the matched value.
    ///
    /// The result is an [`Optional`]: the lens focus exists only when the
    /// variant matches.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Optional, Prism};
    /// use optica::{lens, prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Circle { radius: f64 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(Circle), Square(f64) }
    ///
    /// let radius = prism!(Shape, Circle).compose_lens(lens!(Circle, radius));
    ///
    /// let circle = Shape::Circle(Circle { radius: 2.0 });
    /// assert_eq!(radius.get_option(&circle).as_deref(), Some(&2.0));
    /// assert!(radius.get_option(&Shape::Square(1.0)).is_none());
    /// ```
    fn compose_lens<B, L>(
        self,
        lens: L,
    ) -> ComposedOptional<PrismAsOptional<Self, S, A>, LensAsOptional<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self.to_optional(), lens.to_optional())
    }

    /// Composes this prism with an optional. The result is an [`Optional`].
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedOptional<PrismAsOptional<Self, S, A>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self.to_optional(), optional)
    }

    /// Composes this prism with a traversal. The result is a [`Traversal`].
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<PrismAsTraversal<Self, S, A>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
        B: Clone,
    {
        ComposedTraversal::new(self.to_traversal(), traversal)
    }

    /// Views this prism as an optional.
    fn to_optional(self) -> PrismAsOptional<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }

    /// Converts this prism to a traversal.
    ///
    /// A prism can be viewed as a traversal that focuses on zero or one element.
    fn to_traversal(self) -> PrismAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }
}

/// A prism implemented using preview and review functions.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `P`: The preview function type
/// - `R`: The review function type
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionPrism, Prism};
///
/// let even = FunctionPrism::new(
///     |value: &(bool, u32)| if value.0 { Some(&value.1) } else { None },
///     |value: u32| (true, value),
/// );
///
/// assert_eq!(even.preview(&(true, 4)).as_deref(), Some(&4));
/// assert!(even.preview(&(false, 3)).is_none());
/// ```
pub struct FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<&A>,
    R: Fn(A) -> S,
{
    preview_function: P,
    review_function: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, P, R> FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<&A>,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` from preview and review functions.
    ///
    /// # Arguments
    ///
    /// * `preview_function` - Borrows the inner value if the variant matches
    /// * `review_function` - Constructs the source from an inner value
    #[must_use]
    pub const fn new(preview_function: P, review_function: R) -> Self {
        Self {
            preview_function,
            review_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> Prism<S, A> for FunctionPrism<S, A, P, R>
where
    A: Clone,
    P: Fn(&S) -> Option<&A>,
    R: Fn(A) -> S,
{
    fn preview<'a>(&self, source: &'a S) -> Option<Cow<'a, A>> {
        (self.preview_function)(source).map(Cow::Borrowed)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }
}

impl<S, A, P, R> Clone for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<&A> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> std::fmt::Debug for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<&A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism whose preview builds the focus instead of borrowing it.
///
/// Used when the focus does not exist as a single value inside the source,
/// such as the fields of a multi-field variant gathered into a tuple.
///
/// # Example
///
/// ```
/// use optica::optics::{ComputedPrism, Prism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Location {
///     Postal { street: String, postcode: String },
///     Unknown,
/// }
///
/// let postal = ComputedPrism::new(
///     |source: &Location| match source {
///         Location::Postal { street, postcode } => Some((street.clone(), postcode.clone())),
///         Location::Unknown => None,
///     },
///     |(street, postcode): (String, String)| Location::Postal { street, postcode },
/// );
///
/// let duck = postal.review(("Some Street".to_string(), "RG12 1AA".to_string()));
/// assert_eq!(
///     postal.preview(&duck).map(|focus| focus.into_owned()),
///     Some(("Some Street".to_string(), "RG12 1AA".to_string())),
/// );
/// assert!(postal.preview(&Location::Unknown).is_none());
/// ```
pub struct ComputedPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    preview_function: P,
    review_function: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, P, R> ComputedPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    /// Creates a new `ComputedPrism` from an owning preview and a review function.
    #[must_use]
    pub const fn new(preview_function: P, review_function: R) -> Self {
        Self {
            preview_function,
            review_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> Prism<S, A> for ComputedPrism<S, A, P, R>
where
    A: Clone,
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn preview<'a>(&self, source: &'a S) -> Option<Cow<'a, A>> {
        (self.preview_function)(source).map(Cow::Owned)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = (self.preview_function)(&source);
        match current {
            Some(value) => (self.review_function)(function(value)),
            None => source,
        }
    }
}

impl<S, A, P, R> Clone for ComputedPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> std::fmt::Debug for ComputedPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComputedPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// Matches only when both the outer and the inner variant match.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
    A: Clone + 'static,
    B: Clone,
{
    fn preview<'a>(&self, source: &'a S) -> Option<Cow<'a, B>> {
        match self.first.preview(source)? {
            Cow::Borrowed(intermediate) => self.second.preview(intermediate),
            Cow::Owned(intermediate) => {
                let focus = self.second.preview(&intermediate)?.into_owned();
                Some(Cow::Owned(focus))
            }
        }
    }

    fn review(&self, value: B) -> S {
        self.first.review(self.second.review(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism viewed as an optional.
pub struct PrismAsOptional<P, S, A> {
    pub(crate) prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsOptional<P, S, A> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P: Clone, S, A> Clone for PrismAsOptional<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsOptional<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsOptional")
            .field("prism", &self.prism)
            .finish()
    }
}

/// A prism converted to a traversal.
///
/// Yields one element when the variant matches and none otherwise.
pub struct PrismAsTraversal<P, S, A> {
    pub(crate) prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsTraversal<P, S, A> {
    /// Creates a new `PrismAsTraversal` from a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P: Clone, S, A> Clone for PrismAsTraversal<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsTraversal<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsTraversal")
            .field("prism", &self.prism)
            .finish()
    }
}

/// Creates a prism for a single-field enum variant.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Prism;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Pet {
///     Dog(String),
///     Cat(String),
/// }
///
/// let dog_prism = prism!(Pet, Dog);
///
/// assert!(dog_prism.is_match(&Pet::Dog("rocky".to_string())));
/// assert!(!dog_prism.is_match(&Pet::Cat("fred".to_string())));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Kind {
        Dog(String),
        Cat(String),
    }

    #[test]
    fn test_prism_preview_match() {
        let dog_prism = prism!(Kind, Dog);
        let rocky = Kind::Dog("rocky".to_string());
        assert_eq!(dog_prism.preview(&rocky).as_deref(), Some(&"rocky".to_string()));
    }

    #[test]
    fn test_prism_preview_mismatch() {
        let dog_prism = prism!(Kind, Dog);
        assert!(dog_prism.preview(&Kind::Cat("fred".to_string())).is_none());
    }

    #[test]
    fn test_prism_set_mismatch_returns_source() {
        let dog_prism = prism!(Kind, Dog);
        let fred = Kind::Cat("fred".to_string());
        assert_eq!(dog_prism.set(fred.clone(), "wally".to_string()), fred);
    }

    #[test]
    fn test_prism_modify_match() {
        let dog_prism = prism!(Kind, Dog);
        let rocky = Kind::Dog("rocky".to_string());
        let upper = dog_prism.modify(rocky, |name| name.to_uppercase());
        assert_eq!(upper, Kind::Dog("ROCKY".to_string()));
    }

    #[test]
    fn test_prism_modify_option_mismatch() {
        let dog_prism = prism!(Kind, Dog);
        let result = dog_prism.modify_option(Kind::Cat("fred".to_string()), |name| name);
        assert!(result.is_none());
    }

    #[test]
    fn test_composed_prism_review() {
        let outer = FunctionPrism::new(
            |source: &Option<Kind>| source.as_ref(),
            |value: Kind| Some(value),
        );
        let composed = outer.compose(prism!(Kind, Dog));

        assert_eq!(composed.review("rocky".to_string()), Some(Kind::Dog("rocky".to_string())));
        assert!(composed.preview(&None).is_none());
        assert!(composed.preview(&Some(Kind::Cat("fred".to_string()))).is_none());
    }
}
