//! Iso optics for lossless conversions between two representations.
//!
//! An Iso is the strongest optic: it can be used wherever a Lens or a Prism
//! is expected. Composing an Iso with any other optic yields an optic of the
//! other kind.
//!
//! # Laws
//!
//! 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
//!
//! Conversions over floating point values only satisfy the laws up to
//! rounding.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{FunctionIso, Iso};
//!
//! let fahrenheit_to_celsius = FunctionIso::new(
//!     |fahrenheit: f64| (fahrenheit - 32.0) * 5.0 / 9.0,
//!     |celsius: f64| celsius * 9.0 / 5.0 + 32.0,
//! );
//!
//! assert!((fahrenheit_to_celsius.to(32.0) - 0.0).abs() < 1e-9);
//! assert!((fahrenheit_to_celsius.from(0.0) - 32.0).abs() < 1e-9);
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;

use super::lens::{ComposedLens, Lens, LensAsOptional, LensAsTraversal};
use super::optional::{ComposedOptional, Optional};
use super::prism::{ComposedPrism, Prism};
use super::traversal::{ComposedTraversal, Traversal};

/// An Iso is a lossless, reversible conversion between `S` and `A`.
///
/// # Type Parameters
///
/// - `S`: The source representation
/// - `A`: The target representation
pub trait Iso<S, A> {
    /// Converts the source into the target representation.
    fn get(&self, source: S) -> A;

    /// Converts the target representation back into the source.
    fn reverse_get(&self, value: A) -> S;

    /// Alias for [`Iso::get`].
    fn to(&self, source: S) -> A {
        self.get(source)
    }

    /// Alias for [`Iso::reverse_get`].
    fn from(&self, value: A) -> S {
        self.reverse_get(value)
    }

    /// Converts, applies a function, and converts back.
    ///
    /// Equivalent to `iso.reverse_get(function(iso.get(source)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{FunctionIso, Iso};
    ///
    /// let name_letters = FunctionIso::new(
    ///     |name: String| name.chars().collect::<Vec<_>>(),
    ///     |letters: Vec<char>| letters.into_iter().collect::<String>(),
    /// );
    ///
    /// let backwards = name_letters.modify("Mikey".to_string(), |mut letters| {
    ///     letters.reverse();
    ///     letters
    /// });
    /// assert_eq!(backwards, "yekiM");
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let converted = self.get(source);
        self.reverse_get(function(converted))
    }

    /// Swaps the direction of this Iso.
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Composes this Iso with another Iso.
    ///
    /// `get` runs this Iso first; `reverse_get` runs the other Iso first.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{FunctionIso, Iso};
    ///
    /// let us_gallons_to_litres = FunctionIso::new(
    ///     |gallons: f64| gallons * 3.785_41,
    ///     |litres: f64| litres / 3.785_41,
    /// );
    /// let litres_to_imperial_gallons = FunctionIso::new(
    ///     |litres: f64| litres / 4.546_09,
    ///     |gallons: f64| gallons * 4.546_09,
    /// );
    ///
    /// let us_to_imperial = us_gallons_to_litres.compose(litres_to_imperial_gallons);
    ///
    /// assert!((us_to_imperial.get(1.0) - 0.833).abs() < 1e-3);
    /// assert!((us_to_imperial.reverse_get(1.0) - 1.201).abs() < 1e-3);
    /// ```
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Composes this Iso with a lens on the converted value. The result is a [`Lens`].
    fn compose_lens<B, L>(self, lens: L) -> ComposedLens<IsoAsLens<Self, S, A>, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
        B: Clone,
    {
        ComposedLens::new(self.to_lens(), lens)
    }

    /// Composes this Iso with a prism on the converted value. The result is a [`Prism`].
    fn compose_prism<B, P>(self, prism: P) -> ComposedPrism<IsoAsPrism<Self, S, A>, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
        B: Clone,
    {
        ComposedPrism::new(self.to_prism(), prism)
    }

    /// Composes this Iso with an optional. The result is an [`Optional`].
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedOptional<LensAsOptional<IsoAsLens<Self, S, A>, S, A>, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
        S: Clone,
        A: Clone,
        B: Clone,
    {
        ComposedOptional::new(self.to_lens().to_optional(), optional)
    }

    /// Composes this Iso with a traversal. The result is a [`Traversal`].
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<LensAsTraversal<IsoAsLens<Self, S, A>, S, A>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
        S: Clone,
        A: Clone,
        B: Clone,
    {
        ComposedTraversal::new(self.to_lens().to_traversal(), traversal)
    }

    /// Views this Iso as a Lens whose focus is the converted value.
    fn to_lens(self) -> IsoAsLens<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Views this Iso as a Prism that always matches.
    fn to_prism(self) -> IsoAsPrism<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }
}

// =============================================================================
// FunctionIso
// =============================================================================

/// An Iso implemented using a pair of conversion functions.
///
/// The `iso!` macro generates a `FunctionIso` internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The get function type
/// - `Rg`: The `reverse_get` function type
pub struct FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    get_function: G,
    reverse_get_function: Rg,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    /// Creates a new `FunctionIso` from its two directions.
    ///
    /// # Arguments
    ///
    /// * `get_function` - Converts `S` into `A`
    /// * `reverse_get_function` - Converts `A` back into `S`
    #[must_use]
    pub const fn new(get_function: G, reverse_get_function: Rg) -> Self {
        Self {
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, Rg> Clone for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A + Clone,
    Rg: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_function: self.get_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> std::fmt::Debug for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIso").finish_non_exhaustive()
    }
}

// =============================================================================
// ReversedIso
// =============================================================================

/// An Iso running another Iso backwards.
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Wraps an Iso so that its directions are swapped.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

impl<I: Clone> Clone for ReversedIso<I> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for ReversedIso<I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReversedIso")
            .field("inner", &self.inner)
            .finish()
    }
}

// =============================================================================
// ComposedIso
// =============================================================================

/// An Iso composed of two Isos.
///
/// # Type Parameters
///
/// - `I1`: The first conversion
/// - `I2`: The second conversion
/// - `A`: The intermediate representation
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a new composed Iso.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A> std::fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// IsoAsLens / IsoAsPrism
// =============================================================================

/// An Iso viewed as a Lens.
///
/// The focus is computed, so `get` clones the source and hands out an owned value.
/// `set` ignores the old source entirely.
pub struct IsoAsLens<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsLens<I, S, A> {
    /// Wraps an Iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Lens<S, A> for IsoAsLens<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
    A: Clone,
{
    fn get<'a>(&self, source: &'a S) -> Cow<'a, A> {
        Cow::Owned(self.iso.get(source.clone()))
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.iso.modify(source, function)
    }
}

impl<I: Clone, S, A> Clone for IsoAsLens<I, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.iso.clone())
    }
}

impl<I: std::fmt::Debug, S, A> std::fmt::Debug for IsoAsLens<I, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IsoAsLens")
            .field("iso", &self.iso)
            .finish()
    }
}

/// An Iso viewed as a Prism that always matches.
pub struct IsoAsPrism<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsPrism<I, S, A> {
    /// Wraps an Iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Prism<S, A> for IsoAsPrism<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
    A: Clone,
{
    fn preview<'a>(&self, source: &'a S) -> Option<Cow<'a, A>> {
        Some(Cow::Owned(self.iso.get(source.clone())))
    }

    fn review(&self, value: A) -> S {
        self.iso.reverse_get(value)
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.iso.modify(source, function)
    }
}

impl<I: Clone, S, A> Clone for IsoAsPrism<I, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.iso.clone())
    }
}

impl<I: std::fmt::Debug, S, A> std::fmt::Debug for IsoAsPrism<I, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IsoAsPrism")
            .field("iso", &self.iso)
            .finish()
    }
}

/// Creates an Iso from a pair of conversion functions.
///
/// # Syntax
///
/// ```text
/// iso!(get, reverse_get)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Iso;
/// use optica::iso;
///
/// let metres_to_centimetres = iso!(|metres: u32| metres * 100, |centimetres: u32| centimetres / 100);
///
/// assert_eq!(metres_to_centimetres.get(3), 300);
/// assert_eq!(metres_to_centimetres.reverse_get(300), 3);
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}
