//! Optional optics for focusing on elements that may or may not exist.
//!
//! An Optional is an optic that provides get/set access to a value that
//! may or may not be present. It is what a Lens composed with a Prism
//! becomes, and it is also the shape of an index into a collection.
//!
//! When the focus is absent every update returns the source untouched.
//!
//! # Laws
//!
//! Every Optional must satisfy two laws (when the element is present):
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if let Some(value) = optional.get_option(&source) {
//!        optional.set(source.clone(), value.into_owned()) == source
//!    }
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.is_present(&source) {
//!        optional.get_option(&optional.set(source, value)) == Some(value)
//!    }
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{FunctionOptional, Optional};
//!
//! let first_character = FunctionOptional::new(
//!     |name: &String| name.chars().next(),
//!     |name: String, first: char| std::iter::once(first).chain(name.chars().skip(1)).collect::<String>(),
//! );
//!
//! assert_eq!(first_character.get_option(&"john".to_string()).as_deref(), Some(&'j'));
//! assert!(first_character.get_option(&String::new()).is_none());
//!
//! let capitalised = first_character.modify("john".to_string(), |first| first.to_ascii_uppercase());
//! assert_eq!(capitalised, "John");
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;

use super::iso::{Iso, IsoAsLens};
use super::lens::{Lens, LensAsOptional};
use super::prism::{Prism, PrismAsOptional};
use super::traversal::{ComposedTraversal, Traversal};

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
///
/// # Laws
///
/// 1. **`GetOptionSet` Law**: If present, getting and setting back yields the original.
/// 2. **`SetGetOption` Law**: If present, setting then getting yields the set value.
pub trait Optional<S, A: Clone> {
    /// Gets the focused element if present.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The element if present, `None` otherwise
    fn get_option<'a>(&self, source: &'a S) -> Option<Cow<'a, A>>;

    /// Sets the focused element if present.
    ///
    /// If the focus is absent, the source is returned untouched.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the element
    ///
    /// # Returns
    ///
    /// A new source with the element updated, or the original source
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused element if present.
    ///
    /// If the focus is absent, returns the original source unchanged.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get_option(&source).map(Cow::into_owned);
        match current {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Modifies the focused element if present, reporting absence as `None`.
    ///
    /// # Returns
    ///
    /// `Some(new_source)` if the element was present, `None` otherwise
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get_option(&source)?.into_owned();
        Some(self.set(source, function(current)))
    }

    /// Returns `true` if the focused element is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes this optional with another optional.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self, other)
    }

    /// Same as [`Optional::compose`], named like the other kinds' `compose_optional`
    /// so a path can chain optionals after lenses without switching method names.
    fn compose_optional<B, O>(self, optional: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self, optional)
    }

    /// Composes this optional with a lens on the focused element.
    fn compose_lens<B, L>(self, lens: L) -> ComposedOptional<Self, LensAsOptional<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self, lens.to_optional())
    }

    /// Composes this optional with a prism on the focused element.
    fn compose_prism<B, P>(self, prism: P) -> ComposedOptional<Self, PrismAsOptional<P, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self, prism.to_optional())
    }

    /// Composes this optional with an iso applied to the focused element.
    fn compose_iso<B, I>(
        self,
        iso: I,
    ) -> ComposedOptional<Self, LensAsOptional<IsoAsLens<I, A, B>, A, B>, A>
    where
        Self: Sized,
        I: Iso<A, B>,
        B: Clone,
    {
        ComposedOptional::new(self, iso.to_lens().to_optional())
    }

    /// Composes this optional with a traversal. The result is a [`Traversal`].
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<OptionalAsTraversal<Self, S, A>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
        B: Clone,
    {
        ComposedTraversal::new(self.to_traversal(), traversal)
    }

    /// Converts this optional to a traversal over zero or one element.
    fn to_traversal(self) -> OptionalAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self)
    }
}

// =============================================================================
// FunctionOptional
// =============================================================================

/// An optional implemented using a getter and a setter function.
///
/// The getter computes the focus, so it is always handed out as
/// [`Cow::Owned`]. The setter only runs when the getter finds a focus.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionOptional`.
    ///
    /// # Arguments
    ///
    /// * `getter` - Computes the focus, or `None` if it is absent
    /// * `setter` - Writes a new focus into a source where it is present
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    A: Clone,
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<Cow<'a, A>> {
        (self.getter)(source).map(Cow::Owned)
    }

    fn set(&self, source: S, value: A) -> S {
        if (self.getter)(&source).is_some() {
            (self.setter)(source, value)
        } else {
            source
        }
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = (self.getter)(&source);
        match current {
            Some(value) => (self.setter)(source, function(value)),
            None => source,
        }
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
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

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ComposedOptional
// =============================================================================

/// An optional composed of two optionals.
///
/// The focus is present only when both levels are present. Every mixed
/// composition that weakens to an optional (lens with prism, prism with
/// lens, optional with anything but a traversal) is built from this type
/// and the `*AsOptional` adapters.
///
/// # Type Parameters
///
/// - `O1`: The outer optional
/// - `O2`: The inner optional
/// - `A`: The intermediate type
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new composed optional.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
    A: Clone + 'static,
    B: Clone,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<Cow<'a, B>> {
        match self.first.get_option(source)? {
            Cow::Borrowed(intermediate) => self.second.get_option(intermediate),
            Cow::Owned(intermediate) => {
                let focus = self.second.get_option(&intermediate)?.into_owned();
                Some(Cow::Owned(focus))
            }
        }
    }

    fn set(&self, source: S, value: B) -> S {
        let current = self.first.get_option(&source).map(Cow::into_owned);
        let Some(intermediate) = current else {
            return source;
        };
        match self.second.modify_option(intermediate, |_| value) {
            Some(updated) => self.first.set(source, updated),
            None => source,
        }
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(B) -> B,
    {
        let current = self.first.get_option(&source).map(Cow::into_owned);
        let Some(intermediate) = current else {
            return source;
        };
        match self.second.modify_option(intermediate, function) {
            Some(updated) => self.first.set(source, updated),
            None => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// =============================================================================
// Optional implementations for lens and prism adapters
// =============================================================================

impl<L, S, A> Optional<S, A> for LensAsOptional<L, S, A>
where
    L: Lens<S, A>,
    A: Clone,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<Cow<'a, A>> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.lens.modify(source, function)
    }
}

impl<P, S, A> Optional<S, A> for PrismAsOptional<P, S, A>
where
    P: Prism<S, A>,
    A: Clone,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<Cow<'a, A>> {
        self.prism.preview(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.prism.set(source, value)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.prism.modify(source, function)
    }
}

// =============================================================================
// OptionalAsTraversal
// =============================================================================

/// An optional converted to a traversal.
///
/// Yields one element when the focus is present and none otherwise.
pub struct OptionalAsTraversal<O, S, A> {
    pub(crate) optional: O,
    _marker: PhantomData<(S, A)>,
}

impl<O, S, A> OptionalAsTraversal<O, S, A> {
    /// Creates a new `OptionalAsTraversal` from an optional.
    #[must_use]
    pub const fn new(optional: O) -> Self {
        Self {
            optional,
            _marker: PhantomData,
        }
    }
}

impl<O: Clone, S, A> Clone for OptionalAsTraversal<O, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.optional.clone())
    }
}

impl<O: std::fmt::Debug, S, A> std::fmt::Debug for OptionalAsTraversal<O, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionalAsTraversal")
            .field("optional", &self.optional)
            .finish()
    }
}
