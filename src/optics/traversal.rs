//! Traversal optics for focusing on zero or more elements.
//!
//! A Traversal is an optic that can focus on multiple elements within a
//! structure at once. It generalizes both Lens (exactly one) and Optional
//! (zero or one).
//!
//! # Laws
//!
//! 1. **Identity Law**: Modifying with identity yields the original.
//!    ```text
//!    traversal.modify_all(source, |x| x) == source
//!    ```
//!
//! 2. **Composition Law**: Two modifications equal one composed modification.
//!    ```text
//!    traversal.modify_all(traversal.modify_all(source, f), g)
//!        == traversal.modify_all(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Traversal, VecTraversal};
//!
//! let traversal: VecTraversal<String> = VecTraversal::new();
//!
//! let names = vec!["A0".to_string(), "A1".to_string(), "A2".to_string()];
//! let reversed = traversal.modify_all(names, |name| name.chars().rev().collect());
//!
//! assert_eq!(reversed, vec!["0A", "1A", "2A"]);
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;

use super::filtered::FilteredTraversal;
use super::iso::{Iso, IsoAsLens};
use super::lens::{Lens, LensAsTraversal};
use super::optional::{Optional, OptionalAsTraversal};
use super::prism::{Prism, PrismAsTraversal};

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused elements)
///
/// # Laws
///
/// 1. **Identity Law**: `traversal.modify_all(source, |x| x) == source`
/// 2. **Composition Law**: `traversal.modify_all(traversal.modify_all(source, f), g) == traversal.modify_all(source, |x| g(f(x)))`
pub trait Traversal<S, A: Clone> {
    /// Gets an iterator over all focused elements.
    ///
    /// Elements stored in the source are borrowed; computed elements are owned.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// An iterator over the focused elements
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = Cow<'a, A>> + 'a>;

    /// Modifies all focused elements by applying a function.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `function` - The function to apply to each element
    ///
    /// # Returns
    ///
    /// A new source with all focused elements modified
    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Sets every focused element to the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Traversal, VecTraversal};
    ///
    /// let traversal: VecTraversal<String> = VecTraversal::new();
    /// let names = vec!["A0".to_string(), "A1".to_string()];
    ///
    /// assert_eq!(traversal.set_all(names, "John".to_string()), vec!["John", "John"]);
    /// ```
    fn set_all(&self, source: S, value: A) -> S {
        self.modify_all(source, |_| value.clone())
    }

    /// Modifies only the foci satisfying `predicate`.
    ///
    /// A source with no matching focus is returned as is, so composed
    /// traversals hand back every branch without a match untouched and its
    /// `Arc`s stay shared with the source.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Traversal, VecTraversal};
    ///
    /// let traversal: VecTraversal<i32> = VecTraversal::new();
    ///
    /// let updated = traversal.modify_matching(vec![1, 2, 3, 4], |value| value % 2 == 0, |value| value * 10);
    /// assert_eq!(updated, vec![1, 20, 3, 40]);
    /// ```
    fn modify_matching<P, F>(&self, source: S, predicate: P, mut function: F) -> S
    where
        P: Fn(&A) -> bool,
        F: FnMut(A) -> A,
    {
        if !self.exists(&source, &predicate) {
            return source;
        }
        self.modify_all(source, |focus| {
            if predicate(&focus) {
                function(focus)
            } else {
                focus
            }
        })
    }

    /// Folds over all focused elements.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    /// * `initial` - The initial accumulator value
    /// * `function` - The folding function
    ///
    /// # Returns
    ///
    /// The final accumulated value
    fn fold<B, F>(&self, source: &S, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.get_all(source)
            .fold(initial, |accumulator, element| function(accumulator, &*element))
    }

    /// Returns the number of focused elements.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).count()
    }

    /// Returns `true` if all focused elements satisfy the predicate.
    ///
    /// Vacuously `true` when there are no foci.
    fn for_all<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).all(|element| predicate(&*element))
    }

    /// Returns `true` if any focused element satisfies the predicate.
    fn exists<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).any(|element| predicate(&*element))
    }

    /// Returns the first focused element, if any.
    fn head_option<'a>(&self, source: &'a S) -> Option<Cow<'a, A>> {
        self.get_all(source).next()
    }

    /// Collects every focused element into a `Vec`.
    fn to_vec(&self, source: &S) -> Vec<A> {
        self.get_all(source).map(Cow::into_owned).collect()
    }

    /// Restricts this traversal to the foci matching a predicate.
    ///
    /// Non-matching foci are skipped by reads and left in place by updates.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Traversal, VecTraversal};
    ///
    /// let names = vec!["A0".to_string(), "A1".to_string(), "A2".to_string()];
    /// let only_a2 = VecTraversal::new().filter(|name: &String| name == "A2");
    ///
    /// let renamed = only_a2.modify_all(names, |name| name + "Renamed");
    /// assert_eq!(renamed, vec!["A0", "A1", "A2Renamed"]);
    /// ```
    fn filter<P>(self, predicate: P) -> FilteredTraversal<Self, P, A>
    where
        Self: Sized,
        P: Fn(&A) -> bool,
    {
        FilteredTraversal::new(self, predicate)
    }

    /// Composes this traversal with another traversal.
    ///
    /// Every focus of the inner traversal inside every focus of the outer
    /// traversal is visited, outer order first.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
        B: Clone,
    {
        ComposedTraversal::new(self, other)
    }

    /// Composes this traversal with a lens applied to each focus.
    fn compose_lens<B, L>(self, lens: L) -> ComposedTraversal<Self, LensAsTraversal<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
        B: Clone,
    {
        ComposedTraversal::new(self, lens.to_traversal())
    }

    /// Composes this traversal with a prism applied to each focus.
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> ComposedTraversal<Self, PrismAsTraversal<P, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
        B: Clone,
    {
        ComposedTraversal::new(self, prism.to_traversal())
    }

    /// Composes this traversal with an optional applied to each focus.
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedTraversal<Self, OptionalAsTraversal<O, A, B>, A>
    where
        Self: Sized,
        O: Optional<A, B>,
        B: Clone,
    {
        ComposedTraversal::new(self, optional.to_traversal())
    }

    /// Composes this traversal with an iso applied to each focus.
    fn compose_iso<B, I>(
        self,
        iso: I,
    ) -> ComposedTraversal<Self, LensAsTraversal<IsoAsLens<I, A, B>, A, B>, A>
    where
        Self: Sized,
        I: Iso<A, B>,
        B: Clone,
    {
        ComposedTraversal::new(self, iso.to_lens().to_traversal())
    }
}

// =============================================================================
// VecTraversal - Traversal for Vec<A>
// =============================================================================

/// A Traversal that focuses on every element of a `Vec`.
///
/// # Example
///
/// ```
/// use optica::optics::{Traversal, VecTraversal};
///
/// let traversal: VecTraversal<i32> = VecTraversal::new();
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(traversal.length(&numbers), 3);
/// assert_eq!(traversal.modify_all(numbers, |x| x * 10), vec![10, 20, 30]);
/// ```
pub struct VecTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> VecTraversal<A> {
    /// Creates a new `VecTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for VecTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for VecTraversal<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}

impl<A: Clone + 'static> Traversal<Vec<A>, A> for VecTraversal<A> {
    fn get_all<'a>(&self, source: &'a Vec<A>) -> Box<dyn Iterator<Item = Cow<'a, A>> + 'a> {
        Box::new(source.iter().map(Cow::Borrowed))
    }

    fn modify_all<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }

    fn length(&self, source: &Vec<A>) -> usize {
        source.len()
    }
}

// =============================================================================
// OptionTraversal - Traversal for Option<A>
// =============================================================================

/// A Traversal that focuses on the element of an `Option` (zero or one element).
///
/// # Example
///
/// ```
/// use optica::optics::{Traversal, OptionTraversal};
///
/// let traversal: OptionTraversal<i32> = OptionTraversal::new();
///
/// assert_eq!(traversal.modify_all(Some(42), |x| x * 2), Some(84));
/// assert_eq!(traversal.modify_all(None, |x| x * 2), None);
/// ```
pub struct OptionTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> OptionTraversal<A> {
    /// Creates a new `OptionTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for OptionTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for OptionTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for OptionTraversal<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("OptionTraversal").finish()
    }
}

impl<A: Clone + 'static> Traversal<Option<A>, A> for OptionTraversal<A> {
    fn get_all<'a>(&self, source: &'a Option<A>) -> Box<dyn Iterator<Item = Cow<'a, A>> + 'a> {
        Box::new(source.iter().map(Cow::Borrowed))
    }

    fn modify_all<F>(&self, source: Option<A>, function: F) -> Option<A>
    where
        F: FnMut(A) -> A,
    {
        source.map(function)
    }
}

// =============================================================================
// ComposedTraversal
// =============================================================================

/// A traversal composed of two traversals.
///
/// Also the result of composing a traversal with any other optic kind, and
/// of composing any optic kind with a traversal.
///
/// # Type Parameters
///
/// - `T1`: The outer traversal
/// - `T2`: The inner traversal
/// - `A`: The intermediate type
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new composed traversal.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug for ComposedTraversal<T1, T2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B> + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = Cow<'a, B>> + 'a> {
        let second = self.second.clone();
        Box::new(self.first.get_all(source).flat_map(
            move |intermediate| -> Box<dyn Iterator<Item = Cow<'a, B>> + 'a> {
                match intermediate {
                    Cow::Borrowed(intermediate) => second.get_all(intermediate),
                    Cow::Owned(intermediate) => {
                        let foci: Vec<Cow<'a, B>> = second
                            .get_all(&intermediate)
                            .map(|focus| Cow::Owned(focus.into_owned()))
                            .collect();
                        Box::new(foci.into_iter())
                    }
                }
            },
        ))
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        <Self as Traversal<S, B>>::modify_matching(self, source, |_: &B| true, function)
    }

    // Intermediates with no matching focus are passed through untouched.
    fn modify_matching<P, F>(&self, source: S, predicate: P, mut function: F) -> S
    where
        P: Fn(&B) -> bool,
        F: FnMut(B) -> B,
    {
        self.first.modify_matching(
            source,
            |intermediate: &A| self.second.exists(intermediate, &predicate),
            |intermediate| self.second.modify_matching(intermediate, &predicate, &mut function),
        )
    }
}

// =============================================================================
// Traversal implementations for the single-focus adapters
// =============================================================================

impl<L, S, A> Traversal<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
    A: Clone,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = Cow<'a, A>> + 'a> {
        Box::new(std::iter::once(self.lens.get(source)))
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.lens.modify(source, function)
    }

    fn length(&self, _source: &S) -> usize {
        1
    }
}

impl<P, S, A> Traversal<S, A> for PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
    A: Clone,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = Cow<'a, A>> + 'a> {
        Box::new(self.prism.preview(source).into_iter())
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.prism.modify(source, function)
    }
}

impl<O, S, A> Traversal<S, A> for OptionalAsTraversal<O, S, A>
where
    O: Optional<S, A>,
    A: Clone,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = Cow<'a, A>> + 'a> {
        Box::new(self.optional.get_option(source).into_iter())
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.optional.modify(source, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;

    #[derive(Clone, PartialEq, Debug)]
    struct Animal {
        name: String,
        friends: Vec<Animal>,
    }

    fn animal(name: &str) -> Animal {
        Animal {
            name: name.to_string(),
            friends: Vec::new(),
        }
    }

    fn leo() -> Animal {
        Animal {
            name: "Leo".to_string(),
            friends: vec![animal("A0"), animal("A1"), animal("A2")],
        }
    }

    #[test]
    fn test_vec_traversal_get_all() {
        let traversal: VecTraversal<i32> = VecTraversal::new();
        let values: Vec<i32> = traversal.get_all(&vec![1, 2, 3]).map(|value| *value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_traversal_fold() {
        let traversal: VecTraversal<i32> = VecTraversal::new();
        assert_eq!(traversal.fold(&vec![1, 2, 3, 4], 0, |sum, x| sum + x), 10);
    }

    #[test]
    fn test_traversal_for_all_on_empty_is_true() {
        let traversal: VecTraversal<i32> = VecTraversal::new();
        assert!(traversal.for_all(&Vec::new(), |x| *x > 100));
        assert!(!traversal.exists(&Vec::new(), |x| *x > 100));
    }

    #[test]
    fn test_traversal_head_option() {
        let traversal: VecTraversal<i32> = VecTraversal::new();
        assert_eq!(traversal.head_option(&vec![7, 8]).as_deref(), Some(&7));
        assert!(traversal.head_option(&Vec::new()).is_none());
    }

    #[test]
    fn test_lens_then_traversal_then_lens() {
        let friend_names = lens!(Animal, friends)
            .compose_traversal(VecTraversal::new())
            .compose_lens(lens!(Animal, name));

        let names = friend_names.to_vec(&leo());
        assert_eq!(names, vec!["A0", "A1", "A2"]);

        let reversed = friend_names.modify_all(leo(), |name| name.chars().rev().collect());
        assert_eq!(friend_names.to_vec(&reversed), vec!["0A", "1A", "2A"]);
        assert_eq!(reversed.name, "Leo");
    }

    #[test]
    fn test_composed_traversal_over_no_foci_returns_source() {
        let friend_names = lens!(Animal, friends)
            .compose_traversal(VecTraversal::new())
            .compose_lens(lens!(Animal, name));

        let loner = animal("Casey");
        assert_eq!(friend_names.set_all(loner.clone(), "X".to_string()), loner);
    }

    #[test]
    fn test_option_traversal_length() {
        let traversal: OptionTraversal<String> = OptionTraversal::new();
        assert_eq!(traversal.length(&Some("Rocky".to_string())), 1);
        assert_eq!(traversal.length(&None), 0);
    }
}
