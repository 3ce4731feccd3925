//! Filtered traversals for conditional element access.
//!
//! A [`FilteredTraversal`] wraps another traversal and only exposes the foci
//! that satisfy a predicate. Reads skip the other foci; updates leave them
//! where they are.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Traversal, filtered::filtered};
//!
//! let data = vec![1, 2, 3, 4, 5, 6];
//! let even_traversal = filtered(|x: &i32| x % 2 == 0);
//!
//! // Double only even numbers
//! let result = even_traversal.modify_all(data, |x| x * 2);
//! assert_eq!(result, vec![1, 4, 3, 8, 5, 12]);
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;

use super::traversal::{Traversal, VecTraversal};

/// A Traversal that only exposes the foci of an inner traversal satisfying a predicate.
///
/// Usually built with [`Traversal::filter`].
pub struct FilteredTraversal<T, P, A>
where
    P: Fn(&A) -> bool,
{
    traversal: T,
    predicate: P,
    _marker: PhantomData<A>,
}

impl<T, P, A> FilteredTraversal<T, P, A>
where
    P: Fn(&A) -> bool,
{
    /// Creates a new `FilteredTraversal` over `traversal` with the given predicate.
    #[must_use]
    pub const fn new(traversal: T, predicate: P) -> Self {
        Self {
            traversal,
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<T, P, A> Clone for FilteredTraversal<T, P, A>
where
    T: Clone,
    P: Fn(&A) -> bool + Clone,
{
    fn clone(&self) -> Self {
        Self {
            traversal: self.traversal.clone(),
            predicate: self.predicate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, P, A> std::fmt::Debug for FilteredTraversal<T, P, A>
where
    T: std::fmt::Debug,
    P: Fn(&A) -> bool,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FilteredTraversal")
            .field("traversal", &self.traversal)
            .finish_non_exhaustive()
    }
}

impl<S, A, T, P> Traversal<S, A> for FilteredTraversal<T, P, A>
where
    T: Traversal<S, A>,
    P: Fn(&A) -> bool + Clone + 'static,
    A: Clone + 'static,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = Cow<'a, A>> + 'a> {
        let predicate = self.predicate.clone();
        Box::new(
            self.traversal
                .get_all(source)
                .filter(move |element| predicate(&**element)),
        )
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.traversal
            .modify_matching(source, &self.predicate, function)
    }

    fn modify_matching<Q, F>(&self, source: S, predicate: Q, function: F) -> S
    where
        Q: Fn(&A) -> bool,
        F: FnMut(A) -> A,
    {
        self.traversal.modify_matching(
            source,
            |element: &A| (self.predicate)(element) && predicate(element),
            function,
        )
    }
}

/// Creates a `FilteredTraversal` over the elements of a `Vec<A>`.
#[must_use]
pub const fn filtered<A, P>(predicate: P) -> FilteredTraversal<VecTraversal<A>, P, A>
where
    P: Fn(&A) -> bool,
{
    FilteredTraversal::new(VecTraversal::new(), predicate)
}
