//! Standard optics that are commonly used.
//!
//! This module provides ready-made optics for the std types that show up
//! in nested records:
//!
//! - [`some`]: the present branch of an `Option<A>`
//! - [`shared`]: the value behind an `Arc<T>`
//! - [`index`]: one element of a `Vec<A>`
//! - [`each`]: every element of a `Vec<A>`
//! - [`iso_identity`]: the do-nothing conversion

use std::borrow::Cow;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{FunctionIso, Iso, Lens, Optional, Prism, VecTraversal};

// =============================================================================
// some
// =============================================================================

/// A Prism focusing on the value inside `Some`.
///
/// See [`some`].
pub struct SomePrism<A> {
    _marker: PhantomData<A>,
}

impl<A> SomePrism<A> {
    /// Creates a new `SomePrism`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for SomePrism<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for SomePrism<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for SomePrism<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("SomePrism").finish()
    }
}

impl<A: Clone> Prism<Option<A>, A> for SomePrism<A> {
    fn preview<'a>(&self, source: &'a Option<A>) -> Option<Cow<'a, A>> {
        source.as_ref().map(Cow::Borrowed)
    }

    fn review(&self, value: A) -> Option<A> {
        Some(value)
    }

    fn modify<F>(&self, source: Option<A>, function: F) -> Option<A>
    where
        F: FnOnce(A) -> A,
    {
        source.map(function)
    }
}

/// Creates a Prism focusing on the value of an `Option<A>` when it is `Some`.
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, some};
///
/// let prism = some::<String>();
///
/// assert_eq!(prism.preview(&Some("Bray".to_string())).as_deref(), Some(&"Bray".to_string()));
/// assert!(prism.preview(&None).is_none());
/// assert_eq!(prism.review("Bray".to_string()), Some("Bray".to_string()));
/// ```
#[must_use]
pub const fn some<A>() -> SomePrism<A> {
    SomePrism::new()
}

// =============================================================================
// shared
// =============================================================================

/// A Lens focusing on the value behind an `Arc<T>`.
///
/// Reads borrow through the pointer. Writes allocate a fresh `Arc`, so any
/// other holder of the old pointer still sees the old value.
pub struct SharedLens<T> {
    _marker: PhantomData<T>,
}

impl<T> SharedLens<T> {
    /// Creates a new `SharedLens`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SharedLens<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedLens<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SharedLens<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("SharedLens").finish()
    }
}

impl<T: Clone> Lens<Arc<T>, T> for SharedLens<T> {
    fn get<'a>(&self, source: &'a Arc<T>) -> Cow<'a, T> {
        Cow::Borrowed(&**source)
    }

    fn set(&self, _source: Arc<T>, value: T) -> Arc<T> {
        Arc::new(value)
    }

    fn modify<F>(&self, source: Arc<T>, function: F) -> Arc<T>
    where
        F: FnOnce(T) -> T,
    {
        Arc::new(function(Arc::unwrap_or_clone(source)))
    }
}

/// Creates a Lens from an `Arc<T>` to the `T` it points at.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use optica::optics::{Lens, shared};
///
/// let postcode = Arc::new("RG12 1AA".to_string());
/// let lens = shared::<String>();
///
/// assert_eq!(*lens.get(&postcode), "RG12 1AA");
///
/// let moved = lens.set(Arc::clone(&postcode), "SL6 2AQ".to_string());
/// assert_eq!(*moved, "SL6 2AQ");
/// assert_eq!(*postcode, "RG12 1AA");
/// ```
#[must_use]
pub const fn shared<T>() -> SharedLens<T> {
    SharedLens::new()
}

// =============================================================================
// index
// =============================================================================

/// An Optional focusing on the element of a `Vec<A>` at a fixed position.
///
/// The focus is absent when the position is out of bounds.
pub struct VecIndex<A> {
    position: usize,
    _marker: PhantomData<A>,
}

impl<A> VecIndex<A> {
    /// Creates a new `VecIndex` for `position`.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self {
            position,
            _marker: PhantomData,
        }
    }

    /// Returns the position this optional focuses on.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<A> Clone for VecIndex<A> {
    fn clone(&self) -> Self {
        Self::new(self.position)
    }
}

impl<A> std::fmt::Debug for VecIndex<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("VecIndex")
            .field("position", &self.position)
            .finish()
    }
}

impl<A: Clone> Optional<Vec<A>, A> for VecIndex<A> {
    fn get_option<'a>(&self, source: &'a Vec<A>) -> Option<Cow<'a, A>> {
        source.get(self.position).map(Cow::Borrowed)
    }

    fn set(&self, mut source: Vec<A>, value: A) -> Vec<A> {
        if let Some(element) = source.get_mut(self.position) {
            *element = value;
        }
        source
    }

    fn modify<F>(&self, mut source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnOnce(A) -> A,
    {
        if let Some(element) = source.get_mut(self.position) {
            *element = function(element.clone());
        }
        source
    }
}

/// Creates an Optional focusing on the element at `position` of a `Vec<A>`.
///
/// # Example
///
/// ```
/// use optica::optics::{Optional, index};
///
/// let second = index::<&str>(1);
///
/// assert_eq!(second.get_option(&vec!["Jaz", "Elodie"]).as_deref(), Some(&"Elodie"));
/// assert!(second.get_option(&vec!["Jaz"]).is_none());
/// assert_eq!(second.set(vec!["Jaz"], "Fred"), vec!["Jaz"]);
/// ```
#[must_use]
pub const fn index<A>(position: usize) -> VecIndex<A> {
    VecIndex::new(position)
}

// =============================================================================
// each / iso_identity
// =============================================================================

/// Creates a Traversal over every element of a `Vec<A>`.
///
/// # Example
///
/// ```
/// use optica::optics::{Traversal, each};
///
/// let names = vec!["Wally".to_string(), "Fred".to_string()];
/// assert_eq!(each().length(&names), 2);
/// ```
#[must_use]
pub const fn each<A>() -> VecTraversal<A> {
    VecTraversal::new()
}

/// Creates an identity Iso that doesn't transform the value.
///
/// # Example
///
/// ```
/// use optica::optics::{Iso, iso_identity};
///
/// let identity = iso_identity::<String>();
///
/// assert_eq!(identity.get("Denver".to_string()), "Denver");
/// assert_eq!(identity.reverse_get("Denver".to_string()), "Denver");
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new(|value: T| value, |value: T| value)
}

static_assertions::assert_impl_all!(SomePrism<String>: Prism<Option<String>, String>, Clone, Send, Sync);
static_assertions::assert_impl_all!(SharedLens<String>: Lens<Arc<String>, String>, Clone, Send, Sync);
static_assertions::assert_impl_all!(VecIndex<String>: Optional<Vec<String>, String>, Clone, Send, Sync);
static_assertions::assert_impl_all!(VecTraversal<String>: Clone, Send, Sync);
