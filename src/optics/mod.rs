//! Optics for reading and updating nested immutable data.
//!
//! This module provides optics - composable, stateless accessors that
//! focus on part of a larger value. Updates consume the source and return
//! a new one; records that keep their children behind `Arc` share every
//! subtree the update did not touch.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens
//! Iso <: Prism
//! Lens <: Optional
//! Prism <: Optional
//! Optional <: Traversal
//! ```
//!
//! Composing two optics yields the weaker of the two kinds:
//!
//! | outer \ inner | Lens | Prism | Optional | Traversal | Iso |
//! |---|---|---|---|---|---|
//! | Lens | Lens | Optional | Optional | Traversal | Lens |
//! | Prism | Optional | Prism | Optional | Traversal | Prism |
//! | Optional | Optional | Optional | Optional | Traversal | Optional |
//! | Traversal | Traversal | Traversal | Traversal | Traversal | Traversal |
//! | Iso | Lens | Prism | Optional | Traversal | Iso |
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Prism`]: Focus on a variant of an enum (preview/review access)
//! - [`Optional`]: Focus on a value that may or may not exist
//! - [`Traversal`]: Focus on zero or more elements
//! - [`Iso`]: Lossless conversion between two representations
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use optica::optics::{Lens, Optional, some};
//! use optica::Lenses;
//!
//! #[derive(Clone, PartialEq, Debug, Lenses)]
//! struct Street { name: String, optional_name: Option<String> }
//!
//! #[derive(Clone, PartialEq, Debug, Lenses)]
//! struct Address { city: String, street: Arc<Street> }
//!
//! let address = Address {
//!     city: "oxford".to_string(),
//!     street: Arc::new(Street { name: "high street".to_string(), optional_name: None }),
//! };
//!
//! let street_name = Address::street_lens().compose(Street::name_lens());
//! let renamed = street_name.set(address.clone(), "broad street".to_string());
//! assert_eq!(renamed.street.name, "broad street");
//! assert_eq!(address.street.name, "high street");
//!
//! let nickname = Address::street_lens()
//!     .compose(Street::optional_name_lens())
//!     .compose_prism(some());
//! assert!(nickname.get_option(&address).is_none());
//! assert_eq!(nickname.set(address.clone(), "the high".to_string()), address);
//! ```

pub mod filtered;
mod iso;
mod lens;
mod optional;
mod prism;
mod standard_optics;
mod traversal;

pub use filtered::{FilteredTraversal, filtered};
pub use iso::{ComposedIso, FunctionIso, Iso, IsoAsLens, IsoAsPrism, ReversedIso};
pub use lens::{ComposedLens, FunctionLens, Lens, LensAsOptional, LensAsTraversal};
pub use optional::{ComposedOptional, FunctionOptional, Optional, OptionalAsTraversal};
pub use prism::{
    ComposedPrism, ComputedPrism, FunctionPrism, Prism, PrismAsOptional, PrismAsTraversal,
};
pub use standard_optics::{
    SharedLens, SomePrism, VecIndex, each, index, iso_identity, shared, some,
};
pub use traversal::{ComposedTraversal, OptionTraversal, Traversal, VecTraversal};
