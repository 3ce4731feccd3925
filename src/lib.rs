//! # optica
//!
//! Composable optics for reading and updating deeply nested immutable data.
//!
//! ## Overview
//!
//! An optic is a small, stateless value that knows how to reach one part
//! of a larger value. Optics compose, so a path through several levels of
//! records, enums and collections is built from one optic per level.
//!
//! - **Lens**: exactly one field that always exists
//! - **Prism**: one variant of an enum, which may not match
//! - **Optional**: a location that may be absent
//! - **Traversal**: zero or more locations at once
//! - **Iso**: a lossless conversion between two representations
//! - **Draft producer**: batch in-place edits on a scratch copy
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Lenses)]` and `#[derive(Prisms)]`
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use optica::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug, Lenses)]
//! struct Street { name: String, num: u32 }
//!
//! #[derive(Clone, PartialEq, Debug, Lenses)]
//! struct Address { city: String, street: Arc<Street> }
//!
//! #[derive(Clone, PartialEq, Debug, Lenses)]
//! struct Company { name: String, address: Arc<Address> }
//!
//! let company = Company {
//!     name: "awesome inc".to_string(),
//!     address: Arc::new(Address {
//!         city: "london".to_string(),
//!         street: Arc::new(Street { name: "high street".to_string(), num: 23 }),
//!     }),
//! };
//!
//! let street_name = lens_path!(Company::address, Address::street, Street::name);
//! let capitalised = street_name.modify(company.clone(), |name| name.to_uppercase());
//!
//! assert_eq!(capitalised.address.street.name, "HIGH STREET");
//! assert_eq!(company.address.street.name, "high street");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic traits, the standard optics, and the macros.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
    pub use crate::{iso, lens, lens_path, prism};

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, Prisms};
}

pub mod draft;
pub mod optics;

#[cfg(feature = "derive")]
pub use optica_derive::{Lenses, Prisms};

#[doc(hidden)]
pub use paste;
