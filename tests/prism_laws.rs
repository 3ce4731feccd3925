//! Property-based tests for Prism laws.
//!
//! This module verifies that prism implementations satisfy the required laws:
//!
//! - **PreviewReview Law**: `prism.preview(&prism.review(value)) == Some(value)`
//! - **ReviewPreview Law**: if `prism.preview(&source) == Some(value)`,
//!   then `prism.review(value) == source`
//! - **Mismatch Law**: `set` and `modify` leave a non-matching source unchanged

mod common;

use common::Species;
use optica::optics::{Prism, some};
use optica::prism;
use proptest::prelude::*;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Contact {
    Email(String),
    Phone(u64),
    Unlisted,
}

fn contact_strategy() -> impl Strategy<Value = Contact> {
    prop_oneof![
        "[a-z]{1,8}@[a-z]{1,8}".prop_map(Contact::Email),
        any::<u64>().prop_map(Contact::Phone),
        Just(Contact::Unlisted),
    ]
}

fn species_strategy() -> impl Strategy<Value = Species> {
    prop_oneof![
        Just(Species::Human),
        Just(Species::Dog),
        Just(Species::Dinosaur),
        "[a-z]{1,10}".prop_map(Species::Other),
    ]
}

// =============================================================================
// Laws for a hand-written prism
// =============================================================================

proptest! {
    #[test]
    fn prop_email_preview_review_law(address in "[a-z]{1,8}@[a-z]{1,8}") {
        let email = prism!(Contact, Email);
        let contact = email.review(address.clone());
        prop_assert_eq!(email.preview(&contact).map(|value| value.into_owned()), Some(address));
    }

    #[test]
    fn prop_email_review_preview_law(contact in contact_strategy()) {
        let email = prism!(Contact, Email);
        if let Some(value) = email.preview(&contact) {
            prop_assert_eq!(email.review(value.into_owned()), contact.clone());
        }
    }

    #[test]
    fn prop_phone_mismatch_law(contact in contact_strategy(), number in any::<u64>()) {
        let phone = prism!(Contact, Phone);
        prop_assume!(!phone.is_match(&contact));
        prop_assert_eq!(phone.set(contact.clone(), number), contact.clone());
        prop_assert_eq!(phone.modify(contact.clone(), |value| value.wrapping_add(1)), contact);
    }
}

// =============================================================================
// Laws for derived prisms
// =============================================================================

proptest! {
    #[test]
    fn prop_derived_other_preview_review_law(name in "[a-z]{1,10}") {
        let other = Species::other_prism();
        let species = other.review(name.clone());
        prop_assert_eq!(other.preview(&species).map(|value| value.into_owned()), Some(name));
    }

    #[test]
    fn prop_derived_other_review_preview_law(species in species_strategy()) {
        let other = Species::other_prism();
        if let Some(value) = other.preview(&species) {
            prop_assert_eq!(other.review(value.into_owned()), species.clone());
        }
    }

    #[test]
    fn prop_derived_unit_review_preview_law(species in species_strategy()) {
        let dog = Species::dog_prism();
        if dog.preview(&species).is_some() {
            prop_assert_eq!(dog.review(()), species);
        }
    }

    #[test]
    fn prop_derived_other_mismatch_law(species in species_strategy(), name in "[a-z]{1,10}") {
        let other = Species::other_prism();
        prop_assume!(!other.is_match(&species));
        prop_assert_eq!(other.set(species.clone(), name), species);
    }
}

// =============================================================================
// Laws for composed prisms
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_preview_review_law(address in "[a-z]{1,8}@[a-z]{1,8}") {
        let nested = some::<Contact>().compose(prism!(Contact, Email));
        let source = nested.review(address.clone());
        prop_assert_eq!(source.clone(), Some(Contact::Email(address.clone())));
        prop_assert_eq!(nested.preview(&source).map(|value| value.into_owned()), Some(address));
    }

    #[test]
    fn prop_composed_review_preview_law(contact in proptest::option::of(contact_strategy())) {
        let nested = some::<Contact>().compose(prism!(Contact, Email));
        if let Some(value) = nested.preview(&contact) {
            prop_assert_eq!(nested.review(value.into_owned()), contact.clone());
        }
    }
}
