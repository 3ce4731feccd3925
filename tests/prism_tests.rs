//! Unit tests for Prism optics.
//!
//! Tests cover:
//! - Basic preview and review operations
//! - set, modify and modify_option on a matching and a mismatching variant
//! - Prism composition with prisms, lenses and optionals
//! - prism! macro and prisms generated by `#[derive(Prisms)]`

mod common;

use common::{Animal, Species, Street, denver, john, leo};
use optica::optics::{ComputedPrism, FunctionPrism, Lens, Optional, Prism, Traversal, some};
use optica::{lens, prism};
use rstest::rstest;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Circle {
    radius: f64,
}

#[derive(Clone, PartialEq, Debug)]
enum Shape {
    Circle(Circle),
    Rectangle(f64, f64),
}

#[derive(Clone, PartialEq, Debug)]
enum Outer {
    Inner(Inner),
    Empty,
}

#[derive(Clone, PartialEq, Debug)]
enum Inner {
    Value(i32),
    Nothing,
}

fn circle_prism() -> impl Prism<Shape, Circle> + Clone {
    FunctionPrism::new(
        |shape: &Shape| match shape {
            Shape::Circle(circle) => Some(circle),
            Shape::Rectangle(..) => None,
        },
        Shape::Circle,
    )
}

fn rectangle_prism() -> impl Prism<Shape, (f64, f64)> + Clone {
    ComputedPrism::new(
        |shape: &Shape| match shape {
            Shape::Rectangle(width, height) => Some((*width, *height)),
            Shape::Circle(_) => None,
        },
        |(width, height): (f64, f64)| Shape::Rectangle(width, height),
    )
}

fn unit_circle() -> Shape {
    Shape::Circle(Circle { radius: 1.0 })
}

// =============================================================================
// Preview and review
// =============================================================================

#[rstest]
#[case(unit_circle(), true)]
#[case(Shape::Rectangle(2.0, 3.0), false)]
fn test_circle_prism_is_match(#[case] shape: Shape, #[case] expected: bool) {
    assert_eq!(circle_prism().is_match(&shape), expected);
}

#[test]
fn test_preview_borrows_matching_value() {
    let shape = unit_circle();
    let preview = circle_prism().preview(&shape);
    assert_eq!(preview.as_deref(), Some(&Circle { radius: 1.0 }));
}

#[test]
fn test_review_builds_variant() {
    assert_eq!(
        rectangle_prism().review((4.0, 5.0)),
        Shape::Rectangle(4.0, 5.0)
    );
}

#[test]
fn test_computed_prism_preview() {
    let preview = rectangle_prism().preview(&Shape::Rectangle(2.0, 3.0));
    assert_eq!(preview.as_deref(), Some(&(2.0, 3.0)));
    assert!(rectangle_prism().preview(&unit_circle()).is_none());
}

// =============================================================================
// set / modify / modify_option
// =============================================================================

#[test]
fn test_set_on_matching_variant_replaces_value() {
    let updated = circle_prism().set(unit_circle(), Circle { radius: 2.0 });
    assert_eq!(updated, Shape::Circle(Circle { radius: 2.0 }));
}

#[test]
fn test_set_on_mismatching_variant_is_noop() {
    let rectangle = Shape::Rectangle(2.0, 3.0);
    let updated = circle_prism().set(rectangle.clone(), Circle { radius: 2.0 });
    assert_eq!(updated, rectangle);
}

#[test]
fn test_modify_on_matching_variant() {
    let updated = rectangle_prism().modify(Shape::Rectangle(2.0, 3.0), |(width, height)| {
        (height, width)
    });
    assert_eq!(updated, Shape::Rectangle(3.0, 2.0));
}

#[test]
fn test_modify_on_mismatching_variant_is_noop() {
    let updated = rectangle_prism().modify(unit_circle(), |(width, height)| (height, width));
    assert_eq!(updated, unit_circle());
}

#[test]
fn test_modify_option_reports_mismatch() {
    assert!(rectangle_prism()
        .modify_option(unit_circle(), |size| size)
        .is_none());
    assert_eq!(
        rectangle_prism().modify_option(Shape::Rectangle(1.0, 1.0), |(width, _)| (width, 9.0)),
        Some(Shape::Rectangle(1.0, 9.0))
    );
}

// =============================================================================
// prism! macro
// =============================================================================

#[test]
fn test_prism_macro_nested_composition() {
    let inner = prism!(Outer, Inner);
    let value = prism!(Inner, Value);
    let composed = inner.compose(value);

    let source = Outer::Inner(Inner::Value(42));
    assert_eq!(composed.preview(&source).as_deref(), Some(&42));
    assert_eq!(composed.review(7), Outer::Inner(Inner::Value(7)));
    assert!(composed.preview(&Outer::Inner(Inner::Nothing)).is_none());
    assert!(composed.preview(&Outer::Empty).is_none());
}

#[test]
fn test_composed_prism_modify_on_inner_mismatch_is_noop() {
    let composed = prism!(Outer, Inner).compose(prism!(Inner, Value));
    let source = Outer::Inner(Inner::Nothing);
    assert_eq!(composed.modify(source.clone(), |value| value + 1), source);
}

// =============================================================================
// Composition with other optic kinds
// =============================================================================

#[test]
fn test_prism_then_lens_is_optional() {
    let radius = circle_prism().compose_lens(lens!(Circle, radius));

    assert_eq!(radius.get_option(&unit_circle()).as_deref(), Some(&1.0));
    assert!(radius.get_option(&Shape::Rectangle(1.0, 2.0)).is_none());
    assert_eq!(
        radius.modify(unit_circle(), |value| value * 3.0),
        Shape::Circle(Circle { radius: 3.0 })
    );
}

#[test]
fn test_lens_then_some_on_absent_street_name() {
    let optional_name = Street::optional_name_lens().compose_prism(some());
    let street = john().company.address.street.as_ref().clone();

    assert!(optional_name.get_option(&street).is_none());
    assert_eq!(
        optional_name.set(street.clone(), "main".to_string()),
        street
    );
}

#[test]
fn test_lens_then_derived_prism() {
    let species_name = Animal::species_lens().compose_prism(Species::other_prism());

    assert_eq!(
        species_name.get_option(&leo()).as_deref(),
        Some(&"lion".to_string())
    );
    assert!(species_name.get_option(&denver()).is_none());
}

#[test]
fn test_derived_unit_variant_prism() {
    let dinosaur = Species::dinosaur_prism();

    assert!(dinosaur.is_match(&denver().species));
    assert!(!dinosaur.is_match(&leo().species));
    assert_eq!(dinosaur.review(()), Species::Dinosaur);
}

#[test]
fn test_prism_as_traversal_counts_matches() {
    let circles = prism!(Shape, Circle).to_traversal();

    assert_eq!(circles.length(&unit_circle()), 1);
    assert_eq!(circles.length(&Shape::Rectangle(1.0, 1.0)), 0);
}

#[test]
fn test_lens_traversal_lens_prism_chain() {
    let friend_species = Animal::friends_lens()
        .compose_traversal(optica::optics::each())
        .compose_lens(optica::optics::shared())
        .compose_lens(Animal::species_lens())
        .compose_prism(Species::other_prism());

    assert_eq!(
        friend_species.to_vec(&leo()),
        vec![
            "elephant".to_string(),
            "giraffe".to_string(),
            "hippo".to_string()
        ]
    );
    assert_eq!(friend_species.length(&denver()), 0);
}
