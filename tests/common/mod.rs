//! Shared fixtures for the integration tests.
//!
//! Records keep their children behind `Arc`, so an update that copies a
//! parent leaves untouched children shared with the original.

#![allow(dead_code)]

use std::sync::Arc;

use optica::{Lenses, Prisms};

// =============================================================================
// Employee
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct Street {
    pub name: String,
    pub num: u32,
    pub optional_name: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct Address {
    pub city: String,
    pub street: Arc<Street>,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct Company {
    pub name: String,
    pub address: Arc<Address>,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct Employee {
    pub name: String,
    pub company: Arc<Company>,
}

pub fn employee(street_name: &str) -> Employee {
    Employee {
        name: "john".to_string(),
        company: Arc::new(Company {
            name: "new orbit".to_string(),
            address: Arc::new(Address {
                city: "oxford".to_string(),
                street: Arc::new(Street {
                    name: street_name.to_string(),
                    num: 12,
                    optional_name: None,
                }),
            }),
        }),
    }
}

pub fn john() -> Employee {
    employee("high street")
}

pub fn john_capitalized() -> Employee {
    employee("High street")
}

/// Upper-cases the first character of a string.
pub fn capitalize(value: String) -> String {
    let mut characters = value.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}

// =============================================================================
// Animal
// =============================================================================

#[derive(Clone, PartialEq, Debug, Prisms)]
pub enum Species {
    Human,
    Dog,
    Dinosaur,
    Other(String),
}

#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct Animal {
    pub name: String,
    pub species: Species,
    pub pets: Vec<Arc<Animal>>,
    pub friends: Vec<Arc<Animal>>,
    pub father: Option<Arc<Animal>>,
}

pub fn make_animal(name: &str, species: Species) -> Animal {
    Animal {
        name: name.to_string(),
        species,
        pets: Vec::new(),
        friends: Vec::new(),
        father: None,
    }
}

pub fn jaz() -> Arc<Animal> {
    Arc::new(make_animal("Jaz", Species::Human))
}

pub fn elodie() -> Arc<Animal> {
    Arc::new(make_animal("Elodie", Species::Human))
}

pub fn joanne() -> Animal {
    Animal {
        friends: vec![jaz(), elodie()],
        ..make_animal("Joanne", Species::Human)
    }
}

pub fn mikey() -> Arc<Animal> {
    Arc::new(make_animal("Mikey", Species::Dinosaur))
}

pub fn casey() -> Arc<Animal> {
    Arc::new(make_animal("Casey", Species::Human))
}

pub fn rocky() -> Arc<Animal> {
    Arc::new(make_animal("Rocky", Species::Dog))
}

pub fn wally() -> Arc<Animal> {
    Arc::new(Animal {
        pets: vec![rocky()],
        ..make_animal("Wally", Species::Human)
    })
}

pub fn fred() -> Arc<Animal> {
    Arc::new(make_animal("Fred", Species::Human))
}

pub fn denver() -> Animal {
    Animal {
        father: Some(mikey()),
        friends: vec![wally(), casey()],
        ..make_animal("Denver", Species::Dinosaur)
    }
}

pub fn leo() -> Animal {
    Animal {
        friends: vec![
            Arc::new(make_animal("A0", Species::Other("elephant".to_string()))),
            Arc::new(make_animal("A1", Species::Other("giraffe".to_string()))),
            Arc::new(make_animal("A2", Species::Other("hippo".to_string()))),
        ],
        ..make_animal("Leo", Species::Other("lion".to_string()))
    }
}

pub fn friend_names(animal: &Animal) -> Vec<&str> {
    animal
        .friends
        .iter()
        .map(|friend| friend.name.as_str())
        .collect()
}

// =============================================================================
// Restaurant
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct RestaurantAddress {
    pub street: String,
    pub city: String,
    pub postcode: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
pub struct Restaurant {
    pub name: Arc<String>,
    pub address: Arc<RestaurantAddress>,
}

pub fn restaurant(name: &str, street: &str, postcode: &str) -> Restaurant {
    Restaurant {
        name: Arc::new(name.to_string()),
        address: Arc::new(RestaurantAddress {
            street: street.to_string(),
            city: "Bray".to_string(),
            postcode: postcode.to_string(),
        }),
    }
}

pub fn fat_duck() -> Restaurant {
    restaurant("Fat Duck", "Some Street", "RG12 1AA")
}

pub fn waterside_inn() -> Restaurant {
    restaurant("Waterside Inn", "High Street", "RG12 2BB")
}
