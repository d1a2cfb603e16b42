//! Entity model
//!
//! - `types`: `Entity` trait, `Diet`, base `Animal`
//! - `human`: the user-supplied profile
//! - `dinosaur`: validated dinosaur records

pub mod types;
pub mod human;
pub mod dinosaur;

pub use types::{make_animal, Animal, AnimalAttributes, Diet, Entity, RawRecord};
pub use human::{make_human, Human, HumanAttributes, HumanForm};
pub use dinosaur::{make_dinosaur, Dinosaur, REQUIRED_FIELDS};
