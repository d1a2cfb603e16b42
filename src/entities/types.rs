//! Shared attribute set for animal-like records.

use crate::error::InfographicError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Raw attribute map as supplied by the record collaborator.
///
/// A field counts as present only if its key is in the map itself.
pub type RawRecord = FxHashMap<String, Value>;

/// Dietary classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Diet {
    Herbivore,
    Carnivore,
    Omnivore,
}

impl Diet {
    pub fn label(&self) -> &'static str {
        match self {
            Diet::Herbivore => "herbivore",
            Diet::Carnivore => "carnivore",
            Diet::Omnivore => "omnivore",
        }
    }

    pub fn is_herbivore(&self) -> bool {
        *self == Diet::Herbivore
    }

    pub fn is_carnivore(&self) -> bool {
        *self == Diet::Carnivore
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Diet {
    type Err = InfographicError;

    /// Case-insensitive; also accepts the "herbavor"/"carnivor" spellings
    /// used by the reference record set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "herbivore" | "herbavor" => Ok(Diet::Herbivore),
            "carnivore" | "carnivor" => Ok(Diet::Carnivore),
            "omnivore" | "omnivor" => Ok(Diet::Omnivore),
            _ => Err(InfographicError::InvalidAttribute {
                field: "diet".to_string(),
                expected: "herbivore, carnivore or omnivore",
            }),
        }
    }
}

impl TryFrom<String> for Diet {
    type Error = InfographicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Any record exposing weight (lbs), height (inches) and diet.
///
/// Comparators accept any two entities, so humans and dinosaurs are
/// interchangeable on either side.
pub trait Entity {
    fn weight(&self) -> f64;
    fn height(&self) -> f64;
    fn diet(&self) -> Diet;
}

/// Typed input for [`make_animal`]: the attributes left after the
/// specialized fields have been split off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimalAttributes {
    pub weight: f64,
    pub height: f64,
    pub diet: Diet,
}

/// Immutable base entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animal {
    weight: f64,
    height: f64,
    diet: Diet,
}

impl Entity for Animal {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn diet(&self) -> Diet {
        self.diet
    }
}

/// Copy weight, height and diet into a new entity. No validation.
pub fn make_animal(attrs: AnimalAttributes) -> Animal {
    Animal {
        weight: attrs.weight,
        height: attrs.height,
        diet: attrs.diet,
    }
}
