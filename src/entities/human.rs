//! Human profile built from the comparison form.

use crate::entities::types::{make_animal, Animal, AnimalAttributes, Diet, Entity};
use serde::Serialize;

/// Attributes for [`make_human`]
#[derive(Debug, Clone, PartialEq)]
pub struct HumanAttributes {
    pub name: String,
    pub weight: f64,
    /// Height in inches
    pub height: f64,
    pub diet: Diet,
}

/// The human side of every comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Human {
    name: String,
    #[serde(flatten)]
    animal: Animal,
}

impl Human {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Human {
    fn weight(&self) -> f64 {
        self.animal.weight()
    }

    fn height(&self) -> f64 {
        self.animal.height()
    }

    fn diet(&self) -> Diet {
        self.animal.diet()
    }
}

/// Split off the name, build the base entity from the rest, then attach the name.
pub fn make_human(attrs: HumanAttributes) -> Human {
    let HumanAttributes {
        name,
        weight,
        height,
        diet,
    } = attrs;

    Human {
        name,
        animal: make_animal(AnimalAttributes {
            weight,
            height,
            diet,
        }),
    }
}

/// Raw values as entered on the comparison form.
///
/// Height arrives split into feet and inches; the core only deals in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanForm {
    pub name: String,
    pub feet: u32,
    pub inches: f64,
    pub weight: f64,
    pub diet: Diet,
}

impl HumanForm {
    pub fn height_inches(&self) -> f64 {
        self.inches + f64::from(self.feet) * 12.0
    }

    pub fn into_human(self) -> Human {
        let height = self.height_inches();
        make_human(HumanAttributes {
            name: self.name,
            weight: self.weight,
            height,
            diet: self.diet,
        })
    }
}
