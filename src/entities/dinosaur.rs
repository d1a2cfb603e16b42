//! Dinosaur records
//!
//! Dinosaurs are built from raw attribute maps. Every required field must be
//! present as a key of the record; validation walks [`REQUIRED_FIELDS`] in
//! order and stops at the first gap.

use crate::entities::types::{make_animal, Animal, AnimalAttributes, Diet, Entity, RawRecord};
use crate::error::{InfographicError, Result};
use serde::Serialize;
use serde_json::Value;

/// Fields a raw record must carry, in validation order
pub const REQUIRED_FIELDS: [&str; 7] = ["species", "weight", "height", "diet", "where", "when", "fact"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dinosaur {
    species: String,
    #[serde(rename = "where")]
    location: String,
    #[serde(rename = "when")]
    era: String,
    fact: String,
    #[serde(flatten)]
    animal: Animal,
}

impl Dinosaur {
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Habitat description
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Era description
    pub fn era(&self) -> &str {
        &self.era
    }

    pub fn fact(&self) -> &str {
        &self.fact
    }
}

impl Entity for Dinosaur {
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

/// Build a dinosaur from a raw record.
///
/// Fails with `MissingAttribute` naming the first absent field. Keys beyond
/// the required seven are ignored.
pub fn make_dinosaur(record: &RawRecord) -> Result<Dinosaur> {
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|field| !record.contains_key(**field)) {
        return Err(InfographicError::MissingAttribute(missing.to_string()));
    }

    let species = required_str(record, "species")?;
    let location = required_str(record, "where")?;
    let era = required_str(record, "when")?;
    let fact = required_str(record, "fact")?;

    let animal = make_animal(AnimalAttributes {
        weight: required_number(record, "weight")?,
        height: required_number(record, "height")?,
        diet: required_diet(record)?,
    });

    Ok(Dinosaur {
        species,
        location,
        era,
        fact,
        animal,
    })
}

fn field<'a>(record: &'a RawRecord, name: &str) -> Result<&'a Value> {
    record
        .get(name)
        .ok_or_else(|| InfographicError::MissingAttribute(name.to_string()))
}

fn required_str(record: &RawRecord, name: &str) -> Result<String> {
    field(record, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| InfographicError::InvalidAttribute {
            field: name.to_string(),
            expected: "a string",
        })
}

/// Numbers may arrive as JSON numbers or numeric strings
fn required_number(record: &RawRecord, name: &str) -> Result<f64> {
    let value = field(record, name)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| InfographicError::InvalidAttribute {
        field: name.to_string(),
        expected: "a number",
    })
}

fn required_diet(record: &RawRecord) -> Result<Diet> {
    match field(record, "diet")? {
        Value::String(s) => s.parse(),
        _ => Err(InfographicError::InvalidAttribute {
            field: "diet".to_string(),
            expected: "herbivore, carnivore or omnivore",
        }),
    }
}
