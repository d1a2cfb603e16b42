//! Infographic Generator
//!
//! Owns the dinosaurs and display settings for the lifetime of the process
//! and turns a human profile into tiles or rendered markup.

use crate::config::InfographicConfig;
use crate::data;
use crate::entities::{make_dinosaur, Dinosaur, Human, RawRecord};
use crate::error::Result;
use crate::formatters::TileFormatter;
use crate::tiles::{assemble_grid, compose_tile, Tile};
use rand::Rng;

/// Construct every dinosaur, stopping at the first malformed record
pub fn build_dinosaurs(records: &[RawRecord]) -> Result<Vec<Dinosaur>> {
    records.iter().map(make_dinosaur).collect()
}

pub struct Infographic {
    dinosaurs: Vec<Dinosaur>,
    config: InfographicConfig,
}

impl Infographic {
    pub fn new(dinosaurs: Vec<Dinosaur>, config: InfographicConfig) -> Self {
        Self { dinosaurs, config }
    }

    pub fn from_records(records: &[RawRecord], config: InfographicConfig) -> Result<Self> {
        Ok(Self::new(build_dinosaurs(records)?, config))
    }

    /// Infographic over the built-in eight-record set
    pub fn with_reference_data(config: InfographicConfig) -> anyhow::Result<Self> {
        let records = data::reference_records()?;
        let infographic = Self::from_records(&records, config)?;
        tracing::info!("Initialized infographic with {} dinosaurs", infographic.dinosaurs.len());
        Ok(infographic)
    }

    pub fn dinosaurs(&self) -> &[Dinosaur] {
        &self.dinosaurs
    }

    pub fn config(&self) -> &InfographicConfig {
        &self.config
    }

    /// All tiles in grid order, human in the center
    pub fn tiles<R: Rng + ?Sized>(&self, human: &Human, rng: &mut R) -> Vec<Tile> {
        assemble_grid(human, &self.dinosaurs, &self.config, rng)
    }

    /// All tiles in grid order, rendered with `formatter`
    pub fn render<F, R>(&self, human: &Human, formatter: &F, rng: &mut R) -> Result<Vec<String>>
    where
        F: TileFormatter + ?Sized,
        R: Rng + ?Sized,
    {
        formatter.format_tiles(&self.tiles(human, rng))
    }

    /// A single tile: the human's own when `dino` is `None`
    pub fn tile<R: Rng + ?Sized>(&self, human: &Human, dino: Option<&Dinosaur>, rng: &mut R) -> Tile {
        compose_tile(human, dino, &self.config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InfographicError;
    use serde_json::json;

    #[test]
    fn test_reference_data() {
        let infographic = Infographic::with_reference_data(InfographicConfig::default()).unwrap();
        assert_eq!(infographic.dinosaurs().len(), 8);
        assert_eq!(infographic.dinosaurs()[1].species(), "Tyrannosaurus Rex");
    }

    #[test]
    fn test_malformed_record_fails_fast() {
        let records: Vec<RawRecord> = vec![
            serde_json::from_value(json!({
                "species": "Triceratops", "weight": 13000, "height": 114, "diet": "herbivore",
                "where": "North America", "when": "Late Cretaceous", "fact": "Three horns."
            }))
            .unwrap(),
            serde_json::from_value(json!({
                "species": "Mystery", "weight": 1, "height": 1, "diet": "omnivore",
                "when": "Unknown", "fact": "Nobody knows."
            }))
            .unwrap(),
        ];

        let err = Infographic::from_records(&records, InfographicConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, InfographicError::MissingAttribute(ref f) if f == "where"));
    }
}
