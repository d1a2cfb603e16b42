//! Grid Assembly
//!
//! Lays the tiles out for a 3x3 grid: the first half of the dinosaurs,
//! then the human, then the rest, so the human lands in the center cell.

use crate::config::InfographicConfig;
use crate::entities::{Dinosaur, Human};
use crate::tiles::composer::{dinosaur_tile, human_tile};
use crate::tiles::types::Tile;
use rand::Rng;

/// Dinosaur count that fills a 3x3 grid around the human
pub const STANDARD_DINOSAUR_COUNT: usize = 8;

/// Index of the human tile for `dinosaur_count` dinosaurs
pub fn human_position(dinosaur_count: usize) -> usize {
    dinosaur_count / 2
}

pub fn assemble_grid<R: Rng + ?Sized>(
    human: &Human,
    dinosaurs: &[Dinosaur],
    config: &InfographicConfig,
    rng: &mut R,
) -> Vec<Tile> {
    if dinosaurs.len() != STANDARD_DINOSAUR_COUNT {
        tracing::warn!(
            "Assembling grid with {} dinosaurs (expected {})",
            dinosaurs.len(),
            STANDARD_DINOSAUR_COUNT
        );
    }

    let center = human_position(dinosaurs.len());
    let (before, after) = dinosaurs.split_at(center);

    let mut tiles = Vec::with_capacity(dinosaurs.len() + 1);
    for dino in before {
        tiles.push(dinosaur_tile(dino, human, config, rng));
    }
    tiles.push(human_tile(human, config));
    for dino in after {
        tiles.push(dinosaur_tile(dino, human, config, rng));
    }

    tracing::info!("Assembled {} tiles for {}", tiles.len(), human.name());

    tiles
}
