//! Tile composition
//!
//! - `types`: the structured `Tile` record
//! - `selector`: six-candidate fact draw for dinosaur tiles
//! - `composer`: single human or dinosaur tile
//! - `grid`: nine-tile layout with the human in the center

pub mod types;
pub mod selector;
pub mod composer;
pub mod grid;

pub use types::Tile;
pub use selector::{candidate_facts, select_fact, CANDIDATE_COUNT};
pub use composer::{compose_tile, dinosaur_tile, human_tile};
pub use grid::{assemble_grid, human_position, STANDARD_DINOSAUR_COUNT};
