//! Dinosaur Comparison Infographic
//!
//! Pairs a human profile against a fixed set of dinosaurs and picks, per
//! dinosaur, one fact or comparison to show on its tile.
//!
//! - `entities`: `Entity` trait, `Human`, validated `Dinosaur` records
//! - `comparison`: weight, height and diet comparators
//! - `tiles`: fact selection, tile composition, grid layout
//! - `formatters`: HTML / JSON / Markdown rendering of tiles
//! - `infographic`: generator owning the dinosaurs and config
//! - `data`, `config`, `error`: record loading, settings, error types

pub mod error;
pub mod config;
pub mod data;
pub mod entities;
pub mod comparison;
pub mod tiles;
pub mod formatters;
pub mod infographic;

// Re-export commonly used types
pub use error::{InfographicError, Result};
pub use config::InfographicConfig;
pub use entities::{
    make_animal, make_dinosaur, make_human, Animal, AnimalAttributes, Diet, Dinosaur, Entity, Human,
    HumanAttributes, HumanForm, RawRecord,
};
pub use comparison::{compare_diet, compare_height, compare_weight};
pub use tiles::{assemble_grid, candidate_facts, compose_tile, select_fact, Tile};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter, TileFormatter};
pub use infographic::{build_dinosaurs, Infographic};
