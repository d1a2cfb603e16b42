use crate::config::InfographicConfig;
use crate::entities::{Dinosaur, Human};
use crate::tiles::selector::select_fact;
use crate::tiles::types::Tile;
use rand::Rng;

/// Build a single tile.
///
/// Without a dinosaur this is the human's own tile; with one it is that
/// dinosaur's tile, compared against `human`.
pub fn compose_tile<R: Rng + ?Sized>(
    human: &Human,
    dino: Option<&Dinosaur>,
    config: &InfographicConfig,
    rng: &mut R,
) -> Tile {
    match dino {
        Some(dino) => dinosaur_tile(dino, human, config, rng),
        None => human_tile(human, config),
    }
}

/// Caption is the human's name; the image key is fixed rather than name-derived
pub fn human_tile(human: &Human, config: &InfographicConfig) -> Tile {
    Tile::new(human.name()).with_image(config.human_image.as_str())
}

/// The sentinel species always shows its own fact; others draw a candidate
pub fn dinosaur_tile<R: Rng + ?Sized>(
    dino: &Dinosaur,
    human: &Human,
    config: &InfographicConfig,
    rng: &mut R,
) -> Tile {
    let body = if config.is_sentinel(dino.species()) {
        tracing::debug!("{} is the sentinel species, showing its fact", dino.species());
        dino.fact().to_string()
    } else {
        select_fact(dino, human, rng)
    };

    Tile::new(dino.species()).with_body(body)
}
