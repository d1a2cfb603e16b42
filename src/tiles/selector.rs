//! Fact Selector
//!
//! Each dinosaur tile shows one of six candidate strings, drawn uniformly
//! and independently per tile. The random source is supplied by the caller
//! so tests can seed it.

use crate::comparison::{compare_diet, compare_height, compare_weight};
use crate::entities::{Dinosaur, Human};
use rand::Rng;

/// Number of candidate strings per dinosaur tile
pub const CANDIDATE_COUNT: usize = 6;

/// Candidate strings in display order: location, era, trivia, then the
/// diet, height and weight comparisons from the dinosaur's point of view.
pub fn candidate_facts(dino: &Dinosaur, human: &Human) -> [String; CANDIDATE_COUNT] {
    [
        format!("Location: {}", dino.location()),
        format!("When I lived: {}", dino.era()),
        dino.fact().to_string(),
        compare_diet(dino, human),
        compare_height(dino, human),
        compare_weight(dino, human),
    ]
}

/// Draw one candidate uniformly at random
pub fn select_fact<R: Rng + ?Sized>(dino: &Dinosaur, human: &Human, rng: &mut R) -> String {
    let mut candidates = candidate_facts(dino, human);
    let index = rng.gen_range(0..CANDIDATE_COUNT);

    tracing::debug!("Selected fact {} of {} for {}", index, CANDIDATE_COUNT, dino.species());

    std::mem::take(&mut candidates[index])
}
