//! Infographic Integration Tests
//!
//! Runs the full pipeline over the built-in eight dinosaurs: record parsing,
//! entity construction, tile assembly and HTML rendering.

use dino_infographic::{
    candidate_facts, Diet, Dinosaur, HtmlFormatter, Human, HumanForm, Infographic, InfographicConfig,
    JsonFormatter, Tile,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EXPECTED_ORDER: [&str; 9] = [
    "Triceratops",
    "Tyrannosaurus Rex",
    "Anklyosaurus",
    "Brachiosaurus",
    "Ann",
    "Stegosaurus",
    "Elasmosaurus",
    "Pteranodon",
    "Pigeon",
];

fn ann() -> Human {
    // 5 ft 5 in = 65 in
    HumanForm {
        name: "Ann".to_string(),
        feet: 5,
        inches: 5.0,
        weight: 120.0,
        diet: Diet::Omnivore,
    }
    .into_human()
}

fn infographic() -> Infographic {
    Infographic::with_reference_data(InfographicConfig::default()).unwrap()
}

fn dinosaur_for<'a>(infographic: &'a Infographic, tile: &Tile) -> &'a Dinosaur {
    infographic
        .dinosaurs()
        .iter()
        .find(|d| d.species() == tile.caption)
        .unwrap()
}

#[test]
fn test_grid_order_and_bodies() {
    let infographic = infographic();
    let human = ann();

    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let tiles = infographic.tiles(&human, &mut rng);

        let captions: Vec<&str> = tiles.iter().map(|t| t.caption.as_str()).collect();
        assert_eq!(captions, EXPECTED_ORDER);

        for (i, tile) in tiles.iter().enumerate() {
            if i == 4 {
                assert_eq!(tile.body, None);
                assert_eq!(tile.image.as_deref(), Some("human"));
                continue;
            }

            let dino = dinosaur_for(&infographic, tile);
            let body = tile.body.as_deref().unwrap();

            if dino.species() == "Pigeon" {
                assert_eq!(body, "All birds are dinosaurs.");
            } else {
                let candidates = candidate_facts(dino, &human);
                assert!(
                    candidates.iter().any(|c| c == body),
                    "{}: unexpected body {:?}",
                    dino.species(),
                    body
                );
            }
        }
    }
}

#[test]
fn test_trex_comparisons() {
    let infographic = infographic();
    let human = ann();
    let trex = &infographic.dinosaurs()[1];

    let candidates = candidate_facts(trex, &human);
    assert_eq!(candidates[0], "Location: North America");
    assert_eq!(candidates[1], "When I lived: Late Cretaceous");
    assert_eq!(candidates[2], "The largest known skull measures in at 5 feet long.");
    assert_eq!(candidates[3], "Why waste your appetite on vegetables?");
    // 144 in = 12 ft; (144 - 65) / 65 = 121.5%
    assert_eq!(candidates[4], "I am 12.00 ft tall, 122% taller than you.");
    // (11905 - 120) / 120 = 9820.8%
    assert_eq!(candidates[5], "I weigh 11905 lbs, 9821% heavier than you.");
}

#[test]
fn test_single_tile_units() {
    let infographic = infographic();
    let human = ann();
    let mut rng = StdRng::seed_from_u64(9);

    let own = infographic.tile(&human, None, &mut rng);
    assert_eq!(own.caption, "Ann");
    assert_eq!(own.body, None);
    assert_eq!(own.image.as_deref(), Some("human"));

    let pigeon = &infographic.dinosaurs()[7];
    let tile = infographic.tile(&human, Some(pigeon), &mut rng);
    assert_eq!(tile.caption, "Pigeon");
    assert_eq!(tile.body.as_deref(), Some(pigeon.fact()));
}

#[test]
fn test_render_html() {
    let infographic = infographic();
    let formatter = HtmlFormatter::new(infographic.config());
    let mut rng = StdRng::seed_from_u64(17);

    let markup = infographic.render(&ann(), &formatter, &mut rng).unwrap();
    assert_eq!(markup.len(), 9);

    assert!(markup[4].contains("<h3>Ann</h3>"));
    assert!(markup[4].contains("human.png"));
    assert!(!markup[4].contains("<p>"));

    assert!(markup[8].contains("<h3>Pigeon</h3>"));
    assert!(markup[8].contains("<p>All birds are dinosaurs.</p>"));

    for html in &markup {
        assert!(html.starts_with("<div class=\"grid-item\">"));
    }
}

#[test]
fn test_render_json_matches_tiles() {
    let infographic = infographic();
    let human = ann();

    let tiles = infographic.tiles(&human, &mut StdRng::seed_from_u64(3));
    let rendered = infographic
        .render(&human, &JsonFormatter::default(), &mut StdRng::seed_from_u64(3))
        .unwrap();

    let parsed: Vec<Tile> = rendered
        .iter()
        .map(|json| serde_json::from_str(json).unwrap())
        .collect();
    assert_eq!(parsed, tiles);
}
