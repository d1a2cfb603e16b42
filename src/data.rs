//! Dinosaur Record Loading
//!
//! Raw records arrive as a JSON document of the form `{"Dinos": [...]}`
//! (a bare array is accepted too). The reference set of eight records is
//! compiled into the crate.

use crate::entities::RawRecord;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const REFERENCE_RECORDS: &str = include_str!("../data/dino.json");

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordDocument {
    Wrapped {
        #[serde(rename = "Dinos")]
        dinos: Vec<RawRecord>,
    },
    Bare(Vec<RawRecord>),
}

impl RecordDocument {
    fn into_records(self) -> Vec<RawRecord> {
        match self {
            RecordDocument::Wrapped { dinos } => dinos,
            RecordDocument::Bare(dinos) => dinos,
        }
    }
}

/// Parse raw records from a JSON string, preserving order
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>> {
    let document: RecordDocument =
        serde_json::from_str(json).context("Invalid dinosaur record JSON")?;
    Ok(document.into_records())
}

/// Load raw records from a JSON file
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dinosaur records: {:?}", path))?;

    let records = parse_records(&contents)
        .with_context(|| format!("Failed to parse dinosaur records: {:?}", path))?;

    tracing::info!("Loaded {} dinosaur records from {:?}", records.len(), path);
    Ok(records)
}

/// The eight built-in records, sentinel "Pigeon" last
pub fn reference_records() -> Result<Vec<RawRecord>> {
    parse_records(REFERENCE_RECORDS).context("Embedded reference records are malformed")
}
