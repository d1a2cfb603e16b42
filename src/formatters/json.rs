use crate::error::Result;
use crate::formatters::TileFormatter;
use crate::tiles::Tile;

/// JSON formatter for tiles
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Format tile as pretty-printed JSON
    pub fn format(tile: &Tile) -> Result<String> {
        Ok(serde_json::to_string_pretty(tile)?)
    }

    /// Format tile as compact JSON (no whitespace)
    pub fn format_compact(tile: &Tile) -> Result<String> {
        Ok(serde_json::to_string(tile)?)
    }
}

impl TileFormatter for JsonFormatter {
    fn format_tile(&self, tile: &Tile) -> Result<String> {
        if self.pretty {
            Self::format(tile)
        } else {
            Self::format_compact(tile)
        }
    }
}
