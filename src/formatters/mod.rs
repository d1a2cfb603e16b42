//! Tile formatters
//!
//! Rendering is kept apart from tile composition: a `Tile` can be turned
//! into HTML markup, JSON or Markdown by swapping the formatter.

pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

use crate::error::Result;
use crate::tiles::Tile;

/// Turns a tile into a presentable string
pub trait TileFormatter {
    fn format_tile(&self, tile: &Tile) -> Result<String>;

    fn format_tiles(&self, tiles: &[Tile]) -> Result<Vec<String>> {
        tiles.iter().map(|tile| self.format_tile(tile)).collect()
    }
}
