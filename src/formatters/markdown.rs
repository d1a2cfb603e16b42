use crate::config::InfographicConfig;
use crate::error::Result;
use crate::formatters::TileFormatter;
use crate::tiles::Tile;

/// Markdown formatter for tiles
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    image_dir: String,
    image_extension: String,
}

impl MarkdownFormatter {
    pub fn new(config: &InfographicConfig) -> Self {
        Self {
            image_dir: config.image_dir.clone(),
            image_extension: config.image_extension.clone(),
        }
    }

    /// Format tile as a markdown section
    pub fn format(&self, tile: &Tile) -> String {
        let mut md = String::with_capacity(256);

        md.push_str(&format!("### {}\n\n", tile.caption));
        md.push_str(&format!(
            "![{}]({}/{}.{})\n",
            tile.caption,
            self.image_dir,
            tile.image_key(),
            self.image_extension
        ));

        if let Some(body) = tile.body_text() {
            md.push_str(&format!("\n{}\n", body));
        }

        md
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new(&InfographicConfig::default())
    }
}

impl TileFormatter for MarkdownFormatter {
    fn format_tile(&self, tile: &Tile) -> Result<String> {
        Ok(self.format(tile))
    }
}
