use crate::config::InfographicConfig;
use crate::error::Result;
use crate::formatters::TileFormatter;
use crate::tiles::Tile;
use askama::Template;

#[derive(Template)]
#[template(path = "tile.html")]
struct TileTemplate<'a> {
    caption: &'a str,
    body: Option<&'a str>,
    image_dir: &'a str,
    image_key: String,
    image_extension: &'a str,
}

/// HTML formatter producing one `grid-item` div per tile.
///
/// Caption and body are escaped by the template. The `<p>` body element is
/// left out when there is no body text.
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    image_dir: String,
    image_extension: String,
}

impl HtmlFormatter {
    pub fn new(config: &InfographicConfig) -> Self {
        Self {
            image_dir: config.image_dir.clone(),
            image_extension: config.image_extension.clone(),
        }
    }

    pub fn format(&self, tile: &Tile) -> Result<String> {
        let template = TileTemplate {
            caption: &tile.caption,
            body: tile.body_text(),
            image_dir: &self.image_dir,
            image_key: tile.image_key(),
            image_extension: &self.image_extension,
        };
        Ok(template.render()?)
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(&InfographicConfig::default())
    }
}

impl TileFormatter for HtmlFormatter {
    fn format_tile(&self, tile: &Tile) -> Result<String> {
        self.format(tile)
    }
}
