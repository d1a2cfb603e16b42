use serde::{Deserialize, Serialize};

/// One unit of the infographic grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub caption: String,

    /// Fact or comparison text; `None` for the human's tile
    pub body: Option<String>,

    /// Image key overriding the caption-derived one
    pub image: Option<String>,
}

impl Tile {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            body: None,
            image: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Body text, treating an empty string the same as no body
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }

    /// Lowercased image key: the override if set, else the caption
    pub fn image_key(&self) -> String {
        self.image.as_deref().unwrap_or(&self.caption).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_key_defaults_to_caption() {
        let tile = Tile::new("Tyrannosaurus Rex");
        assert_eq!(tile.image_key(), "tyrannosaurus rex");
    }

    #[test]
    fn test_image_key_override() {
        let tile = Tile::new("Ann").with_image("Human");
        assert_eq!(tile.image_key(), "human");
    }

    #[test]
    fn test_empty_body_is_no_body() {
        assert_eq!(Tile::new("Ann").with_body("").body_text(), None);
        assert_eq!(Tile::new("Ann").body_text(), None);
        assert_eq!(Tile::new("Pigeon").with_body("All birds are dinosaurs.").body_text(),
            Some("All birds are dinosaurs."));
    }
}
