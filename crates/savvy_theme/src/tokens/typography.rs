//! Typography tokens for theming

use serde::Serialize;

/// Semantic font-size token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Caption,
    Body,
    Title,
    Display,
}

/// Font families, sizes, and weights
#[derive(Clone, Debug, Serialize)]
pub struct TypographyTokens {
    pub family: String,
    pub size_caption: f32,
    pub size_body: f32,
    pub size_title: f32,
    pub size_display: f32,
    pub weight_regular: u16,
    pub weight_medium: u16,
    pub weight_bold: u16,
    pub line_height: f32,
}

impl TypographyTokens {
    /// Get a font size by token key
    pub fn size(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Caption => self.size_caption,
            FontSizeToken::Body => self.size_body,
            FontSizeToken::Title => self.size_title,
            FontSizeToken::Display => self.size_display,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            size_caption: 12.0,
            size_body: 16.0,
            size_title: 20.0,
            size_display: 28.0,
            weight_regular: 400,
            weight_medium: 500,
            weight_bold: 700,
            line_height: 1.5,
        }
    }
}
