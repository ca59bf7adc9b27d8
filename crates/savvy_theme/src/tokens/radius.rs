//! Border radius tokens for theming

use serde::Serialize;

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Pill,
}

/// Border radii
#[derive(Clone, Debug, Serialize)]
pub struct RadiusTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub pill: f32,
}

impl RadiusTokens {
    /// Get a radius value by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Pill => self.pill,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            sm: 6.0,
            md: 10.0,
            lg: 16.0,
            pill: 9999.0,
        }
    }
}
