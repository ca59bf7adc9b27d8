//! Personalized match-quality bands

use savvy_core::Color;

/// Discrete band for a personalized compatibility score
///
/// A different ladder than the skin-impact rating: five bands with an
/// extra top tier at 90, and "match" labels. Not interchangeable with
/// [`crate::impact::RatingBand`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum MatchBand {
    Excellent,
    Great,
    Good,
    Fair,
    Poor,
}

/// Band for a compatibility score. Right-inclusive thresholds, evaluated
/// top-down.
pub fn match_band(score: f32) -> MatchBand {
    if score >= 90.0 {
        MatchBand::Excellent
    } else if score >= 80.0 {
        MatchBand::Great
    } else if score >= 60.0 {
        MatchBand::Good
    } else if score >= 40.0 {
        MatchBand::Fair
    } else {
        MatchBand::Poor
    }
}

impl MatchBand {
    /// User-facing label
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent match",
            Self::Great => "Great match",
            Self::Good => "Good match",
            Self::Fair => "Fair match",
            Self::Poor => "Poor match",
        }
    }

    /// Foreground color
    pub fn color(self) -> Color {
        match self {
            Self::Excellent => Color::from_hex(0x059669),
            Self::Great => Color::from_hex(0x14B8A6),
            Self::Good => Color::from_hex(0x65A30D),
            Self::Fair => Color::from_hex(0xD97706),
            Self::Poor => Color::from_hex(0xDC2626),
        }
    }

    /// Soft background tint behind the label
    pub fn background(self) -> Color {
        match self {
            Self::Excellent => Color::from_hex(0xD1FAE5),
            Self::Great => Color::from_hex(0xCCFBF1),
            Self::Good => Color::from_hex(0xECFCCB),
            Self::Fair => Color::from_hex(0xFEF3C7),
            Self::Poor => Color::from_hex(0xFEE2E2),
        }
    }

    /// Text color readable on [`MatchBand::background`]
    pub fn text_color(self) -> Color {
        match self {
            Self::Excellent => Color::from_hex(0x064E3B),
            Self::Great => Color::from_hex(0x134E4A),
            Self::Good => Color::from_hex(0x365314),
            Self::Fair => Color::from_hex(0x92400E),
            Self::Poor => Color::from_hex(0x991B1B),
        }
    }
}

/// Full classification tuple for one compatibility score
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchClassification {
    pub band: MatchBand,
    pub label: &'static str,
    pub color: Color,
    pub background: Color,
    pub text: Color,
}

/// Classify a personalized compatibility score
pub fn classify_match(score: f32) -> MatchClassification {
    let band = match_band(score);
    MatchClassification {
        band,
        label: band.label(),
        color: band.color(),
        background: band.background(),
        text: band.text_color(),
    }
}
