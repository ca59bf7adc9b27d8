//! Skin-impact rating bands

use savvy_core::Color;

/// Discrete band for an absolute skin-impact score
///
/// One threshold ladder produces the band; label and the three color
/// outputs are keyed off the band so they cannot drift apart.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RatingBand {
    Great,
    Good,
    Ok,
    Fair,
    Poor,
}

/// Band for a score. Right-inclusive thresholds, evaluated top-down.
pub fn rating_band(score: f32) -> RatingBand {
    if score >= 80.0 {
        RatingBand::Great
    } else if score >= 60.0 {
        RatingBand::Good
    } else if score >= 40.0 {
        RatingBand::Ok
    } else if score >= 20.0 {
        RatingBand::Fair
    } else {
        RatingBand::Poor
    }
}

impl RatingBand {
    /// User-facing label
    pub fn label(self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Ok => "OK",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Foreground color
    pub fn color(self) -> Color {
        match self {
            Self::Great => Color::from_hex(0x10B981),
            Self::Good => Color::from_hex(0x84CC16),
            Self::Ok => Color::from_hex(0xF59E0B),
            Self::Fair => Color::from_hex(0xF97316),
            Self::Poor => Color::from_hex(0xEF4444),
        }
    }

    /// Soft background tint behind the label
    pub fn background(self) -> Color {
        match self {
            Self::Great => Color::from_hex(0xECFDF5),
            Self::Good => Color::from_hex(0xF7FEE7),
            Self::Ok => Color::from_hex(0xFFFBEB),
            Self::Fair => Color::from_hex(0xFFF7ED),
            Self::Poor => Color::from_hex(0xFEF2F2),
        }
    }

    /// Text color readable on [`RatingBand::background`]
    pub fn text_color(self) -> Color {
        match self {
            Self::Great => Color::from_hex(0x065F46),
            Self::Good => Color::from_hex(0x3F6212),
            Self::Ok => Color::from_hex(0x92400E),
            Self::Fair => Color::from_hex(0x9A3412),
            Self::Poor => Color::from_hex(0x991B1B),
        }
    }
}

/// Full classification tuple for one score
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub band: RatingBand,
    pub label: &'static str,
    pub color: Color,
    pub background: Color,
    pub text: Color,
}

/// Classify a skin-impact score
pub fn classify(score: f32) -> Classification {
    let band = rating_band(score);
    Classification {
        band,
        label: band.label(),
        color: band.color(),
        background: band.background(),
        text: band.text_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_fields_come_from_one_band() {
        let c = classify(85.0);
        assert_eq!(c.band, RatingBand::Great);
        assert_eq!(c.label, RatingBand::Great.label());
        assert_eq!(c.color, RatingBand::Great.color());
        assert_eq!(c.background, RatingBand::Great.background());
        assert_eq!(c.text, RatingBand::Great.text_color());
    }

    #[test]
    fn out_of_range_scores_hit_the_boundary_bands() {
        assert_eq!(rating_band(140.0), RatingBand::Great);
        assert_eq!(rating_band(-15.0), RatingBand::Poor);
    }
}
