//! Built-in seasonal themes.

use crate::tokens::*;
use savvy_core::Color;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// Built-in theme catalog.
///
/// Exactly one theme is active at a time. Ids are stable strings used for
/// persistence; an id that is not recognized parses to `None` and callers
/// fall back to [`ThemeId::Default`] - never an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeId {
    /// Neutral clinical palette.
    #[default]
    Default,
    /// Fresh green palette.
    Spring,
    /// Warm sun-toned palette.
    Summer,
}

impl ThemeId {
    /// Stable theme id for persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Spring => "spring",
            Self::Summer => "summer",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Classic",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }

    /// Full theme list.
    pub fn all() -> &'static [ThemeId] {
        const THEMES: [ThemeId; 3] = [ThemeId::Default, ThemeId::Spring, ThemeId::Summer];
        &THEMES
    }

    /// Parse a persisted id. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<ThemeId> {
        ThemeId::all().iter().copied().find(|theme| theme.id() == id)
    }

    /// Parse a persisted id, degrading unknown ids to [`ThemeId::Default`].
    pub fn from_id_or_default(id: &str) -> ThemeId {
        Self::from_id(id).unwrap_or_default()
    }

    /// Token tables for this theme.
    pub fn definition(self) -> &'static ThemeDefinition {
        match self {
            Self::Default => {
                static DEF: OnceLock<ThemeDefinition> = OnceLock::new();
                DEF.get_or_init(default_theme)
            }
            Self::Spring => {
                static DEF: OnceLock<ThemeDefinition> = OnceLock::new();
                DEF.get_or_init(spring_theme)
            }
            Self::Summer => {
                static DEF: OnceLock<ThemeDefinition> = OnceLock::new();
                DEF.get_or_init(summer_theme)
            }
        }
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Complete token tables for one theme.
///
/// Serializes to the nested tree walked by the path resolver, so the typed
/// accessors and string paths share one source of truth.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub typography: TypographyTokens,
    pub radii: RadiusTokens,
}

/// Themes vary by palette; spacing, typography, and radii are shared.
fn with_colors(name: &'static str, colors: ColorTokens) -> ThemeDefinition {
    ThemeDefinition {
        name,
        colors,
        spacing: SpacingTokens::default(),
        typography: TypographyTokens::default(),
        radii: RadiusTokens::default(),
    }
}

fn default_theme() -> ThemeDefinition {
    with_colors("Classic", ColorTokens::default())
}

fn spring_theme() -> ThemeDefinition {
    with_colors(
        "Spring",
        ColorTokens {
            primary: Color::from_hex(0x4ADE80),
            primary_soft: Color::from_hex(0x4ADE80).with_alpha(0.14),
            accent: Color::from_hex(0x2DD4BF),
            background: Color::from_hex(0xF0FDF4),
            surface: Color::WHITE,
            surface_muted: Color::from_hex(0xDCFCE7),
            text_primary: Color::from_hex(0x14532D),
            text_secondary: Color::from_hex(0x3F6212),
            text_inverse: Color::WHITE,
            border: Color::from_hex(0xBBF7D0),
            success: Color::from_hex(0x22C55E),
            warning: Color::from_hex(0xEAB308),
            error: Color::from_hex(0xE11D48),
            info: Color::from_hex(0x06B6D4),
        },
    )
}

fn summer_theme() -> ThemeDefinition {
    with_colors(
        "Summer",
        ColorTokens {
            primary: Color::from_hex(0xFB923C),
            primary_soft: Color::from_hex(0xFB923C).with_alpha(0.14),
            accent: Color::from_hex(0xF472B6),
            background: Color::from_hex(0xFFF7ED),
            surface: Color::WHITE,
            surface_muted: Color::from_hex(0xFFEDD5),
            text_primary: Color::from_hex(0x7C2D12),
            text_secondary: Color::from_hex(0x9A3412),
            text_inverse: Color::WHITE,
            border: Color::from_hex(0xFED7AA),
            success: Color::from_hex(0x84CC16),
            warning: Color::from_hex(0xF59E0B),
            error: Color::from_hex(0xDC2626),
            info: Color::from_hex(0x38BDF8),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_expected_ids() {
        let mut ids: Vec<&str> = ThemeId::all().iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["default", "spring", "summer"]);
    }

    #[test]
    fn ids_round_trip_through_parsing() {
        for theme in ThemeId::all() {
            assert_eq!(ThemeId::from_id(theme.id()), Some(*theme));
        }
    }

    #[test]
    fn unknown_ids_degrade_to_default() {
        assert_eq!(ThemeId::from_id("winter"), None);
        assert_eq!(ThemeId::from_id_or_default("winter"), ThemeId::Default);
        assert_eq!(ThemeId::from_id_or_default(""), ThemeId::Default);
    }

    #[test]
    fn palettes_are_distinct_per_theme() {
        let primaries: Vec<Color> = ThemeId::all()
            .iter()
            .map(|t| t.definition().colors.get(ColorToken::Primary))
            .collect();
        assert_ne!(primaries[0], primaries[1]);
        assert_ne!(primaries[1], primaries[2]);
        assert_ne!(primaries[0], primaries[2]);
    }
}
