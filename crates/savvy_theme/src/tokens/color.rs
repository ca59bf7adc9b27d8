//! Color tokens for theming

use savvy_core::Color;
use serde::Serialize;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimarySoft,
    Accent,

    // Surface colors
    Background,
    Surface,
    SurfaceMuted,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextInverse,

    // Border
    Border,

    // Semantic colors
    Success,
    Warning,
    Error,
    Info,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, Serialize)]
pub struct ColorTokens {
    // Brand colors
    pub primary: Color,
    pub primary_soft: Color,
    pub accent: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_inverse: Color,

    // Border
    pub border: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimarySoft => self.primary_soft,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceMuted => self.surface_muted,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::Border => self.border,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Info => self.info,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Neutral clinical palette
        Self {
            primary: Color::from_hex(0x10B981),
            primary_soft: Color::from_hex(0x10B981).with_alpha(0.12),
            accent: Color::from_hex(0x8B5CF6),
            background: Color::from_hex(0xF8FAFC),
            surface: Color::WHITE,
            surface_muted: Color::from_hex(0xF1F5F9),
            text_primary: Color::from_hex(0x0F172A),
            text_secondary: Color::from_hex(0x64748B),
            text_inverse: Color::WHITE,
            border: Color::from_hex(0xE2E8F0),
            success: Color::from_hex(0x22C55E),
            warning: Color::from_hex(0xF59E0B),
            error: Color::from_hex(0xEF4444),
            info: Color::from_hex(0x0EA5E9),
        }
    }
}
