//! SkinSavvy Theme System
//!
//! Design tokens, seasonal palettes, token resolution, and the persisted
//! theme selection every visual component depends on.
//!
//! # Overview
//!
//! - **Design tokens**: colors, spacing, typography, radii
//! - **Seasonal themes**: `default`, `spring`, `summer` palettes
//! - **Token resolution**: dot-path lookup with fallbacks, plus pure
//!   per-theme value selection
//! - **Theme store**: load-on-start, persist-on-change, synchronous
//!   subscriber fan-out
//!
//! # Quick Start
//!
//! ```rust
//! use savvy_storage::StorageAdapter;
//! use savvy_theme::{color_for, resolve_or, ThemeId, ThemeStore};
//! use std::sync::Arc;
//!
//! let store = ThemeStore::load(Arc::new(StorageAdapter::in_memory()));
//! store.set_theme(ThemeId::Spring);
//!
//! // Views thread the active theme into pure lookups
//! let banner = color_for(store.theme(), "#fff7ed", "#f0fdf4", "#f8fafc");
//! assert_eq!(banner, "#f0fdf4");
//! let gap = resolve_or(store.theme(), "spacing.md", 16.0_f32);
//! # assert_eq!(gap, 16.0);
//! ```
//!
//! Theme switching never fails: unknown persisted ids fall back to the
//! default palette, and a dead storage backend only costs durability.

pub mod resolver;
pub mod state;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use resolver::{color_for, resolve, resolve_or};
pub use state::ThemeStore;
pub use themes::{ThemeDefinition, ThemeId};
pub use tokens::*;
