//! Token resolution
//!
//! Two read paths into the theme tables:
//!
//! - [`resolve`] / [`resolve_or`]: dot-delimited string paths walked over a
//!   per-theme token tree. The token set is large and evolves independently
//!   of any single consumer, so lookup stays string-keyed; an unresolved
//!   path degrades to the caller's fallback instead of erroring.
//! - [`color_for`]: pure three-way selection on theme identity, for call
//!   sites that carry their own per-theme literals.
//!
//! Both are side-effect free and read-only; neither consults the active
//! theme store. Callers thread the current [`ThemeId`] in explicitly.

use crate::themes::ThemeId;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::OnceLock;

/// Token tree for a theme, serialized once from its typed tables.
fn token_tree(theme: ThemeId) -> &'static Value {
    fn build(theme: ThemeId) -> Value {
        serde_json::to_value(theme.definition()).unwrap_or_else(|err| {
            tracing::warn!(theme = theme.id(), %err, "token table did not serialize; resolving to fallbacks");
            Value::Null
        })
    }
    match theme {
        ThemeId::Default => {
            static TREE: OnceLock<Value> = OnceLock::new();
            TREE.get_or_init(|| build(ThemeId::Default))
        }
        ThemeId::Spring => {
            static TREE: OnceLock<Value> = OnceLock::new();
            TREE.get_or_init(|| build(ThemeId::Spring))
        }
        ThemeId::Summer => {
            static TREE: OnceLock<Value> = OnceLock::new();
            TREE.get_or_init(|| build(ThemeId::Summer))
        }
    }
}

/// Walk a dot-delimited path through a theme's token tree.
///
/// Returns `None` when any segment is missing or the leaf does not decode
/// as `T`.
///
/// ```rust
/// use savvy_theme::{resolve, ThemeId};
///
/// let primary: String = resolve(ThemeId::Spring, "colors.primary").unwrap();
/// assert!(primary.starts_with('#'));
/// assert_eq!(resolve::<String>(ThemeId::Spring, "colors.neon"), None);
/// ```
pub fn resolve<T: DeserializeOwned>(theme: ThemeId, path: &str) -> Option<T> {
    let mut node = token_tree(theme);
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    serde_json::from_value(node.clone()).ok()
}

/// [`resolve`], collapsing an unresolved path to `fallback`.
pub fn resolve_or<T: DeserializeOwned>(theme: ThemeId, path: &str, fallback: T) -> T {
    resolve(theme, path).unwrap_or(fallback)
}

/// Three-way selection keyed on theme identity.
///
/// Summer and spring pick their own value; everything else, including ids
/// added later, styles as default.
pub fn color_for<T>(theme: ThemeId, summer: T, spring: T, default_value: T) -> T {
    match theme {
        ThemeId::Summer => summer,
        ThemeId::Spring => spring,
        _ => default_value,
    }
}
