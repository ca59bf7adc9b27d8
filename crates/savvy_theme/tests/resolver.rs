use savvy_storage::StorageAdapter;
use savvy_theme::{color_for, resolve, resolve_or, ThemeId, ThemeStore};
use std::sync::Arc;

#[test]
fn color_for_selects_by_theme_identity() {
    assert_eq!(color_for(ThemeId::Summer, "A", "B", "C"), "A");
    assert_eq!(color_for(ThemeId::Spring, "A", "B", "C"), "B");
    assert_eq!(color_for(ThemeId::Default, "A", "B", "C"), "C");
}

#[test]
fn unknown_theme_ids_style_as_default() {
    let theme = ThemeId::from_id_or_default("unknown-future-theme");
    assert_eq!(color_for(theme, "A", "B", "C"), "C");
}

#[test]
fn color_for_is_pure_with_respect_to_the_store() {
    let store = ThemeStore::load(Arc::new(StorageAdapter::in_memory()));

    store.set_theme(ThemeId::Spring);
    assert_eq!(color_for(ThemeId::Spring, "#fff", "#0f0", "#000"), "#0f0");

    // Same literal arguments, same result - selection is parameterized by
    // the first argument, not by store state.
    store.set_theme(ThemeId::Summer);
    assert_eq!(color_for(ThemeId::Spring, "#fff", "#0f0", "#000"), "#0f0");

    // Threading the store's current theme in is the caller's choice.
    assert_eq!(color_for(store.theme(), "#fff", "#0f0", "#000"), "#fff");
}

#[test]
fn every_theme_resolves_its_own_palette() {
    for theme in ThemeId::all() {
        let primary: String = resolve(*theme, "colors.primary").unwrap();
        assert_eq!(primary, theme.definition().colors.primary.to_css());
    }
}

#[test]
fn shared_tokens_agree_across_themes() {
    let sizes: Vec<f32> = ThemeId::all()
        .iter()
        .map(|t| resolve(*t, "typography.size_body").unwrap())
        .collect();
    assert!(sizes.iter().all(|size| *size == sizes[0]));
}

#[test]
fn unresolved_paths_collapse_to_the_fallback() {
    assert_eq!(
        resolve_or(ThemeId::Spring, "colors.holographic", "#000".to_string()),
        "#000"
    );
    assert_eq!(resolve::<String>(ThemeId::Spring, "colors.holographic"), None);
}

#[test]
fn colors_resolve_as_typed_values_too() {
    use savvy_core::Color;
    let primary: Color = resolve(ThemeId::Summer, "colors.primary").unwrap();
    assert_eq!(primary, ThemeId::Summer.definition().colors.primary);
}
