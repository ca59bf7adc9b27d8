//! Well-known record keys
//!
//! Keys are opaque strings namespaced by caller convention. Values are
//! plain strings with no schema versioning; callers serialize structured
//! data to JSON before storing it.

/// Active theme id (`"default"`, `"spring"`, `"summer"`)
pub const THEME: &str = "skin-savvy-theme";

/// User-supplied OpenAI API key (may be empty)
pub const OPENAI_API_KEY: &str = "openai-api-key";

/// Onboarding flag: whether the user has tried other skincare apps
pub const HAS_PREVIOUS_APPS: &str = "hasPreviousApps";

/// Onboarding rating of the user's current routine
pub const ROUTINE_EFFECTIVENESS: &str = "userRoutineEffectiveness";
