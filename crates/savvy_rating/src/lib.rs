//! SkinSavvy Rating
//!
//! Deterministic classification of numeric scores into discrete bands with
//! a label, foreground color, background color, and text color per band.
//!
//! Two independent ladders live here and must stay independent - they
//! express different semantics:
//!
//! - [`impact`]: absolute skin-impact rating of a product or condition
//!   entry (`Great` / `Good` / `OK` / `Fair` / `Poor`)
//! - [`match_quality`]: personalized compatibility confidence
//!   (`Excellent match` through `Poor match`), with its own breakpoints
//!
//! Scores are trusted inputs from upstream producers: values outside
//! `[0, 100]` classify by the same threshold rule, with no clamping and no
//! error. Classification is recomputed on every call and never cached.

pub mod impact;
pub mod match_quality;

pub use impact::{classify, rating_band, Classification, RatingBand};
pub use match_quality::{classify_match, match_band, MatchBand, MatchClassification};
