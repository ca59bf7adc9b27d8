//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors
//! - Spacing (margins, padding)
//! - Typography (font family, sizes, weights)
//! - Border radii
//!
//! Token tables serialize to the nested tree the path resolver walks, so
//! typed access and string-path access always agree.

mod color;
mod radius;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
