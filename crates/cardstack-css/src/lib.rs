//! CSS render target for the card stack.
//!
//! Folds [`cardstack_core::render::CardVisual`] updates into per-card inline
//! style declarations, keeping properties a partial update does not touch.

#![no_std]

pub mod sheet;
pub mod style;

pub use sheet::StyleSheet;
pub use style::{CardStyle, PointerEvents, Transform};
