//! Headless state machine for a cyclic stack of animated cards.
//!
//! The host owns the card elements and the clock. It feeds input events and
//! the current time into [`app::CardStack`], which decides which card is
//! active and pushes per-card [`render::CardVisual`] states to a
//! [`render::RenderTarget`].

#![no_std]

pub mod app;
pub mod config;
pub mod haptics;
pub mod input;
pub mod layout;
pub mod render;
pub mod schedule;
