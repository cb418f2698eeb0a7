//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to react to edge-triggered
//! input without polling the input resource themselves.
//!
//! Submodules:
//! - [`input`] – logical input actions emitted on key press/release edges

pub mod input;
