//! Input adapters for the viewer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into viewer events.

#[cfg(feature = "gui")]
pub mod gui;
