//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - 2D math types and angle helpers
//! - Frame timing and the fixed-timestep accumulator
//! - Logging utilities

pub mod logging;
pub mod math;
pub mod time;
