// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turning user supplied colors into palette codes.
//!
//! This module provides:
//! - **Primitive type**: [`RgbColor`] (8 bits per channel, always valid)
//! - **Input type**: [`ColorSpec`], a hex string or a raw integer triple
//! - **Validation**: [`hex_to_rgb`] and [`validate_rgb`], both returning
//!   [`ColorError`]
//! - **Nearest color search**: [`nearest_palette_code`] over a [`PaletteTable`]
//!
//! [`PaletteTable`]: crate::PaletteTable

// Attach.
mod color_error;
mod color_resolver;
mod color_spec;
mod hex_color_parser;
mod rgb_color;

// Re-export.
pub use color_error::*;
pub use color_resolver::*;
pub use color_spec::*;
pub use hex_color_parser::*;
pub use rgb_color::*;
