// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette code.

use super::ansi_constants::ANSI_COLOR_PALETTE;
use crate::RgbColor;

/// A code in the ANSI 256-color palette. Each index (0-255) maps to a specific color
/// in the xterm palette, see [`ANSI_COLOR_PALETTE`].
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// The canonical xterm RGB value of this code.
    #[must_use]
    pub fn as_rgb(&self) -> RgbColor { ANSI_COLOR_PALETTE[usize::from(self.index)].into() }
}
