// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised while turning a user supplied color into an [`RgbColor`].
//!
//! There are two kinds of failure, see [`ColorErrorKind`]:
//! - **Format**: the input can't be read as a color at all (bad hex string, bad
//!   `r,g,b` triple).
//! - **Range**: the input is a well formed triple, but a component is outside
//!   `0..=255`.
//!
//! [`RgbColor`]: crate::RgbColor

/// Which family a [`ColorError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorErrorKind {
    Format,
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorError {
    #[error("Hex color '{input}' must have 6 digits (besides the #), found {len}")]
    #[diagnostic(
        code(cprint256::color::hex_length),
        help("Use the form #RRGGBB or RRGGBB, eg: #33DD44")
    )]
    InvalidHexLength { input: String, len: usize },

    #[error("Hex color '{input}' contains a digit pair outside 00-FF")]
    #[diagnostic(
        code(cprint256::color::hex_digit),
        help("Each pair of characters must be a hex number, eg: 0A, ff, 7C")
    )]
    InvalidHexDigit { input: String },

    #[error("RGB color '{input}' must be three comma separated integers")]
    #[diagnostic(code(cprint256::color::rgb_triple), help("Use the form r,g,b eg: 255,128,0"))]
    InvalidRgbTriple { input: String },

    #[error("RGB {channel} value {value} is outside the range 0-255")]
    #[diagnostic(code(cprint256::color::out_of_range))]
    ComponentOutOfRange { channel: &'static str, value: i32 },
}

impl ColorError {
    #[must_use]
    pub fn kind(&self) -> ColorErrorKind {
        match self {
            ColorError::InvalidHexLength { .. }
            | ColorError::InvalidHexDigit { .. }
            | ColorError::InvalidRgbTriple { .. } => ColorErrorKind::Format,
            ColorError::ComponentOutOfRange { .. } => ColorErrorKind::Range,
        }
    }
}
