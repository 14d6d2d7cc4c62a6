// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Composing the escape sequences around a piece of text.
//!
//! A [`StyleRequest`] is resolved against a [`PaletteTable`] into a [`ResolvedStyle`],
//! which turns into an ordered list of [`SgrCode`]s. [`StyledText`] and [`compose`]
//! put these together with the text and the trailing reset.
//!
//! [`PaletteTable`]: crate::PaletteTable

// Attach.
mod sgr_code;
mod style_request;
mod styled_text;

// Re-export.
pub use sgr_code::*;
pub use style_request::*;
pub use styled_text::*;
