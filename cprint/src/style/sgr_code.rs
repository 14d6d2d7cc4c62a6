// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

/// The SGR codes this crate emits. Bold and foreground color share a single sequence
/// ([`SgrCode::BoldForegroundAnsi256`]) rather than being stacked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    ForegroundAnsi256(u8),
    BoldForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                        => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                         => write!(f, "{CSI}1{SGR}"),
                SgrCode::ForegroundAnsi256(index)     => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BoldForegroundAnsi256(index) => write!(f, "{CSI}1;38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index)     => write!(f, "{CSI}48;5;{index}{SGR}"),
            }
        }
    }
}
