// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::{ResolvedStyle, SgrCode, StyleRequest};
use crate::{ColorError, PaletteTable};

/// Text plus the resolved style to render it with. The [`Display`] impl writes:
/// 1. the codes from [`ResolvedStyle::sgr_codes`],
/// 2. the text,
/// 3. a single [`SgrCode::Reset`], so the style doesn't leak into whatever the
///    terminal prints next.
///
/// When the style is unstyled, only the text is written.
///
/// # Example usage:
///
/// ```rust
/// use cprint256::{AnsiValue, ResolvedStyle, StyledText};
///
/// let it = StyledText {
///     text: "hello",
///     style: ResolvedStyle { fg: Some(AnsiValue::new(16)), bg: None, bold: true },
/// };
/// assert_eq!(it.to_string(), "\x1b[1;38;5;16mhello\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledText<'a> {
    pub text: &'a str,
    pub style: ResolvedStyle,
}

mod display_trait_impl {
    use super::{Display, Formatter, Result, SgrCode, StyledText};

    impl Display for StyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if self.style.is_unstyled() {
                return f.write_str(self.text);
            }
            for sgr_code in &self.style.sgr_codes() {
                write!(f, "{sgr_code}")?;
            }
            f.write_str(self.text)?;
            write!(f, "{}", SgrCode::Reset)
        }
    }
}

/// Joins `values` with `sep`, and wraps the result in the escape sequences for
/// `request`, resolving its colors against `table`.
///
/// An unstyled request (no colors, not bold) returns the joined text byte for byte,
/// and never fails, since no color is resolved.
///
/// # Errors
///
/// A [`ColorError`] if a requested color is malformed or out of range. Nothing is
/// composed in that case.
///
/// # Example usage:
///
/// ```rust
/// use cprint256::{StyleRequest, compose, global_palette};
///
/// let request = StyleRequest::default().fg((0, 0, 0));
/// let it = compose(&["hi"], " ", &request, global_palette()).unwrap();
/// assert_eq!(it, "\x1b[38;5;16mhi\x1b[0m");
/// ```
pub fn compose(
    values: &[impl AsRef<str>],
    sep: &str,
    request: &StyleRequest,
    table: &PaletteTable,
) -> std::result::Result<String, ColorError> {
    let text = join(values, sep);

    if request.is_unstyled() {
        return Ok(text);
    }

    let style = request.try_resolve(table)?;
    Ok(StyledText { text: &text, style }.to_string())
}

fn join(values: &[impl AsRef<str>], sep: &str) -> String {
    let mut acc = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            acc.push_str(sep);
        }
        acc.push_str(value.as_ref());
    }
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{AnsiValue, ColorErrorKind, global_palette};

    const ESC: char = '\x1b';

    #[test_case(&["hello"], " ", "hello")]
    #[test_case(&["hello", "world"], " ", "hello world")]
    #[test_case(&["a", "b", "c"], ", ", "a, b, c")]
    #[test_case(&[], " ", "")]
    #[test_case(&["tab\there", "ünïcödé 🦜"], "", "tab\thereünïcödé 🦜")]
    fn test_unstyled_is_passthrough(values: &[&str], sep: &str, expected: &str) {
        let it = compose(values, sep, &StyleRequest::default(), global_palette()).unwrap();
        assert_eq!(it, expected);
        assert!(!it.contains(ESC));
    }

    #[test]
    fn test_bold_only() {
        let request = StyleRequest::default().bold(true);
        let it = compose(&["hello"], " ", &request, global_palette()).unwrap();
        assert_eq!(it, "\x1b[1mhello\x1b[0m");
    }

    #[test]
    fn test_fg_only() {
        let request = StyleRequest::default().fg((0, 0, 0));
        let it = compose(&["hi"], " ", &request, global_palette()).unwrap();
        assert_eq!(it, "\x1b[38;5;16mhi\x1b[0m");
    }

    #[test]
    fn test_bold_fg_share_one_code() {
        let request = StyleRequest::default().fg("#33DD44").bold(true);
        let it = compose(&["Bold green text"], " ", &request, global_palette()).unwrap();
        assert_eq!(it, "\x1b[1;38;5;77mBold green text\x1b[0m");
    }

    #[test]
    fn test_bg_only() {
        let request = StyleRequest::default().bg("#EE4488");
        let it = compose(&["pink"], " ", &request, global_palette()).unwrap();
        assert_eq!(it, "\x1b[48;5;204mpink\x1b[0m");
    }

    #[test]
    fn test_fg_before_bg_single_reset() {
        let request = StyleRequest::default().fg("#33DD44").bg("#EE4488");
        let it = compose(&["Green", "on pink"], " ", &request, global_palette()).unwrap();
        assert_eq!(it, "\x1b[38;5;77m\x1b[48;5;204mGreen on pink\x1b[0m");
        assert_eq!(it.matches("\x1b[0m").count(), 1);
    }

    #[test]
    fn test_bold_fg_bg() {
        let request = StyleRequest::default()
            .fg("#33DD44")
            .bg("#EE4488")
            .bold(true);
        let it = compose(&["x"], " ", &request, global_palette()).unwrap();
        assert_eq!(it, "\x1b[1;38;5;77m\x1b[48;5;204mx\x1b[0m");
        assert_eq!(it.matches("\x1b[0m").count(), 1);
    }

    #[test]
    fn test_bold_bg() {
        let request = StyleRequest::default().bg((0, 0, 0)).bold(true);
        let it = compose(&["x"], " ", &request, global_palette()).unwrap();
        assert_eq!(it, "\x1b[1m\x1b[48;5;16mx\x1b[0m");
    }

    #[test_case("#12345", ColorErrorKind::Format)]
    #[test_case("#12345Z", ColorErrorKind::Format)]
    fn test_invalid_hex(hex: &str, expected: ColorErrorKind) {
        let request = StyleRequest::default().fg(hex);
        let err = compose(&["x"], " ", &request, global_palette()).unwrap_err();
        assert_eq!(err.kind(), expected);
    }

    #[test]
    fn test_out_of_range() {
        let request = StyleRequest::default().bg((256, 0, 0));
        let err = compose(&["x"], " ", &request, global_palette()).unwrap_err();
        assert_eq!(err.kind(), ColorErrorKind::Range);

        let request = StyleRequest::default().bg((255, 0, 0));
        assert!(compose(&["x"], " ", &request, global_palette()).is_ok());
    }

    #[test]
    fn test_custom_table_code_zero_is_emitted() {
        let table = PaletteTable::from_entries([(
            crate::RgbColor::from_u8(0, 0, 0),
            AnsiValue::new(0),
        )]);
        let request = StyleRequest::default().fg((10, 10, 10));
        let it = compose(&["x"], " ", &request, &table).unwrap();
        assert_eq!(it, "\x1b[38;5;0mx\x1b[0m");
    }

    #[test]
    fn test_styled_text_display() {
        let unstyled = StyledText {
            text: "plain",
            style: ResolvedStyle::default(),
        };
        assert_eq!(unstyled.to_string(), "plain");

        let styled = StyledText {
            text: "styled",
            style: ResolvedStyle {
                fg: Some(AnsiValue::new(150)),
                bg: Some(AnsiValue::new(236)),
                bold: false,
            },
        };
        assert_eq!(
            styled.to_string(),
            "\x1b[38;5;150m\x1b[48;5;236mstyled\x1b[0m"
        );
    }
}
