// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use super::SgrCode;
use crate::{AnsiValue, ColorError, ColorSpec, PaletteTable, try_resolve_palette_code};

/// What the caller asked for in a single styling call: colors as typed by the user,
/// and whether the text is bold.
///
/// # Example usage:
///
/// ```rust
/// use cprint256::{StyleRequest, global_palette};
///
/// let request = StyleRequest::default().fg("#33DD44").bg((238, 68, 136)).bold(true);
/// let style = request.try_resolve(global_palette()).unwrap();
/// assert_eq!(style.fg.map(|it| it.index), Some(77));
/// assert_eq!(style.bg.map(|it| it.index), Some(204));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRequest {
    pub fg: Option<ColorSpec>,
    pub bg: Option<ColorSpec>,
    pub bold: bool,
}

impl StyleRequest {
    #[must_use]
    pub fn fg(mut self, color: impl Into<ColorSpec>) -> Self {
        self.fg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, color: impl Into<ColorSpec>) -> Self {
        self.bg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// No colors and not bold. Such a request produces no escape sequences at all.
    #[must_use]
    pub fn is_unstyled(&self) -> bool { self.fg.is_none() && self.bg.is_none() && !self.bold }

    /// Resolves each requested color to its nearest code in `table`. The background is
    /// resolved first, so if both colors are invalid the background's error is the one
    /// returned.
    ///
    /// # Errors
    ///
    /// The first [`ColorError`] hit while validating a requested color.
    pub fn try_resolve(&self, table: &PaletteTable) -> Result<ResolvedStyle, ColorError> {
        let bg = self
            .bg
            .as_ref()
            .map(|it| try_resolve_palette_code(it, table))
            .transpose()?;
        let fg = self
            .fg
            .as_ref()
            .map(|it| try_resolve_palette_code(it, table))
            .transpose()?;
        Ok(ResolvedStyle {
            fg,
            bg,
            bold: self.bold,
        })
    }
}

/// Attributes are: bold + fg, bg. See [`ResolvedStyle::sgr_codes`].
pub const MAX_SGR_CODES: usize = 2;
pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_SGR_CODES]>;

/// A [`StyleRequest`] after its colors were mapped to palette codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub fg: Option<AnsiValue>,
    pub bg: Option<AnsiValue>,
    pub bold: bool,
}

impl ResolvedStyle {
    #[must_use]
    pub fn is_unstyled(&self) -> bool { self.fg.is_none() && self.bg.is_none() && !self.bold }

    /// The codes to emit before the text, in order:
    /// 1. [`SgrCode::Bold`] only when bold and there's no foreground color.
    /// 2. [`SgrCode::BoldForegroundAnsi256`] when bold with a foreground color, else
    ///    [`SgrCode::ForegroundAnsi256`] when there's a foreground color.
    /// 3. [`SgrCode::BackgroundAnsi256`] when there's a background color.
    ///
    /// The reset that goes after the text is not part of this list.
    #[must_use]
    pub fn sgr_codes(&self) -> InlineVecSgrCodes {
        let mut acc = InlineVecSgrCodes::new();

        match (self.bold, self.fg) {
            (true, None) => acc.push(SgrCode::Bold),
            (true, Some(fg)) => acc.push(SgrCode::BoldForegroundAnsi256(fg.index)),
            (false, Some(fg)) => acc.push(SgrCode::ForegroundAnsi256(fg.index)),
            (false, None) => {}
        }

        if let Some(bg) = self.bg {
            acc.push(SgrCode::BackgroundAnsi256(bg.index));
        }

        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;
    use test_case::test_case;

    use super::*;
    use crate::{ColorErrorKind, global_palette};

    #[test]
    fn test_builder() {
        let request = StyleRequest::default().fg("#33DD44").bg((1, 2, 3)).bold(true);
        assert_eq!(
            request,
            StyleRequest {
                fg: Some(ColorSpec::Hex("#33DD44".into())),
                bg: Some(ColorSpec::Rgb(1, 2, 3)),
                bold: true,
            }
        );
        assert!(!request.is_unstyled());
        assert!(StyleRequest::default().is_unstyled());
        assert!(!StyleRequest::default().bold(true).is_unstyled());
    }

    #[test]
    fn test_try_resolve() {
        let style = StyleRequest::default()
            .fg((0, 0, 0))
            .try_resolve(global_palette())
            .unwrap();
        assert_eq!(
            style,
            ResolvedStyle {
                fg: Some(AnsiValue::new(16)),
                bg: None,
                bold: false,
            }
        );
    }

    #[test]
    fn test_try_resolve_surfaces_errors() {
        let err = StyleRequest::default()
            .fg("#12345")
            .try_resolve(global_palette())
            .unwrap_err();
        assert_eq!(err.kind(), ColorErrorKind::Format);

        let err = StyleRequest::default()
            .bg((256, 0, 0))
            .bold(true)
            .try_resolve(global_palette())
            .unwrap_err();
        assert_eq!(err.kind(), ColorErrorKind::Range);
    }

    #[test_case(false, None, None, smallvec![])]
    #[test_case(true, None, None, smallvec![SgrCode::Bold])]
    #[test_case(false, Some(16), None, smallvec![SgrCode::ForegroundAnsi256(16)])]
    #[test_case(true, Some(16), None, smallvec![SgrCode::BoldForegroundAnsi256(16)])]
    #[test_case(false, None, Some(204), smallvec![SgrCode::BackgroundAnsi256(204)])]
    #[test_case(
        true, None, Some(204),
        smallvec![SgrCode::Bold, SgrCode::BackgroundAnsi256(204)]
    )]
    #[test_case(
        true, Some(77), Some(204),
        smallvec![SgrCode::BoldForegroundAnsi256(77), SgrCode::BackgroundAnsi256(204)]
    )]
    #[test_case(
        false, Some(77), Some(204),
        smallvec![SgrCode::ForegroundAnsi256(77), SgrCode::BackgroundAnsi256(204)]
    )]
    fn test_sgr_codes(bold: bool, fg: Option<u8>, bg: Option<u8>, expected: InlineVecSgrCodes) {
        let style = ResolvedStyle {
            fg: fg.map(AnsiValue::new),
            bg: bg.map(AnsiValue::new),
            bold,
        };
        assert_eq!(style.sgr_codes(), expected);
        assert_eq!(style.is_unstyled(), expected.is_empty());
    }
}
