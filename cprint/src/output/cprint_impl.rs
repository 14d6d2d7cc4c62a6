// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::IntoDiagnostic;

use crate::{PaletteTable, StyleRequest, compose, global_palette};

/// How [`cprint_to`] joins and terminates the values it writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CprintOptions {
    /// Inserted between values.
    pub sep: String,
    /// Appended after the (styled) text. It is never styled.
    pub end: String,
    pub flush: bool,
}

impl Default for CprintOptions {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
            flush: false,
        }
    }
}

/// Composes `values` with `request` and writes the result followed by
/// [`CprintOptions::end`] to `writer`.
///
/// The whole line is composed before anything is written, so an invalid color
/// produces no partial output.
///
/// # Errors
///
/// - A [`crate::ColorError`] if a requested color is malformed or out of range.
/// - An I/O error from `writer`.
pub fn cprint_to(
    writer: &mut impl Write,
    values: &[impl AsRef<str>],
    request: &StyleRequest,
    options: &CprintOptions,
    table: &PaletteTable,
) -> miette::Result<()> {
    let line = compose(values, &options.sep, request, table)?;
    writer.write_all(line.as_bytes()).into_diagnostic()?;
    writer.write_all(options.end.as_bytes()).into_diagnostic()?;
    if options.flush {
        writer.flush().into_diagnostic()?;
    }
    Ok(())
}

/// [`cprint_to`] on `stdout`, with the default [`CprintOptions`] and the built-in
/// palette.
///
/// # Errors
///
/// Same as [`cprint_to`].
///
/// # Example usage:
///
/// ```rust
/// use cprint256::{StyleRequest, cprint};
///
/// cprint(&["Green text pink background"], &StyleRequest::default()
///     .fg("#33DD44")
///     .bg("#EE4488"))
/// .unwrap();
/// ```
pub fn cprint(values: &[impl AsRef<str>], request: &StyleRequest) -> miette::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    cprint_to(
        &mut handle,
        values,
        request,
        &CprintOptions::default(),
        global_palette(),
    )
}
