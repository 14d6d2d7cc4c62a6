// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Failures of the explicit palette loaders, see [`crate::PaletteTable::try_load_from_file`].
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum PaletteLoadError {
    #[error("📑 Could not read palette resource: '{path}'")]
    #[diagnostic(code(cprint256::palette::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("📦 Palette resource is not a JSON object of \"r,g,b\": code pairs")]
    #[diagnostic(code(cprint256::palette::json))]
    Json(#[source] serde_json::Error),

    #[error("🔍 Palette key '{key}' is not three comma separated values in 0-255")]
    #[diagnostic(code(cprint256::palette::invalid_key))]
    InvalidKey { key: String },

    #[error("🔍 Palette code {code} for key '{key}' is outside the range 0-255")]
    #[diagnostic(code(cprint256::palette::invalid_code))]
    InvalidCode { key: String, code: i64 },

    #[error("❌ Palette resource has no entries")]
    #[diagnostic(
        code(cprint256::palette::empty),
        help("Omit the palette path to use the built-in xterm palette")
    )]
    Empty,
}
