// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use clap::Parser;
use cprint256::{CprintOptions,
                PaletteTable,
                StyleRequest,
                TracingConfig,
                cprint_to,
                global_palette,
                init_tracing};
use miette::IntoDiagnostic;

use crate::clap_config::CLIArg;

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.global_options.enable_logging {
        init_tracing(TracingConfig::new_stderr())?;
        tracing::debug!(?cli_arg, "cprint started");
    }

    // Explicit palette initialization: either the built-in table or a JSON resource.
    let loaded_palette;
    let table = match &cli_arg.palette {
        Some(path) => {
            loaded_palette = PaletteTable::try_load_from_file(path)?;
            &loaded_palette
        }
        None => global_palette(),
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if cli_arg.demo {
        print_demo(&mut handle, table)?;
    } else {
        let request = StyleRequest {
            fg: cli_arg.fg,
            bg: cli_arg.bg,
            bold: cli_arg.bold,
        };
        let options = CprintOptions {
            sep: cli_arg.sep,
            end: cli_arg.end,
            flush: true,
        };
        cprint_to(
            &mut handle,
            cli_arg.values.as_slice(),
            &request,
            &options,
            table,
        )?;
    }

    handle.flush().into_diagnostic()
}

/// Prints one line for each combination of bold, text color and background color.
fn print_demo(writer: &mut impl Write, table: &PaletteTable) -> miette::Result<()> {
    let green = "#33DD44";
    let pink = "#EE4488";
    let lines = [
        ("This is not bold no color", StyleRequest::default()),
        ("This is bold no color", StyleRequest::default().bold(true)),
        ("Not bold green text", StyleRequest::default().fg(green)),
        ("Bold green text", StyleRequest::default().fg(green).bold(true)),
        (
            "Green text pink background",
            StyleRequest::default().fg(green).bg(pink),
        ),
        (
            "Green text bold pink background",
            StyleRequest::default().fg(green).bg(pink).bold(true),
        ),
    ];
    let options = CprintOptions::default();
    for (text, request) in &lines {
        cprint_to(&mut *writer, &[text], request, &options, table)?;
    }
    Ok(())
}

mod clap_config {
    use clap::{Args, Parser};
    use cprint256::ColorSpec;

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "cprint")]
    #[command(about = "🎨 Print text in the nearest ANSI 256 color to any RGB or hex color")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    /// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
    #[command(
        help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide text values, separated by spaces, to print. Colors are #RRGGBB, RRGGBB, or r,g,b.\nUSAGE 📓:\n  cprint [\x1b[32mvalues\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
    )]
    pub struct CLIArg {
        #[arg(name = "values")]
        pub values: Vec<String>,

        #[arg(
            long,
            value_name = "COLOR",
            allow_hyphen_values = true,
            help = "Text color, eg: #33DD44 or 51,221,68"
        )]
        pub fg: Option<ColorSpec>,

        #[arg(
            long,
            value_name = "COLOR",
            allow_hyphen_values = true,
            help = "Background color, eg: #EE4488 or 238,68,136"
        )]
        pub bg: Option<ColorSpec>,

        #[arg(long, short = 'b', help = "Print the text in bold")]
        pub bold: bool,

        #[arg(long, default_value = " ", help = "String inserted between values")]
        pub sep: String,

        #[arg(
            long,
            default_value = "\n",
            hide_default_value = true,
            help = "String appended after the last value [default: newline]"
        )]
        pub end: String,

        #[arg(
            long,
            value_name = "PATH",
            help = "JSON palette resource of \"r,g,b\": code pairs, instead of the built-in xterm palette"
        )]
        pub palette: Option<std::path::PathBuf>,

        #[arg(long, help = "Print sample lines for each style combination and exit")]
        pub demo: bool,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log debug output to stderr."
        )]
        pub enable_logging: bool,
    }
}
