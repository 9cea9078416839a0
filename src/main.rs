// SPDX-License-Identifier: MIT
//
// dekode — render source code as a themed, shareable code image.
//
// This is the thin CLI over the two library crates:
//
//   dekode-theme  → color schemes (builtin presets, custom JSON themes)
//   dekode-engine → the formatting pipeline (recognize → indent →
//                   tokenize → colorize → document)
//
// A run reads one source file, formats it with the selected theme and
// options, and writes a self-contained HTML document to stdout or a file.
// Feed that document to any screenshot tool to get the actual image.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use dekode_engine::{Formatter, OptionsPatch};
use dekode_theme::builtin::{builtin_names, builtin_theme};
use dekode_theme::Theme;

// ─── Argument parsing ────────────────────────────────────────────────────────

/// Parsed command line.
struct Args {
    /// Source file to format.
    file: Option<PathBuf>,
    /// Builtin theme name (`--theme`).
    theme: Option<String>,
    /// Custom theme JSON path (`--theme-file`). Wins over `--theme`.
    theme_file: Option<PathBuf>,
    /// Output path; stdout when absent.
    out: Option<PathBuf>,
    /// Formatting option overrides.
    patch: OptionsPatch,
    /// `--list-themes`.
    list_themes: bool,
}

fn usage() -> ! {
    eprintln!(
        "usage: dekode [OPTIONS] <FILE>\n\
         \n\
         options:\n\
         \x20 --theme <NAME>       builtin theme (default: dark-plus)\n\
         \x20 --theme-file <PATH>  custom VS Code-style JSON theme\n\
         \x20 --out <PATH>         write the document here (default: stdout)\n\
         \x20 --indent <N>         spaces per indent level\n\
         \x20 --tabs               indent with tabs\n\
         \x20 --no-line-numbers    hide the line-number gutter\n\
         \x20 --no-wrap            do not wrap long lines\n\
         \x20 --list-themes        print builtin theme names and exit"
    );
    process::exit(1);
}

fn fail(message: &str) -> ! {
    eprintln!("dekode: {message}");
    process::exit(1);
}

/// Parse the command line. Exits with usage on malformed input.
fn parse_args(argv: &[String]) -> Args {
    let mut args = Args {
        file: None,
        theme: None,
        theme_file: None,
        out: None,
        patch: OptionsPatch::default(),
        list_themes: false,
    };

    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--theme" => {
                args.theme = Some(take_value(&mut iter, "--theme"));
            }
            "--theme-file" => {
                args.theme_file = Some(PathBuf::from(take_value(&mut iter, "--theme-file")));
            }
            "--out" => {
                args.out = Some(PathBuf::from(take_value(&mut iter, "--out")));
            }
            "--indent" => {
                let value = take_value(&mut iter, "--indent");
                match value.parse::<usize>() {
                    Ok(n) if n > 0 => args.patch.indent_size = Some(n),
                    _ => fail(&format!("--indent expects a positive integer, got '{value}'")),
                }
            }
            "--tabs" => args.patch.use_tabs = Some(true),
            "--no-line-numbers" => args.patch.line_numbers = Some(false),
            "--no-wrap" => args.patch.wrap_code = Some(false),
            "--list-themes" => args.list_themes = true,
            "--help" | "-h" => usage(),
            flag if flag.starts_with('-') => {
                eprintln!("dekode: unknown option '{flag}'");
                usage();
            }
            _ => {
                if args.file.is_some() {
                    eprintln!("dekode: more than one input file");
                    usage();
                }
                args.file = Some(PathBuf::from(arg));
            }
        }
    }

    args
}

fn take_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> String {
    iter.next()
        .unwrap_or_else(|| fail(&format!("{flag} expects a value")))
        .clone()
}

// ─── Theme resolution ────────────────────────────────────────────────────────

/// Resolve the theme: a custom file wins, then a builtin name, then the
/// default.
fn resolve_theme(args: &Args) -> Theme {
    if let Some(path) = &args.theme_file {
        return Theme::load(path)
            .unwrap_or_else(|e| fail(&format!("{}: {e}", path.display())));
    }

    let name = args.theme.as_deref().unwrap_or("dark-plus");
    builtin_theme(name).unwrap_or_else(|| {
        fail(&format!(
            "unknown theme '{name}' (try one of: {})",
            builtin_names().join(", ")
        ))
    })
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&argv);

    if args.list_themes {
        for name in builtin_names() {
            println!("{name}");
        }
        return;
    }

    let Some(file) = &args.file else {
        usage();
    };

    let code = fs::read_to_string(file)
        .unwrap_or_else(|e| fail(&format!("{}: {e}", file.display())));

    let theme = resolve_theme(&args);
    let formatter = Formatter::with_options(theme, args.patch);

    // The file's own name is the recognition hint.
    let filename = file
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string);
    let html = formatter.format(&code, filename.as_deref());

    match &args.out {
        Some(out) => write_output(out, &html),
        None => print!("{html}"),
    }
}

fn write_output(path: &Path, html: &str) {
    if let Err(e) = fs::write(path, html) {
        fail(&format!("{}: {e}", path.display()));
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
