//! Startup arguments.
//!
//! The trainer accepts the historical single-dash spellings `-import <path>`
//! and `-export <path>` as well as `--import`/`--export`. Unknown flags and
//! flags without a value are reported as warnings and dropped before clap sees
//! them, so a bad flag never stops the session. Bare values that follow no flag
//! are skipped without a warning.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flashcards", version, about = "Interactive flashcard trainer")]
pub struct Cli {
    /// Card files to load at startup, in order
    #[arg(long)]
    pub import: Vec<PathBuf>,

    /// File written with every card when the session ends with `exit`
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Arguments rewritten for clap, plus one warning per rejected flag.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Normalized {
    pub args: Vec<String>,
    pub warnings: Vec<Warning>,
}

/// A rejected flag and where it sat relative to the `-import` flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Number of imports given before this flag.
    pub imports_before: usize,
    pub message: String,
}

enum Flag {
    Import,
    Export,
    Passthrough,
}

fn classify(arg: &str) -> Option<Flag> {
    if matches!(arg, "-h" | "--help" | "-V" | "--version") {
        return Some(Flag::Passthrough);
    }
    match arg.to_lowercase().as_str() {
        "-import" | "--import" => Some(Flag::Import),
        "-export" | "--export" => Some(Flag::Export),
        _ => None,
    }
}

/// Rewrite raw process arguments (program name first) into clap's spelling.
///
/// Only the last `-export` is kept. A flag followed by another flag, or by
/// nothing, is treated as missing its value.
pub fn normalize<I>(raw: I) -> Normalized
where
    I: IntoIterator<Item = String>,
{
    let mut raw = raw.into_iter();
    let mut normalized = Normalized::default();
    normalized
        .args
        .push(raw.next().unwrap_or_else(|| "flashcards".to_string()));

    let rest: Vec<String> = raw.collect();
    let mut export = None;
    let mut imports = 0;
    let mut i = 0;

    while i < rest.len() {
        let arg = &rest[i];
        if !arg.starts_with('-') {
            tracing::debug!(arg = arg.as_str(), "skipping bare argument");
            i += 1;
            continue;
        }

        let value = rest.get(i + 1).filter(|v| !v.starts_with('-'));
        match classify(arg) {
            Some(Flag::Passthrough) => {
                normalized.args.push(arg.clone());
                i += 1;
            }
            Some(flag) => match value {
                Some(value) => {
                    match flag {
                        Flag::Import => {
                            normalized.args.push("--import".to_string());
                            normalized.args.push(value.clone());
                            imports += 1;
                        }
                        _ => export = Some(value.clone()),
                    }
                    i += 2;
                }
                None => {
                    normalized.warn(imports, format!("missing value for \"{}\"", arg));
                    i += 1;
                }
            },
            None => {
                normalized.warn(imports, format!("unknown argument \"{}\"", arg));
                i += 1;
            }
        }
    }

    if let Some(path) = export {
        normalized.args.push("--export".to_string());
        normalized.args.push(path);
    }
    normalized
}

impl Normalized {
    fn warn(&mut self, imports_before: usize, message: String) {
        self.warnings.push(Warning {
            imports_before,
            message,
        });
    }
}
