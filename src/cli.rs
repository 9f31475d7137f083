//! `jsonedit` command-line front end: hand-rolled argument parsing (no
//! `clap`, matching the teacher crate's own CLI) over the library's
//! `set`/`set_raw`/`delete` entry points.

use crate::{EditOptions, delete_opts, set_opts, set_raw_opts};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} <set|delete> <PATH> [VALUE] [INPUT] [OPTIONS]\n\
         \n\
         PATH:  dotted path expression (see README for escape/wildcard rules)\n\
         VALUE: required for `set`, ignored for `delete`\n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE   Write output to FILE (default stdout)\n\
               --in-place      Overwrite INPUT file (requires INPUT)\n\
               --raw           Treat VALUE as pre-encoded JSON, spliced verbatim\n\
               --int           Parse VALUE as an i64\n\
               --float         Parse VALUE as an f64\n\
               --bool          Parse VALUE as a bool\n\
               --string        Treat VALUE as a string literal (default for `set`)\n\
               --ensure-ascii  Escape non-ASCII string bytes as \\uXXXX\n\
           -h, --help          Show this help\n",
        prog = program
    );
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    String,
    Int,
    Float,
    Bool,
}

struct CliMode {
    op: String,
    path: String,
    value: Option<String>,
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    raw: bool,
    kind: ValueKind,
}

fn parse_args() -> (EditOptions, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "jsonedit".to_string());
    args.remove(0);

    let mut opts = EditOptions::default();
    let mut output: Option<String> = None;
    let mut in_place = false;
    let mut raw = false;
    let mut kind = ValueKind::String;
    let mut positionals: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--in-place" => in_place = true,
            "--raw" => raw = true,
            "--int" => kind = ValueKind::Int,
            "--float" => kind = ValueKind::Float,
            "--bool" => kind = ValueKind::Bool,
            "--string" => kind = ValueKind::String,
            "--ensure-ascii" => opts.ensure_ascii = true,
            s if s.starts_with('-') && s.len() > 1 => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            other => positionals.push(other.to_string()),
        }
        i += 1;
    }

    if positionals.is_empty() {
        print_help(&program);
        std::process::exit(2);
    }
    let op = positionals.remove(0);
    if positionals.is_empty() {
        eprintln!("Missing PATH");
        std::process::exit(2);
    }
    let path = positionals.remove(0);

    let value = if op == "set" {
        if positionals.is_empty() {
            eprintln!("`set` requires a VALUE argument");
            std::process::exit(2);
        }
        Some(positionals.remove(0))
    } else {
        None
    };
    let input = positionals.into_iter().next();

    let mode = CliMode { op, path, value, input, output, in_place, raw, kind };
    (opts, mode)
}

fn read_input(mode: &CliMode) -> io::Result<String> {
    match &mode.input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn apply(doc: &str, mode: &CliMode, opts: &EditOptions) -> Result<String, Box<dyn std::error::Error>> {
    match mode.op.as_str() {
        "delete" => Ok(delete_opts(doc, &mode.path, opts)?),
        "set" => {
            let value = mode.value.as_deref().expect("parse_args requires VALUE for set");
            if mode.raw {
                Ok(set_raw_opts(doc, &mode.path, value, opts)?)
            } else {
                match mode.kind {
                    ValueKind::Int => Ok(set_opts(doc, &mode.path, value.parse::<i64>()?, opts)?),
                    ValueKind::Float => Ok(set_opts(doc, &mode.path, value.parse::<f64>()?, opts)?),
                    ValueKind::Bool => Ok(set_opts(doc, &mode.path, value.parse::<bool>()?, opts)?),
                    ValueKind::String => Ok(set_opts(doc, &mode.path, value.as_str(), opts)?),
                }
            }
        }
        other => {
            eprintln!("Unknown operation: {other} (expected `set` or `delete`)");
            std::process::exit(2);
        }
    }
}

/// Parses `env::args()`, runs the requested edit, and writes the result to
/// the requested destination. Exits the process directly on usage errors,
/// the same way the teacher's `cli::run` does.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();
    let doc = read_input(&mode)?;
    let out = apply(&doc, &mode, &opts)?;

    if mode.in_place {
        let inp = mode.input.as_ref().ok_or("--in-place requires INPUT file")?;
        fs::write(inp, out)?;
        return Ok(());
    }

    let mut w: Box<dyn Write> = match &mode.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    w.write_all(out.as_bytes())?;
    Ok(())
}
