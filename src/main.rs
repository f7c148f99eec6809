use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use bft::{CellPolicy, Machine, Program, Signedness, cli_util, filter_instructions};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "bft",
    version,
    about = "Run a Brainfuck program from a file or stdin"
)]
struct Cli {
    /// Program file; the program is read from stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Cell arithmetic: unbounded integers, or bytes wrapping modulo 256
    #[arg(long = "cells", value_enum, default_value = "unbounded")]
    cells: CellMode,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CellMode {
    /// Plain integers; printing fails outside the valid codepoint range
    Unbounded,
    /// Unsigned bytes, wrapping modulo 256
    U8,
    /// Signed bytes, wrapping modulo 256; signedness affects reporting only
    I8,
}

impl From<CellMode> for CellPolicy {
    fn from(mode: CellMode) -> Self {
        match mode {
            CellMode::Unbounded => CellPolicy::Unbounded,
            CellMode::U8 => CellPolicy::Byte(Signedness::Unsigned),
            CellMode::I8 => CellPolicy::Byte(Signedness::Signed),
        }
    }
}

fn run(program_name: &str, cli: Cli) -> i32 {
    let source = match cli.file {
        Some(path) => match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{program_name}: failed to read {}: {e}", path.display());
                let _ = io::stderr().flush();
                return 1;
            }
        },
        None => {
            let mut s = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut s) {
                eprintln!("{program_name}: failed to read program from stdin: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
            s
        }
    };

    // Keep the filtered text around so error carets line up with positions.
    let code = filter_instructions(&source);

    let program = match Program::parse(&code) {
        Ok(p) => p,
        Err(err) => {
            cli_util::report_parse_error(program_name, &code, &err);
            return 1;
        }
    };

    let mut machine = Machine::new(program, cli.cells.into());
    if let Err(err) = machine.run() {
        let _ = io::stdout().flush();
        cli_util::report_runtime_error(program_name, &code, &err);
        return 1;
    }

    println!("\nExiting...");
    let _ = io::stdout().flush();
    0
}

fn main() {
    let program_name = env::args().next().unwrap_or_else(|| String::from("bft"));
    let cli = Cli::parse();
    std::process::exit(run(&program_name, cli));
}
