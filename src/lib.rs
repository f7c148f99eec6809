//! A Brainfuck interpreter with an unbounded tape and pluggable cell
//! arithmetic.
//!
//! The interpreter is split into three pieces:
//! - [`Program::parse`] matches brackets in a single scan and produces a
//!   validated program with every `[`/`]` linked to its counterpart, so
//!   loop transitions are O(1) at runtime.
//! - [`Tape`] is a sparse cell store over signed addresses, unbounded in
//!   both directions; unwritten cells read as zero.
//! - [`Machine`] runs the fetch-decode-execute loop, with input and output
//!   collaborators that default to stdin/stdout and can be swapped for
//!   closures.
//!
//! Cell arithmetic is chosen per machine via [`CellPolicy`]: unbounded
//! integers (the default; printing fails for values that are not valid
//! codepoints) or bytes wrapping modulo 256 (printing never fails;
//! signedness only affects how values are reported).
//!
//! Non-instruction characters are comments. Input reads one line per `,`
//! and requires it to hold exactly one character; anything else is an
//! error, never a silent truncation.
//!
//! Quick start:
//!
//! ```no_run
//! use bft::{CellPolicy, Machine, Program};
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let program = Program::parse(code).expect("brackets should balance");
//! let mut machine = Machine::new(program, CellPolicy::default());
//! machine.run().expect("program should run");
//! println!(); // ensure a trailing newline for readability
//! ```

pub mod cli_util;
mod error;
mod instruction;
mod machine;
mod policy;
mod program;
mod tape;

pub use error::{BracketKind, Error, ParseError, RuntimeError};
pub use instruction::{Instruction, OpCode, filter_instructions};
pub use machine::Machine;
pub use policy::{CellPolicy, Signedness};
pub use program::Program;
pub use tape::Tape;
