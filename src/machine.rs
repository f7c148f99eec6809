//! The execution engine.
//!
//! A [`Machine`] runs the fetch-decode-execute loop over a validated
//! [`Program`] and an owned [`Tape`]. Execution is single-threaded and
//! synchronous; the only blocking operation is `,`, which waits on the
//! input source. There is no step limit and no timeout: an infinite loop
//! runs forever, which is correct language semantics.

use std::io::{self, BufRead, Write};

use crate::error::RuntimeError;
use crate::instruction::OpCode;
use crate::policy::CellPolicy;
use crate::program::Program;
use crate::tape::Tape;

/// Supplies one raw line per `,` instruction. The engine strips a single
/// trailing newline and requires exactly one character to remain.
type InputSource = Box<dyn FnMut() -> io::Result<String>>;

/// Receives one character per `.` instruction, in execution order.
type OutputSink = Box<dyn FnMut(char) -> io::Result<()>>;

pub struct Machine {
    program: Program,
    tape: Tape,
    data_pointer: i64,
    instruction_pointer: usize,
    input_source: Option<InputSource>,
    output_sink: Option<OutputSink>,
}

impl Machine {
    /// Build a machine for `program` with the given cell policy.
    ///
    /// The policy is fixed for the life of the machine. The data pointer
    /// starts at address 0, the instruction pointer at index 0, and every
    /// cell implicitly at zero.
    pub fn new(program: Program, policy: CellPolicy) -> Self {
        Self {
            program,
            tape: Tape::new(policy),
            data_pointer: 0,
            instruction_pointer: 0,
            input_source: None,
            output_sink: None,
        }
    }

    /// Provide an input source. When set, `,` pulls lines from it instead
    /// of stdin.
    pub fn set_input_source<F>(&mut self, source: F)
    where
        F: FnMut() -> io::Result<String> + 'static,
    {
        self.input_source = Some(Box::new(source));
    }

    /// Provide an output sink. When set, `.` sends characters to it instead
    /// of stdout.
    pub fn set_output_sink<F>(&mut self, sink: F)
    where
        F: FnMut(char) -> io::Result<()> + 'static,
    {
        self.output_sink = Some(Box::new(sink));
    }

    pub fn instruction_pointer(&self) -> usize {
        self.instruction_pointer
    }

    pub fn data_pointer(&self) -> i64 {
        self.data_pointer
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Run until the instruction pointer passes the end of the program.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while self.instruction_pointer < self.program.len() {
            self.step()?;
        }
        Ok(())
    }

    /// Execute the instruction under the instruction pointer.
    ///
    /// Every instruction, jumps included, ends with the pointer advancing
    /// by one: a `[` that jumps lands on its `]` and the advance steps just
    /// past the loop; a `]` that jumps lands on its `[` and the advance
    /// steps to the first instruction of the body.
    fn step(&mut self) -> Result<(), RuntimeError> {
        let ip = self.instruction_pointer;
        let instruction = self.program.instructions()[ip];

        match instruction.opcode() {
            OpCode::MoveRight => self.data_pointer += 1,
            OpCode::MoveLeft => self.data_pointer -= 1,
            OpCode::Inc => self.tape.apply_delta(self.data_pointer, 1),
            OpCode::Dec => self.tape.apply_delta(self.data_pointer, -1),
            OpCode::Output => {
                let value = self.tape.get(self.data_pointer);
                let c = self
                    .tape
                    .policy()
                    .to_output_char(value)
                    .ok_or(RuntimeError::CharacterRange { ip, value })?;
                self.emit(ip, c)?;
            }
            OpCode::Input => {
                let line = self.read_line(ip)?;
                let unit = strip_newline(&line);
                let mut chars = unit.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.tape.set(self.data_pointer, i64::from(u32::from(c))),
                    _ => {
                        return Err(RuntimeError::InputFormat {
                            ip,
                            got: unit.to_string(),
                        });
                    }
                }
            }
            OpCode::LoopStart => {
                if self.tape.get(self.data_pointer) == 0 {
                    self.instruction_pointer =
                        instruction.jump_target().expect("validated bracket");
                }
            }
            OpCode::LoopEnd => {
                if self.tape.get(self.data_pointer) != 0 {
                    self.instruction_pointer =
                        instruction.jump_target().expect("validated bracket");
                }
            }
        }

        self.instruction_pointer += 1;
        Ok(())
    }

    fn emit(&mut self, ip: usize, c: char) -> Result<(), RuntimeError> {
        let result = match self.output_sink.as_mut() {
            Some(sink) => sink(c),
            None => write!(io::stdout(), "{c}"),
        };
        result.map_err(|source| RuntimeError::Io { ip, source })
    }

    fn read_line(&mut self, ip: usize) -> Result<String, RuntimeError> {
        let result = match self.input_source.as_mut() {
            Some(source) => source(),
            None => {
                let mut line = String::new();
                io::stdin().lock().read_line(&mut line).map(|_| line)
            }
        };
        result.map_err(|source| RuntimeError::Io { ip, source })
    }
}

/// Drop one trailing `\n` or `\r\n`.
fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(line)
}
