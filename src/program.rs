//! Bracket matching and program construction.

use crate::error::{BracketKind, ParseError};
use crate::instruction::{Instruction, OpCode};

/// A validated program: ordered instructions with every bracket linked to
/// its counterpart.
#[derive(Debug, Clone)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Parse source text into a program.
    ///
    /// Non-instruction characters are comments and are skipped, so
    /// instruction positions index the filtered instruction stream.
    /// Bracket targets are resolved in a single left-to-right scan over a
    /// stack of open-bracket positions; matching happens exactly once,
    /// before execution, making every loop transition O(1) at runtime.
    ///
    /// Empty input (or input that is all comments) yields an empty, valid
    /// program.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut instructions: Vec<Instruction> = Vec::new();
        let mut open_brackets: Vec<usize> = Vec::new();

        for c in source.chars() {
            let Some(opcode) = OpCode::from_char(c) else {
                continue;
            };
            let position = instructions.len();
            instructions.push(Instruction::new(opcode, position));

            match opcode {
                OpCode::LoopStart => open_brackets.push(position),
                OpCode::LoopEnd => {
                    let Some(open) = open_brackets.pop() else {
                        return Err(ParseError::UnbalancedBrackets {
                            position,
                            kind: BracketKind::Close,
                        });
                    };
                    instructions[open].link(position);
                    instructions[position].link(open);
                }
                _ => {}
            }
        }

        if let Some(unmatched_open) = open_brackets.last().copied() {
            return Err(ParseError::UnbalancedBrackets {
                position: unmatched_open,
                kind: BracketKind::Open,
            });
        }

        Ok(Self { instructions })
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}
