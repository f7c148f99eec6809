use std::fmt;

/// The eight Brainfuck opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// `>`: move the data pointer one cell to the right.
    MoveRight,
    /// `<`: move the data pointer one cell to the left.
    MoveLeft,
    /// `+`: increment the current cell.
    Inc,
    /// `-`: decrement the current cell.
    Dec,
    /// `.`: emit the current cell as a character.
    Output,
    /// `,`: read one character into the current cell.
    Input,
    /// `[`: jump past the matching `]` when the current cell is zero.
    LoopStart,
    /// `]`: jump back to the matching `[` when the current cell is non-zero.
    LoopEnd,
}

impl OpCode {
    /// Map an instruction character to its opcode. Every other character is
    /// a comment and maps to `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(OpCode::MoveRight),
            '<' => Some(OpCode::MoveLeft),
            '+' => Some(OpCode::Inc),
            '-' => Some(OpCode::Dec),
            '.' => Some(OpCode::Output),
            ',' => Some(OpCode::Input),
            '[' => Some(OpCode::LoopStart),
            ']' => Some(OpCode::LoopEnd),
            _ => None,
        }
    }

    /// The source character this opcode was read from.
    pub fn as_char(self) -> char {
        match self {
            OpCode::MoveRight => '>',
            OpCode::MoveLeft => '<',
            OpCode::Inc => '+',
            OpCode::Dec => '-',
            OpCode::Output => '.',
            OpCode::Input => ',',
            OpCode::LoopStart => '[',
            OpCode::LoopEnd => ']',
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single decoded instruction.
///
/// `position` is the instruction's index in the program (comments excluded).
/// Brackets additionally carry the index of their matched counterpart,
/// resolved once at parse time; the field is `None` for the other six
/// opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    opcode: OpCode,
    position: usize,
    jump_target: Option<usize>,
}

impl Instruction {
    pub(crate) fn new(opcode: OpCode, position: usize) -> Self {
        Self {
            opcode,
            position,
            jump_target: None,
        }
    }

    pub(crate) fn link(&mut self, target: usize) {
        self.jump_target = Some(target);
    }

    pub fn opcode(&self) -> OpCode {
        self.opcode
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the matched bracket, for `LoopStart`/`LoopEnd` only.
    pub fn jump_target(&self) -> Option<usize> {
        self.jump_target
    }
}

/// Keep only Brainfuck instruction characters.
pub fn filter_instructions(source: &str) -> String {
    source
        .chars()
        .filter(|c| OpCode::from_char(*c).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_char_mapping_round_trips() {
        for c in ['>', '<', '+', '-', '.', ',', '[', ']'] {
            let op = OpCode::from_char(c).unwrap();
            assert_eq!(op.as_char(), c);
        }
    }

    #[test]
    fn non_instruction_characters_are_comments() {
        for c in ['a', ' ', '\n', '0', '"', '!'] {
            assert!(OpCode::from_char(c).is_none());
        }
    }

    #[test]
    fn filter_drops_everything_but_instructions() {
        let source = "read a char then echo it: , . done!";
        assert_eq!(filter_instructions(source), ",.");
    }

    #[test]
    fn filter_keeps_instruction_order() {
        assert_eq!(filter_instructions("+a+b[c]d"), "++[]");
    }
}
