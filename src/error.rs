use std::fmt;

/// Which side of a loop was left unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}

/// Errors detected while matching brackets, before any instruction executes.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A `[` without a matching `]`, or a stray `]`.
    #[error("unbalanced brackets: unmatched {kind} at instruction {position}")]
    UnbalancedBrackets { position: usize, kind: BracketKind },
}

/// Errors raised by the execution engine. All of them are fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The input source did not yield exactly one character.
    #[error("input must be exactly one character, got {got:?} at instruction {ip}")]
    InputFormat { ip: usize, got: String },

    /// The cell value has no character representation under the unbounded
    /// policy.
    #[error("cell value {value} at instruction {ip} is not a valid character")]
    CharacterRange { ip: usize, value: i64 },

    /// The input source or output sink failed.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Either phase's failure, for callers that want a single error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
