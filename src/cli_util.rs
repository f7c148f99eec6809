//! Error reporting helpers for the CLI.

use std::io::{self, Write};

use crate::error::{ParseError, RuntimeError};

/// Print a parse error to stderr with a caret context window over the
/// filtered instruction text.
pub fn report_parse_error(program: &str, code: &str, err: &ParseError) {
    let ParseError::UnbalancedBrackets { position, .. } = err;
    print_error_with_context(&format!("{program}: parse error: {err}"), code, *position);
}

/// Print a runtime error to stderr, with caret context where the error has
/// an instruction position.
pub fn report_runtime_error(program: &str, code: &str, err: &RuntimeError) {
    let position = match err {
        RuntimeError::InputFormat { ip, .. } => *ip,
        RuntimeError::CharacterRange { ip, .. } => *ip,
        RuntimeError::Io { ip, .. } => *ip,
    };
    print_error_with_context(&format!("{program}: runtime error: {err}"), code, position);
}

/// Print a concise error plus a short window of the instruction text with a
/// caret under the offending position. `code` must be filtered instruction
/// text, so positions and byte offsets coincide.
fn print_error_with_context(message: &str, code: &str, position: usize) {
    eprintln!("{message}");

    const WINDOW: usize = 32;

    let start = position.saturating_sub(WINDOW);
    let end = (position + WINDOW + 1).min(code.len());
    if start >= end {
        let _ = io::stderr().flush();
        return;
    }

    eprintln!("  {}", &code[start..end]);
    eprintln!("  {}^", " ".repeat(position - start));
    let _ = io::stderr().flush();
}
