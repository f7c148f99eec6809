use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("bft").unwrap()
}

#[test]
fn program_from_stdin_outputs_cell_codepoint() {
    // Cell 0 ends at 2; '.' emits the character with codepoint 2.
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .write_stdin("++>+++>+<<.")
        .assert()
        .success()
        .stdout("\u{2}\nExiting...\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn non_instruction_characters_are_ignored() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .write_stdin("add two: + + then print .")
        .assert()
        .success()
        .stdout("\u{2}\nExiting...\n");
}

#[test]
fn empty_program_exits_cleanly() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .write_stdin("")
        .assert()
        .success()
        .stdout("\nExiting...\n");
}

#[test]
fn clear_loop_produces_no_output() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .write_stdin("+[-]")
        .assert()
        .success()
        .stdout("\nExiting...\n");
}
