//! Scripted sessions through the generic command loop.
//!
//! These tests feed whole stdin scripts to `repl::run` and compare the
//! full stdout transcript, including the termination behavior.

use rolodex::repl::{self, Context};
use std::io::Cursor;

/// Run a scripted session and return the full stdout transcript.
fn run_session(script: &str) -> String {
    let mut ctx = Context::default();
    let mut output = Vec::new();
    repl::run(&mut ctx, Cursor::new(script.to_string()), &mut output).expect("session I/O");
    String::from_utf8(output).expect("transcript is UTF-8")
}

#[test]
fn test_full_session_transcript() {
    let script = "hello\n\
                  add alice 1234567890\n\
                  add bob 1111111111 01-01-2000\n\
                  change bob +2222222222\n\
                  phone bob\n\
                  show all\n\
                  good bye\n";

    let expected = "How can I help you?\n\
                    User alice with phone number 1234567890 was added\n\
                    User bob with phone number 1111111111 and birthday 01-01-2000 was added\n\
                    Contact bob updated\n\
                    1111111111\n2222222222\n\
                    alice: 1234567890\nbob: 1111111111, 2222222222\n\
                    Good bye!\n";

    assert_eq!(run_session(script), expected);
}

#[test]
fn test_loop_stops_at_farewell() {
    // Nothing after the farewell line is processed.
    let transcript = run_session("exit\nhello\n");
    assert_eq!(transcript, "Good bye!\n");
}

#[test]
fn test_every_farewell_command_ends_the_session() {
    for command in ["good bye", "close", "exit"] {
        let transcript = run_session(&format!("{}\nhello\n", command));
        assert_eq!(transcript, "Good bye!\n", "farewell via {:?}", command);
    }
}

#[test]
fn test_eof_without_farewell_ends_cleanly() {
    let transcript = run_session("hello\n");
    assert_eq!(transcript, "How can I help you?\n");
}

#[test]
fn test_malformed_input_never_ends_the_loop() {
    let script = "add\n\
                  add alice +badphone\n\
                  phone nobody\n\
                  gibberish\n\
                  hello\n";

    let expected = "Enter user name\n\
                    Phone number must contain only digits\n\
                    No user with given name\n\
                    Unknown command\n\
                    How can I help you?\n";

    assert_eq!(run_session(script), expected);
}

#[test]
fn test_empty_lines_are_unknown_commands() {
    let transcript = run_session("\n\nexit\n");
    assert_eq!(transcript, "Unknown command\nUnknown command\nGood bye!\n");
}

#[test]
fn test_farewell_input_is_case_insensitive() {
    // Input is lower-cased before dispatch, so any casing of the farewell
    // command terminates; the reply itself is always the canonical text.
    let transcript = run_session("GOOD BYE\nhello\n");
    assert_eq!(transcript, "Good bye!\n");
}

#[test]
fn test_phone_listing_containing_newlines_does_not_terminate() {
    // A multi-line reply is still one command's output; only the exact
    // farewell text ends the session.
    let script = "add bob 111\nchange bob +222\nphone bob\nhello\n";
    let transcript = run_session(script);
    assert!(transcript.contains("111\n222\n"));
    assert!(transcript.ends_with("How can I help you?\n"));
}
