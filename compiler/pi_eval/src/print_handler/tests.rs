#![allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]

use super::*;

#[test]
fn buffer_handler_captures_lines() {
    let handler = buffer_handler();
    handler.println("1");
    handler.println("true");
    assert_eq!(handler.output(), "1\ntrue\n");
    assert_eq!(handler.lines(), vec!["1", "true"]);
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = buffer_handler();
    handler.println("hello");
    handler.clear();
    assert!(handler.output().is_empty());
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    assert_eq!(handler.output(), "");
    handler.clear();
}

#[test]
fn stdout_handler_captures_nothing() {
    assert_eq!(stdout_handler().output(), "");
}

#[test]
fn buffer_handler_is_shared_across_threads() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);

    let worker = std::thread::spawn(move || {
        for _ in 0..50 {
            other.println("a");
        }
    });
    for _ in 0..50 {
        handler.println("b");
    }
    worker.join().unwrap();

    assert_eq!(handler.lines().len(), 100);
}
