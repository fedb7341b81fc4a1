//! Tests for sharing the handle and errors across threads.

use std::sync::Arc;
use std::thread;

use bulwark::prelude::*;
use bulwark::Ensure;

#[test]
fn test_concurrent_checks_through_shared_handle() {
    let handles: Vec<_> = (0..10)
        .map(|i| {
            thread::spawn(move || {
                let value = ENSURE.between(i, 0, 9, Bounds::INCLUSIVE, "i").unwrap();
                assert_eq!(value, i);
                assert!(ENSURE.between(i + 10, 0, 9, Bounds::INCLUSIVE, "i").is_err());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_email_checks() {
    let addresses = Arc::new(vec![
        "a@example.com",
        "b@example.org",
        "not-an-email",
        "c@example.net",
    ]);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let addresses = Arc::clone(&addresses);
            thread::spawn(move || {
                addresses
                    .iter()
                    .filter(|a| a.ensure_email("email").is_ok())
                    .count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}

#[test]
fn test_errors_cross_thread_boundaries() {
    let handle = thread::spawn(|| (-1i64).ensure_positive("balance"));

    let err = handle.join().unwrap().unwrap_err();
    assert_eq!(err.param(), Some("balance"));
}

#[test]
fn test_handle_copies_into_threads() {
    let ensure = Ensure;
    let handle = thread::spawn(move || ensure.odd(7u8, "n").is_ok());
    assert!(handle.join().unwrap());
}
