//! Common test utilities shared by the `qbice_set_once_map` integration
//! tests.
//!
//! This crate provides the key type and the contention drivers used across
//! the concurrency tests.

#![allow(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]

use std::{
    sync::{
        Barrier,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use qbice_set_once_map::{Config, Error, SetOnceMap};

// ============================================================================
// Key Type
// ============================================================================

/// A one-time token identifier used as the map key in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(pub u64);

impl Token {
    /// The value every test stores under this token.
    pub fn expected_value(self) -> u64 { self.0 + 1 }
}

// ============================================================================
// Set / Delete Race
// ============================================================================

/// Outcome counters collected by [`race_set_and_delete`].
#[derive(Debug, Default)]
pub struct RaceReport {
    pub sets_succeeded: AtomicUsize,
    pub sets_duplicate: AtomicUsize,
    pub deletes_succeeded: AtomicUsize,
    pub deletes_not_found: AtomicUsize,
}

impl RaceReport {
    pub fn sets_succeeded(&self) -> usize {
        self.sets_succeeded.load(Ordering::SeqCst)
    }

    pub fn deletes_succeeded(&self) -> usize {
        self.deletes_succeeded.load(Ordering::SeqCst)
    }

    /// Total number of operations that were recorded.
    pub fn total(&self) -> usize {
        self.sets_succeeded()
            + self.sets_duplicate.load(Ordering::SeqCst)
            + self.deletes_succeeded()
            + self.deletes_not_found.load(Ordering::SeqCst)
    }
}

/// Runs `setters` threads calling `set(i, i + 1)` and `deleters` threads
/// calling `delete(i)` over the same `key_count` tokens, all released at the
/// same time.
///
/// # Panics
///
/// Panics if any operation returns an error kind that the race cannot
/// produce.
pub fn race_set_and_delete<C: Config>(
    map: &SetOnceMap<Token, u64, C>,
    key_count: u64,
    setters: usize,
    deleters: usize,
) -> RaceReport {
    let report = RaceReport::default();
    let barrier = Barrier::new(setters + deleters);

    thread::scope(|scope| {
        for _ in 0..setters {
            scope.spawn(|| {
                barrier.wait();

                for token in (0..key_count).map(Token) {
                    let counter =
                        match map.set(token, token.expected_value()) {
                            Ok(()) => &report.sets_succeeded,
                            Err(Error::DuplicateKey) => &report.sets_duplicate,
                            Err(error) => {
                                panic!("unexpected set error: {error}")
                            }
                        };

                    counter.fetch_add(1, Ordering::SeqCst);
                }
            });
        }

        for _ in 0..deleters {
            scope.spawn(|| {
                barrier.wait();

                for token in (0..key_count).map(Token) {
                    let counter = match map.delete(&token) {
                        Ok(()) => &report.deletes_succeeded,
                        Err(Error::KeyNotFound) => &report.deletes_not_found,
                        Err(error) => {
                            panic!("unexpected delete error: {error}")
                        }
                    };

                    counter.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    report
}

/// Asserts that every token is either absent or holds its expected value,
/// and returns how many tokens are present.
///
/// # Panics
///
/// Panics if a token holds an unexpected value or a lookup returns an error
/// other than [`Error::KeyNotFound`].
pub fn assert_consistent<C: Config>(
    map: &SetOnceMap<Token, u64, C>,
    key_count: u64,
) -> usize {
    let mut present = 0;

    for token in (0..key_count).map(Token) {
        match map.get(&token) {
            Ok(value) => {
                assert_eq!(value, token.expected_value(), "{token:?}");
                present += 1;
            }
            Err(Error::KeyNotFound) => {}
            Err(error) => panic!("unexpected get error for {token:?}: {error}"),
        }
    }

    assert_eq!(map.len(), present);

    present
}
