//! Tests that separate maps do not share state or locks.

use std::{sync::Barrier, thread};

use qbice_set_once_map::{Error, SetOnceMap, SharedSetOnceMap};
use qbice_set_once_map_integration_test::Token;

#[test]
fn clearing_one_map_leaves_another_intact() {
    let first = SetOnceMap::<Token, u64>::new();
    let second = SetOnceMap::<Token, u64>::new();

    first.set(Token(1), 2).unwrap();
    second.set(Token(1), 20).unwrap();

    first.clear();

    assert_eq!(first.get(&Token(1)), Err(Error::KeyNotFound));
    assert_eq!(second.get(&Token(1)), Ok(20));
}

#[test]
fn same_key_in_different_maps_is_not_duplicate() {
    let first = SetOnceMap::<Token, u64>::new();
    let second = SetOnceMap::<Token, u64>::new();

    assert_eq!(first.set(Token(7), 8), Ok(()));
    assert_eq!(second.set(Token(7), 8), Ok(()));

    second.delete(&Token(7)).unwrap();

    assert_eq!(first.get(&Token(7)), Ok(8));
}

#[test]
fn independent_maps_are_filled_concurrently() {
    let busy = SharedSetOnceMap::<Token, u64>::new();
    let free = SharedSetOnceMap::<Token, u64>::new();
    let barrier = Barrier::new(2);

    thread::scope(|scope| {
        scope.spawn(|| {
            for token in (0..10_000).map(Token) {
                busy.set(token, token.expected_value()).unwrap();
            }
            barrier.wait();
        });

        scope.spawn(|| {
            free.set(Token(0), 1).unwrap();
            assert_eq!(free.get(&Token(0)), Ok(1));
            barrier.wait();
        });
    });

    assert_eq!(busy.len(), 10_000);
    assert_eq!(free.len(), 1);
}
