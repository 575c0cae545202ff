//! Tests that racing inserts on the same key produce exactly one winner.

use std::{sync::Barrier, thread};

use qbice_set_once_map::{Error, SetOnceMap};
use qbice_set_once_map_integration_test::Token;

#[test]
fn racing_inserts_have_one_winner_per_key() {
    const THREADS: u64 = 8;
    const KEY_COUNT: u64 = 256;

    let map = SetOnceMap::<Token, u64>::new();
    let barrier = Barrier::new(THREADS as usize);

    let wins = thread::scope(|scope| {
        let handles = (0..THREADS)
            .map(|thread_id| {
                let map = &map;
                let barrier = &barrier;

                scope.spawn(move || {
                    barrier.wait();

                    (0..KEY_COUNT)
                        .map(Token)
                        .filter(|token| match map.set(*token, thread_id) {
                            Ok(()) => true,
                            Err(Error::DuplicateKey) => false,
                            Err(error) => panic!("unexpected error: {error}"),
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .enumerate()
            .map(|(thread_id, handle)| {
                (thread_id as u64, handle.join().unwrap())
            })
            .collect::<Vec<_>>()
    });

    let total_wins =
        wins.iter().map(|(_, tokens)| tokens.len()).sum::<usize>();
    assert_eq!(total_wins, KEY_COUNT as usize);
    assert_eq!(map.len(), KEY_COUNT as usize);

    // the stored value names the thread that won the key
    for (thread_id, tokens) in wins {
        for token in tokens {
            assert_eq!(map.get(&token), Ok(thread_id));
        }
    }
}

#[test]
fn readers_never_observe_a_replaced_value() {
    let map = SetOnceMap::<Token, u64>::new();
    map.set(Token(0), 1).unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for attempt in 0..1000 {
                    assert_eq!(
                        map.set(Token(0), attempt),
                        Err(Error::DuplicateKey)
                    );
                }
            });
        }

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    assert_eq!(map.get(&Token(0)), Ok(1));
                }
            });
        }
    });
}
