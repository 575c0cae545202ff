//! A thread-safe key/value container whose keys can be set only once.
//!
//! Once a key has been written it cannot be overwritten; it can only be read
//! or removed. This makes the container suitable as a small concurrency-safe
//! registry, for example for configuration values or one-time tokens, where
//! an accidental overwrite must be rejected rather than silently applied.
//!
//! - **Set-once map** ([`map`]): [`SetOnceMap`] guards its entries with a
//!   single reader/writer lock owned by the instance. [`SharedSetOnceMap`]
//!   wraps it in an `Arc` for sharing across threads.
//!
//! - **Errors** ([`error`]): every illegal operation is reported as an
//!   [`Error`] variant that callers can match on.
//!
//! - **Configuration** ([`config`]): the [`Config`] trait selects the hasher
//!   and the initial capacity; [`DefaultConfig`] uses [`fxhash`].
//!
//! # Example
//!
//! ```rust
//! use qbice_set_once_map::{Error, SetOnceMap};
//!
//! let map = SetOnceMap::<u32, &str>::new();
//!
//! map.set(1, "a").unwrap();
//! assert_eq!(map.set(1, "b"), Err(Error::DuplicateKey));
//! assert_eq!(map.get(&1), Ok("a"));
//!
//! map.delete(&1).unwrap();
//! assert_eq!(map.get(&1), Err(Error::KeyNotFound));
//!
//! map.clear();
//! ```
//!
//! # Absent Keys and Values
//!
//! Operations accept `impl Into<Option<_>>`. A plain key or value is present,
//! `None` is absent. Absent arguments are rejected with [`Error::NullKey`] or
//! [`Error::NullValue`] and are never stored, while falsy values such as `0`
//! or `""` are ordinary values.
//!
//! # Concurrency
//!
//! Every operation acquires the instance lock exactly once and releases it
//! before returning, so all operations on one map are linearizable. Lookups
//! take the shared lock; mutations take the exclusive lock.

pub mod config;
pub mod error;
pub mod map;

pub use config::{Config, DefaultConfig};
pub use error::Error;
pub use map::{SetOnceMap, SharedSetOnceMap};
