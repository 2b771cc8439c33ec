//! Caching utilities.
//!
//! A small time-based cache used to keep the case-study catalog in memory
//! between tool calls.

pub mod timed_cache;

pub use timed_cache::TimedCache;
