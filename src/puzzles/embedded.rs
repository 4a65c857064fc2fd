//! Embedded puzzle list
//!
//! Puzzle rows compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
