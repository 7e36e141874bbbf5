//! # Grooveview G-code tokenizer
//!
//! Splits raw G-code text into typed command blocks, one block per line.
//! A block is an ordered sequence of chunks; a chunk is either a
//! word-address pair (letter plus numeric value) or a comment. Consumers
//! that only care about motion can iterate a block's words and ignore
//! everything else.
//!
//! This crate does not interpret commands. Modal state, motion semantics,
//! and rendering live in `grooveview-preview`.

pub mod block;
pub mod tokenizer;

pub use block::{Address, Block, Chunk, Program};
pub use tokenizer::{tokenize, TokenizeError};
