//! Tokenized G-code program structure
//!
//! A [`Program`] is an ordered sequence of [`Block`]s (one per source
//! line); a block is an ordered sequence of [`Chunk`]s.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric value of a word-address pair.
///
/// G-code distinguishes integer addresses (`G1`, `M3`) from real
/// addresses (`X1.25`). Both are readable either way: `G01.0` would be
/// unusual but consumers asking for an integer still get one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Address {
    /// Value written without a decimal point.
    Integer(i64),
    /// Value written with a decimal point.
    Real(f64),
}

impl Address {
    /// Read the address as an integer, truncating a real value.
    pub fn int_value(&self) -> i64 {
        match *self {
            Self::Integer(v) => v,
            Self::Real(v) => v as i64,
        }
    }

    /// Read the address as a real value.
    pub fn real_value(&self) -> f64 {
        match *self {
            Self::Integer(v) => v as f64,
            Self::Real(v) => v,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Real(v) => write!(f, "{}", v),
        }
    }
}

/// One lexical unit of a command block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chunk {
    /// A letter paired with a numeric value, e.g. `G1` or `X-0.5`.
    Word {
        /// The address letter, uppercased.
        letter: char,
        /// The numeric value.
        address: Address,
    },
    /// A parenthesized or semicolon comment, text only.
    Comment(String),
}

/// One line-equivalent unit of the command stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based source line number.
    pub line_number: u32,
    /// Chunks in source order.
    pub chunks: Vec<Chunk>,
}

impl Block {
    /// Create an empty block for the given source line.
    pub fn new(line_number: u32) -> Self {
        Self {
            line_number,
            chunks: Vec::new(),
        }
    }

    /// Iterate the block's word-address pairs, skipping comments.
    pub fn words(&self) -> impl Iterator<Item = (char, Address)> + '_ {
        self.chunks.iter().filter_map(|chunk| match chunk {
            Chunk::Word { letter, address } => Some((*letter, *address)),
            Chunk::Comment(_) => None,
        })
    }

    /// Whether the block carries no words (blank or comment-only line).
    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }
}

/// A fully tokenized command stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Blocks in source order.
    pub blocks: Vec<Block>,
}

impl Program {
    /// Number of blocks in the program.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the program contains no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate the program's blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
