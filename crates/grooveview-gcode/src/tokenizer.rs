//! Word-address tokenizer
//!
//! One source line becomes one [`Block`]. Within a line the tokenizer
//! recognizes word-address pairs (`G1`, `X-0.5`, `F100`), parenthesized
//! comments, and semicolon comments running to end of line. Blank lines
//! produce no block.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::block::{Address, Block, Chunk, Program};

/// Errors produced while tokenizing G-code text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizeError {
    /// A character sequence that is not a word, comment, or whitespace.
    #[error("Invalid syntax at line {line_number}: {reason}")]
    InvalidSyntax {
        /// 1-based source line number.
        line_number: u32,
        /// What the tokenizer found instead.
        reason: String,
    },
}

fn number_regex() -> &'static Regex {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBER_REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.\d*|\.\d+|\d+)").expect("invalid regex pattern")
    })
}

/// Tokenize a complete G-code text into a [`Program`].
///
/// The whole input is expected to be in memory; there is no streaming
/// interface at this boundary.
pub fn tokenize(input: &str) -> Result<Program, TokenizeError> {
    let mut blocks = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_number = index as u32 + 1;
        if line.trim().is_empty() {
            continue;
        }
        blocks.push(tokenize_line(line, line_number)?);
    }

    tracing::debug!(blocks = blocks.len(), "tokenized g-code program");
    Ok(Program { blocks })
}

fn tokenize_line(line: &str, line_number: u32) -> Result<Block, TokenizeError> {
    let mut block = Block::new(line_number);
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
        } else if c == ';' {
            // Semicolon comment runs to end of line.
            block
                .chunks
                .push(Chunk::Comment(rest[1..].trim().to_string()));
            break;
        } else if c == '(' {
            // Parenthesized comment; unmatched parens swallow the rest
            // of the line, matching common controller behavior.
            match rest.find(')') {
                Some(end) => {
                    block
                        .chunks
                        .push(Chunk::Comment(rest[1..end].trim().to_string()));
                    rest = &rest[end + 1..];
                }
                None => {
                    block
                        .chunks
                        .push(Chunk::Comment(rest[1..].trim().to_string()));
                    break;
                }
            }
        } else if c.is_ascii_alphabetic() {
            let after_letter = &rest[1..];
            let m = number_regex().find(after_letter).ok_or_else(|| {
                TokenizeError::InvalidSyntax {
                    line_number,
                    reason: format!("expected number after '{}'", c),
                }
            })?;
            let literal = m.as_str();
            let address = parse_address(literal, line_number)?;
            block.chunks.push(Chunk::Word {
                letter: c.to_ascii_uppercase(),
                address,
            });
            rest = &after_letter[m.end()..];
        } else {
            return Err(TokenizeError::InvalidSyntax {
                line_number,
                reason: format!("unexpected character '{}'", c),
            });
        }
    }

    Ok(block)
}

fn parse_address(literal: &str, line_number: u32) -> Result<Address, TokenizeError> {
    let parsed = if literal.contains('.') {
        literal.parse::<f64>().ok().map(Address::Real)
    } else {
        literal.parse::<i64>().ok().map(Address::Integer)
    };
    parsed.ok_or_else(|| TokenizeError::InvalidSyntax {
        line_number,
        reason: format!("malformed number '{}'", literal),
    })
}
