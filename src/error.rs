use std::fmt;

use thiserror::Error;

use crate::bytestring::ByteString;

// Bytes of input quoted in an error message.
const CONTEXT_LEN: usize = 16;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DecodingError {
    #[error("unexpected end of file")]
    EndOfFile,
    #[error("unexpected byte '{}'", .0.escape_default())]
    UnexpectedByte(char),
    #[error("expected identifier '{0}'")]
    MissingIdentifier(char),
    #[error("expected a number")]
    NotANumber,
    #[error("number does not fit in 64 bits")]
    IntegerOverflow,
    #[error("leading zeros and negative zero are not allowed")]
    NonCanonicalInteger,
    #[error("expected string length")]
    StringWithoutLength,
    #[error("dictionary keys must be byte strings")]
    KeyNotAString,
    #[error("dictionary key '{0}' without value")]
    KeyWithoutValue(ByteString),
    #[error("trailing data after value")]
    TrailingData,
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// The grammar production that was being parsed when decoding failed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Production {
    Value,
    Integer,
    ByteString,
    List,
    Dictionary,
    Document,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Production::Value => "value",
            Production::Integer => "integer",
            Production::ByteString => "byte string",
            Production::List => "list",
            Production::Dictionary => "dictionary",
            Production::Document => "document",
        };
        f.write_str(name)
    }
}

/// Failure to decode a bencode document.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{kind} while parsing {production} at offset {offset} near \"{context}\"")]
pub struct ParseError {
    kind: DecodingError,
    production: Production,
    offset: usize,
    context: String,
}

impl ParseError {
    pub(crate) fn new(kind: DecodingError, production: Production, input: &[u8], offset: usize) -> ParseError {
        let start = offset.min(input.len());
        let end = (start + CONTEXT_LEN).min(input.len());
        let context = String::from_utf8_lossy(&input[start..end]).escape_debug().to_string();
        ParseError { kind, production, offset, context }
    }

    pub fn kind(&self) -> &DecodingError {
        &self.kind
    }

    pub fn production(&self) -> Production {
        self.production
    }

    /// Byte offset into the input where the failing check happened.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}
