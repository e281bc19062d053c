use std::str::FromStr;

use log::{debug, trace};
use nom::character::complete::{char, digit1};
use nom::combinator::{opt, recognize};
use nom::sequence::pair;
use nom::IResult;

use crate::bytestring::ByteString;
use crate::error::{DecodingError, ParseError, Production};
use crate::options::DecodeOptions;
use crate::value::{Dictionary, Value};

type Result<T> = std::result::Result<T, ParseError>;

// Every production takes the position to start at and hands back the position right after
// what it consumed. The decoder itself never changes once built.
pub(crate) struct BDecoder<'a> {
    bytes: &'a [u8],
    options: DecodeOptions,
}

impl<'a> BDecoder<'a> {
    fn new(bytes: &'a [u8], options: DecodeOptions) -> BDecoder<'a> {
        BDecoder { bytes, options }
    }

    fn decode(&self) -> Result<Value> {
        let (value, end) = self.parse_type(0, 0)?;
        if end != self.bytes.len() {
            return Err(self.error(DecodingError::TrailingData, Production::Document, end));
        }
        Ok(value)
    }

    fn parse_type(&self, pos: usize, depth: usize) -> Result<(Value, usize)> {
        match self.peek(pos) {
            None => Err(self.error(DecodingError::EndOfFile, Production::Value, pos)),
            Some(b'i') => self.parse_int(pos).map(|(i, end)| (Value::Integer(i), end)),
            Some(b'l') => self.parse_list(pos, depth).map(|(l, end)| (Value::List(l), end)),
            Some(b'd') => self.parse_dict(pos, depth).map(|(d, end)| (Value::Dictionary(d), end)),
            Some(b'0'..=b'9') => self.parse_str(pos).map(|(s, end)| (Value::String(s), end)),
            Some(other) => Err(self.error(DecodingError::UnexpectedByte(other as char), Production::Value, pos)),
        }
    }

    fn parse_int(&self, pos: usize) -> Result<(i64, usize)> {
        let pos = self.expect_char(b'i', Production::Integer, pos)?;
        let rest = self.rest(pos);
        let (_, literal) = integer_literal(rest).map_err(|_| {
            let kind = if rest.is_empty() { DecodingError::EndOfFile } else { DecodingError::NotANumber };
            self.error(kind, Production::Integer, pos)
        })?;
        if self.options.strict_integers && !is_canonical(literal) {
            return Err(self.error(DecodingError::NonCanonicalInteger, Production::Integer, pos));
        }
        let int = parse_decimal::<i64>(literal)
            .ok_or_else(|| self.error(DecodingError::IntegerOverflow, Production::Integer, pos))?;
        let pos = self.expect_char(b'e', Production::Integer, pos + literal.len())?;
        Ok((int, pos))
    }

    fn parse_str(&self, pos: usize) -> Result<(ByteString, usize)> {
        let (_, literal) = length_literal(self.rest(pos))
            .map_err(|_| self.error(DecodingError::StringWithoutLength, Production::ByteString, pos))?;
        let len = parse_decimal::<usize>(literal)
            .ok_or_else(|| self.error(DecodingError::IntegerOverflow, Production::ByteString, pos))?;
        let start = self.expect_char(b':', Production::ByteString, pos + literal.len())?;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| self.error(DecodingError::EndOfFile, Production::ByteString, start))?;
        Ok((ByteString(self.bytes[start..end].to_vec()), end))
    }

    fn parse_list(&self, pos: usize, depth: usize) -> Result<(Vec<Value>, usize)> {
        let mut pos = self.expect_char(b'l', Production::List, pos)?;
        self.check_depth(depth, Production::List, pos - 1)?;
        let mut list = Vec::new();
        loop {
            match self.peek(pos) {
                None => return Err(self.error(DecodingError::EndOfFile, Production::List, pos)),
                Some(b'e') => return Ok((list, pos + 1)),
                Some(_) => {
                    let (item, next) = self.parse_type(pos, depth + 1)?;
                    list.push(item);
                    pos = next;
                }
            }
        }
    }

    fn parse_dict(&self, pos: usize, depth: usize) -> Result<(Dictionary, usize)> {
        let mut pos = self.expect_char(b'd', Production::Dictionary, pos)?;
        self.check_depth(depth, Production::Dictionary, pos - 1)?;
        let mut dict = Dictionary::new();
        loop {
            match self.peek(pos) {
                None => return Err(self.error(DecodingError::EndOfFile, Production::Dictionary, pos)),
                Some(b'e') => return Ok((dict, pos + 1)),
                Some(b'0'..=b'9') => {
                    let (key, next) = self.parse_str(pos)?;
                    if matches!(self.peek(next), None | Some(b'e')) {
                        return Err(self.error(DecodingError::KeyWithoutValue(key), Production::Dictionary, next));
                    }
                    let (value, next) = self.parse_type(next, depth + 1)?;
                    // Duplicate keys are not an error, the last occurrence wins.
                    dict.insert(key, value);
                    pos = next;
                }
                Some(_) => return Err(self.error(DecodingError::KeyNotAString, Production::Dictionary, pos)),
            }
        }
    }

    fn check_depth(&self, depth: usize, production: Production, pos: usize) -> Result<()> {
        if depth >= self.options.max_depth {
            return Err(self.error(DecodingError::NestingTooDeep(self.options.max_depth), production, pos));
        }
        Ok(())
    }

    fn expect_char(&self, expected: u8, production: Production, pos: usize) -> Result<usize> {
        match self.peek(pos) {
            None => Err(self.error(DecodingError::EndOfFile, production, pos)),
            Some(chr) if chr == expected => Ok(pos + 1),
            _ => Err(self.error(DecodingError::MissingIdentifier(expected as char), production, pos)),
        }
    }

    fn peek(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    fn rest(&self, pos: usize) -> &'a [u8] {
        self.bytes.get(pos..).unwrap_or_default()
    }

    fn error(&self, kind: DecodingError, production: Production, pos: usize) -> ParseError {
        ParseError::new(kind, production, self.bytes, pos)
    }
}

// Optional minus followed by at least one digit. A leading '+' is not part of the grammar.
fn integer_literal(inp: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize(pair(opt(char('-')), digit1))(inp)
}

fn length_literal(inp: &[u8]) -> IResult<&[u8], &[u8]> {
    digit1(inp)
}

fn is_canonical(literal: &[u8]) -> bool {
    let digits = literal.strip_prefix(b"-").unwrap_or(literal);
    let leading_zero = digits.len() > 1 && digits[0] == b'0';
    let negative_zero = literal.len() != digits.len() && digits == b"0";
    !leading_zero && !negative_zero
}

// The literal is already known to be ASCII digits, so a failure here can only be overflow.
fn parse_decimal<T: FromStr>(literal: &[u8]) -> Option<T> {
    std::str::from_utf8(literal).ok()?.parse().ok()
}

/// Decodes a complete bencode document with the default [`DecodeOptions`].
pub fn decode(inp: &[u8]) -> Result<Value> {
    decode_with(inp, &DecodeOptions::default())
}

/// Decodes a complete bencode document. The whole input must be exactly one value.
pub fn decode_with(inp: &[u8], options: &DecodeOptions) -> Result<Value> {
    trace!("decoding {} bytes of bencode", inp.len());
    let decoder = BDecoder::new(inp, *options);
    match decoder.decode() {
        Ok(value) => {
            trace!("decoded bencode document of {} bytes", inp.len());
            Ok(value)
        }
        Err(err) => {
            debug!("rejecting bencode document: {}", err);
            Err(err)
        }
    }
}
