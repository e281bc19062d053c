//! Bencode decoding, encoding and pretty printing.
//!
//! Bencode is the encoding BitTorrent uses for `.torrent` metadata and DHT messages. It has
//! four kinds of values:
//!
//! | Kind       | Wire form           | Example                      |
//! |------------|---------------------|------------------------------|
//! | Integer    | `i<number>e`        | `i-3e`                       |
//! | ByteString | `<length>:<bytes>`  | `4:spam`                     |
//! | List       | `l<values>e`        | `l4:spami42ee`               |
//! | Dictionary | `d<key><value>...e` | `d3:cow3:moo4:spam4:eggse`   |
//!
//! ```
//! use bencodec::{decode, encode, render, Value};
//!
//! let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
//! assert_eq!(value.get(b"cow"), Some(&Value::string("moo")));
//! assert_eq!(render(&value), "{cow : moo , spam : eggs}");
//! assert_eq!(encode(&value), b"d3:cow3:moo4:spam4:eggse");
//! ```
//!
//! Dictionaries are stored sorted by key, so [`encode`] always produces canonical output.
//! Decoding is all or nothing: malformed input yields a [`ParseError`] and never a partial value.

mod bdecode;
mod bencode;
mod bytestring;
mod error;
mod options;
mod pretty;
mod value;

pub use bdecode::{decode, decode_with};
pub use bencode::encode;
pub use bytestring::{ByteString, ToByteString};
pub use error::{DecodingError, ParseError, Production};
pub use options::{DecodeOptions, DEFAULT_MAX_DEPTH};
pub use pretty::render;
pub use value::{Dictionary, Value};
