use std::collections::BTreeMap;
use std::fmt;

use crate::bytestring::ByteString;
use crate::pretty;

/// Dictionary entries, kept sorted by key so encoding is canonical.
pub type Dictionary = BTreeMap<ByteString, Value>;

/// A decoded bencode document.
///
/// Equality is structural. Dictionaries compare equal when they hold the same
/// keys with equal values, whatever order they were decoded in.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Value {
    Integer(i64),
    String(ByteString),
    List(Vec<Value>),
    Dictionary(Dictionary),
}

impl Value {
    pub fn string(s: &str) -> Value {
        Value::String(ByteString::from(s))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(bs) => Some(bs.as_bytes()),
            _ => None,
        }
    }

    /// Returns the byte string as `&str` when it holds valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(bs) => bs.as_str(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list.as_slice()),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn into_dict(self) -> Option<Dictionary> {
        match self {
            Value::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// Looks up `key` if this value is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Value::Integer(int)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<ByteString> for Value {
    fn from(bs: ByteString) -> Self {
        Value::String(bs)
    }
}

impl From<Vec<Value>> for Value {
    fn from(list: Vec<Value>) -> Self {
        Value::List(list)
    }
}

impl From<Dictionary> for Value {
    fn from(dict: Dictionary) -> Self {
        Value::Dictionary(dict)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&pretty::render(self))
    }
}
