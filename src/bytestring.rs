use std::borrow::Borrow;
use std::fmt::Display;

// Custom ByteString wrapper to avoid String allocations. Ordering is byte-lexicographic,
// which is the key order bencode dictionaries are encoded in.
#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteString(pub Vec<u8>);

impl ByteString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the contents as `&str` if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

pub trait ToByteString {
    fn to_byte_string(&self) -> ByteString;
}

impl ToByteString for &str {
    fn to_byte_string(&self) -> ByteString {
        ByteString(self.as_bytes().to_vec())
    }
}

impl ToByteString for &[u8] {
    fn to_byte_string(&self) -> ByteString {
        ByteString(self.to_vec())
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        s.to_byte_string()
    }
}

impl From<String> for ByteString {
    fn from(s: String) -> Self {
        ByteString(s.into_bytes())
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        bytes.to_byte_string()
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        ByteString(bytes)
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for ByteString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = String::from_utf8_lossy(&self.0);
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    pub fn ordering_is_bytewise() {
        let mut keys = vec![
            ByteString::from("spam"),
            ByteString::from("Zeta"),
            ByteString::from("cow"),
            ByteString::from("co"),
        ];
        keys.sort();
        assert_eq!(keys, vec![
            ByteString::from("Zeta"),
            ByteString::from("co"),
            ByteString::from("cow"),
            ByteString::from("spam"),
        ]);
    }

    #[test]
    pub fn lookup_by_slice() {
        let mut map = BTreeMap::new();
        map.insert(ByteString::from("key"), 1);
        assert_eq!(map.get(b"key".as_slice()), Some(&1));
        assert_eq!(map.get(b"nope".as_slice()), None);
    }

    #[test]
    pub fn display_is_lossy() {
        assert_eq!("abc", ByteString::from("abc").to_string());
        assert_eq!("a\u{FFFD}c", ByteString(vec![b'a', 0xff, b'c']).to_string());
        assert_eq!(None, ByteString(vec![0xff]).as_str());
        assert_eq!(Some("ok"), ByteString::from("ok").as_str());
    }
}
