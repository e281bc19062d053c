// Human readable rendering for logs and debugging. The output is not bencode and cannot be
// decoded again.

use crate::bytestring::ByteString;
use crate::value::{Dictionary, Value};

const SEPARATOR: &str = " , ";

/// Renders `value` as text, e.g. `{cow : moo , spam : [1 , 2]}`.
///
/// Byte strings are written as text; bytes that are not valid UTF-8 show up as U+FFFD.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_type(value, &mut out);
    out
}

fn render_type(value: &Value, out: &mut String) {
    match value {
        Value::Integer(int) => out.push_str(&int.to_string()),
        Value::String(bytes) => render_bytestring(bytes, out),
        Value::List(list) => render_list(list, out),
        Value::Dictionary(dict) => render_dict(dict, out),
    }
}

fn render_bytestring(bs: &ByteString, out: &mut String) {
    out.push_str(&String::from_utf8_lossy(bs.as_bytes()));
}

fn render_list(list: &[Value], out: &mut String) {
    out.push('[');
    for (idx, item) in list.iter().enumerate() {
        if idx > 0 {
            out.push_str(SEPARATOR);
        }
        render_type(item, out);
    }
    out.push(']');
}

fn render_dict(dict: &Dictionary, out: &mut String) {
    out.push('{');
    for (idx, (key, val)) in dict.iter().enumerate() {
        if idx > 0 {
            out.push_str(SEPARATOR);
        }
        render_bytestring(key, out);
        out.push_str(" : ");
        render_type(val, out);
    }
    out.push('}');
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render_scalars() {
        assert_eq!("42", render(&Value::Integer(42)));
        assert_eq!("-3", render(&Value::Integer(-3)));
        assert_eq!("spam", render(&Value::string("spam")));
        assert_eq!("", render(&Value::string("")));
        assert_eq!("a\u{FFFD}", render(&Value::String(ByteString(vec![b'a', 0xfe]))));
    }

    #[test]
    fn render_empty_containers() {
        assert_eq!("[]", render(&Value::List(vec![])));
        assert_eq!("{}", render(&Value::Dictionary(Dictionary::new())));
    }

    #[test]
    fn render_flat_list() {
        let list = Value::List(vec![Value::string("spam"), Value::Integer(42)]);
        assert_eq!("[spam , 42]", render(&list));

        let single = Value::List(vec![Value::Integer(1)]);
        assert_eq!("[1]", render(&single));
    }

    #[test]
    fn render_nested() {
        let mut inner = Dictionary::new();
        inner.insert(ByteString::from("x"), Value::List(vec![]));
        let mut dict = Dictionary::new();
        dict.insert(ByteString::from("b"), Value::Dictionary(inner));
        dict.insert(ByteString::from("a"), Value::List(vec![Value::Integer(1), Value::Dictionary(Dictionary::new())]));

        assert_eq!("{a : [1 , {}] , b : {x : []}}", render(&Value::Dictionary(dict)));
    }

    #[test]
    fn display_matches_render() {
        let value = Value::List(vec![Value::string("a"), Value::Integer(2)]);
        assert_eq!(render(&value), value.to_string());
    }
}
