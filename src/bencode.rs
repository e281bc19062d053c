use log::trace;

use crate::bytestring::ByteString;
use crate::value::{Dictionary, Value};

/// Encodes `value` as canonical bencode. Dictionary keys come out in byte order.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_type(value, &mut buf);
    trace!("encoded bencode document of {} bytes", buf.len());
    buf
}

fn encode_type(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(int) => encode_int(*int, buf),
        Value::String(bytes) => encode_bytestring(bytes, buf),
        Value::List(list) => encode_list(list, buf),
        Value::Dictionary(dict) => encode_dict(dict, buf),
    };
}

fn encode_dict(dict: &Dictionary, buf: &mut Vec<u8>) {
    buf.push(b'd');
    for (key, val) in dict {
        encode_bytestring(key, buf);
        encode_type(val, buf);
    }
    buf.push(b'e');
}

fn encode_list(list: &[Value], buf: &mut Vec<u8>) {
    buf.push(b'l');
    for item in list {
        encode_type(item, buf);
    }
    buf.push(b'e')
}

fn encode_bytestring(bs: &ByteString, buf: &mut Vec<u8>) {
    encode_num(bs.len(), buf);
    buf.push(b':');
    buf.extend_from_slice(bs.as_bytes());
}

fn encode_int(int: i64, buf: &mut Vec<u8>) {
    buf.push(b'i');
    encode_num(int, buf);
    buf.push(b'e');
}

fn encode_num(num: impl ToString, buf: &mut Vec<u8>) {
    buf.extend(num.to_string().bytes());
}
