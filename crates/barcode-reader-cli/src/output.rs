//! Output formatting module
//!
//! JSON is laid out the way Python's `json.dumps` does it by default:
//! `", "` and `": "` separators and non-ASCII escaped as `\uXXXX`.

use barcode_reader_types::{DecodeResult, Error, ErrorReport, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

struct PythonFormatter;

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            // DEL is ASCII but json.dumps still escapes it
            if ch.is_ascii() && ch != '\x7f' {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

fn to_json_line<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PythonFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Render decoded records as a JSON array
pub fn render_result(result: &DecodeResult) -> Result<String> {
    to_json_line(result)
}

/// Render a failure as `{"error": "<message>"}`
pub fn render_error(err: &Error) -> String {
    to_json_line(&ErrorReport::from(err))
        .unwrap_or_else(|_| r#"{"error": "failed to format error"}"#.to_string())
}
