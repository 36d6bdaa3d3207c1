//! Log-safe rendering of request bodies.

use std::fmt;

use crate::config::DumpEncoding;

/// Borrowed view over body bytes that renders them for a log line.
///
/// Rendering never touches the bytes sent back to the client.
#[derive(Debug, Clone, Copy)]
pub struct BodyDump<'a> {
    bytes: &'a [u8],
    encoding: DumpEncoding,
    max_len: usize,
}

impl<'a> BodyDump<'a> {
    /// `max_len == 0` renders the whole body.
    pub fn new(bytes: &'a [u8], encoding: DumpEncoding, max_len: usize) -> Self {
        Self {
            bytes,
            encoding,
            max_len,
        }
    }

    fn shown(&self) -> &'a [u8] {
        if self.max_len == 0 || self.bytes.len() <= self.max_len {
            self.bytes
        } else {
            &self.bytes[..self.max_len]
        }
    }
}

impl fmt::Display for BodyDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.shown();

        match self.encoding {
            DumpEncoding::Escaped => {
                f.write_str("b'")?;
                for &byte in shown {
                    match byte {
                        b'\\' => f.write_str("\\\\")?,
                        b'\'' => f.write_str("\\'")?,
                        b'\n' => f.write_str("\\n")?,
                        b'\r' => f.write_str("\\r")?,
                        b'\t' => f.write_str("\\t")?,
                        0x20..=0x7e => write!(f, "{}", byte as char)?,
                        _ => write!(f, "\\x{byte:02x}")?,
                    }
                }
                f.write_str("'")?;
            }
            DumpEncoding::Hex => {
                for byte in shown {
                    write!(f, "{byte:02x}")?;
                }
            }
        }

        if shown.len() < self.bytes.len() {
            write!(f, "... ({} bytes total)", self.bytes.len())?;
        }
        Ok(())
    }
}
