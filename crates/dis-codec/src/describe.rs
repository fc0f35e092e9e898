//! Tagged text dump used by [`Record::describe`](crate::Record::describe).
//!
//! One line per field, `<name type="t">value</name>`; nested records open and
//! close with their field name. Diagnostic only: the layout is not a wire
//! format and may change between versions.

use std::fmt::{self, Display, Write};

use crate::Field;

/// Writes a single scalar line.
pub fn scalar(out: &mut dyn Write, name: &str, type_name: &str, value: impl Display) -> fmt::Result {
    writeln!(out, "<{name} type=\"{type_name}\">{value}</{name}>")
}

/// Opens a nested record.
pub fn open(out: &mut dyn Write, name: &str, type_name: &str) -> fmt::Result {
    writeln!(out, "<{name} type=\"{type_name}\">")
}

/// Closes a nested record or list.
pub fn close(out: &mut dyn Write, name: &str) -> fmt::Result {
    writeln!(out, "</{name}>")
}

/// Writes a byte run as upper-case hex.
pub fn bytes(out: &mut dyn Write, name: &str, data: &[u8]) -> fmt::Result {
    write!(out, "<{name} type=\"byte[]\">")?;
    for b in data {
        write!(out, "{b:02X}")?;
    }
    writeln!(out, "</{name}>")
}

/// Writes the derived element count of list `list`.
pub fn count(out: &mut dyn Write, list: &str, type_name: &str, len: usize) -> fmt::Result {
    writeln!(out, "<number_of_{list} type=\"{type_name}\">{len}</number_of_{list}>")
}

/// Writes every element of a list between `<name count="n">` and `</name>`.
pub fn list<T: Field>(items: &[T], name: &str, out: &mut dyn Write) -> fmt::Result {
    writeln!(out, "<{name} count=\"{}\">", items.len())?;
    for item in items {
        item.describe_field("item", out)?;
    }
    close(out, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_bytes_lines() {
        let mut out = String::new();
        scalar(&mut out, "site", "u16", 42).unwrap();
        bytes(&mut out, "data", &[0x0a, 0xff]).unwrap();
        assert_eq!(
            out,
            "<site type=\"u16\">42</site>\n<data type=\"byte[]\">0AFF</data>\n"
        );
    }

    #[test]
    fn list_wraps_items() {
        let mut out = String::new();
        list(&[1u8, 2u8], "samples", &mut out).unwrap();
        assert_eq!(
            out,
            "<samples count=\"2\">\n<item type=\"u8\">1</item>\n<item type=\"u8\">2</item>\n</samples>\n"
        );
    }
}
