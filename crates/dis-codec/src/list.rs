//! Variable-length list codec.
//!
//! A variable-length section is a count field followed (immediately or
//! further along the layout) by the elements. In memory only the sequence
//! exists: the count written to the wire is always the sequence's current
//! length, and on read the count from the wire decides how many elements are
//! decoded.

use std::fmt;
use std::hash::Hasher;

use dis_buffers::{Reader, Writer};

use crate::{Fault, Field, Result};

/// Integer widths usable as a list count on the wire.
pub trait CountField {
    /// Encoded width in bytes.
    const WIDTH: usize;
    /// Type label used by the text dump.
    const TYPE_NAME: &'static str;

    /// Writes `len` as a count, failing if it does not fit the width.
    fn write_count(w: &mut Writer, len: usize, field: &'static str) -> Result<()>;

    /// Reads a count.
    fn read_count(r: &mut Reader<'_>) -> Result<usize>;
}

macro_rules! impl_count_field {
    ($($ty:ident),*) => {
        $(
            impl CountField for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();
                const TYPE_NAME: &'static str = stringify!($ty);

                fn write_count(w: &mut Writer, len: usize, field: &'static str) -> Result<()> {
                    let count = $ty::try_from(len).map_err(|_| Fault::InconsistentLength {
                        field,
                        declared: $ty::MAX as usize,
                        actual: len,
                    })?;
                    w.$ty(count);
                    Ok(())
                }

                fn read_count(r: &mut Reader<'_>) -> Result<usize> {
                    Ok(r.$ty()? as usize)
                }
            }
        )*
    };
}

impl_count_field!(u8, u16, u32);

/// Writes the count of a list at the count's wire position.
pub fn write_count<C: CountField>(w: &mut Writer, len: usize, field: &'static str) -> Result<()> {
    C::write_count(w, len, field)
}

/// Reads the count of a list at the count's wire position.
pub fn read_count<C: CountField>(r: &mut Reader<'_>) -> Result<usize> {
    C::read_count(r)
}

/// Sum of the element sizes.
pub fn list_size<T: Field>(items: &[T]) -> usize {
    items.iter().map(Field::field_size).sum()
}

/// Writes every element in order.
pub fn write_list<T: Field>(items: &[T], w: &mut Writer) -> Result<()> {
    for item in items {
        item.write_field(w)?;
    }
    Ok(())
}

/// Replaces `items` with exactly `count` freshly decoded elements.
///
/// A count that cannot possibly fit in the remaining bytes fails before
/// anything is allocated. Running out of bytes part-way through also fails;
/// in that case `items` holds the elements decoded so far.
pub fn read_list<T: Field + Default>(items: &mut Vec<T>, count: usize, r: &mut Reader<'_>) -> Result<()> {
    items.clear();
    if count == 0 {
        return Ok(());
    }
    let min_size = T::default().field_size().max(1);
    let needed = count.saturating_mul(min_size);
    if needed > r.size() {
        return Err(Fault::Underflow {
            needed,
            remaining: r.size(),
            offset: r.x,
        });
    }
    items.reserve_exact(count);
    for _ in 0..count {
        let mut item = T::default();
        item.read_field(r)?;
        items.push(item);
    }
    Ok(())
}

/// Dumps a list and its elements.
pub fn describe_list<T: Field>(items: &[T], name: &str, out: &mut dyn fmt::Write) -> fmt::Result {
    crate::describe::list(items, name, out)
}

/// Element-wise [`Field::field_eq`].
pub fn list_eq<T: Field>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.field_eq(y))
}

/// Writes the encoded size of the enclosing record in 32-bit words.
pub fn write_words<C: CountField>(w: &mut Writer, size: usize, field: &'static str) -> Result<()> {
    C::write_count(w, size / 4, field)
}

/// Checks a word-count length read from the wire against the size of the
/// record it was decoded into.
pub fn check_words(declared: usize, size: usize, field: &'static str) -> Result<()> {
    let actual = size / 4;
    if declared == actual {
        Ok(())
    } else {
        Err(Fault::InconsistentLength {
            field,
            declared,
            actual,
        })
    }
}

/// Hashes the length followed by every element.
pub fn hash_list<T: Field>(items: &[T], state: &mut dyn Hasher) {
    state.write_usize(items.len());
    for item in items {
        item.hash_field(state);
    }
}
