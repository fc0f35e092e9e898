//! Fixed-layout wire fields.
//!
//! [`Field`] is implemented for every primitive the DIS schema uses, for
//! fixed-length byte arrays and (through the record macros) for every
//! [`Record`](crate::Record). Records are composed purely out of fields, so
//! size computation, marshaling, unmarshaling, dumping and hashing all recurse
//! through this one trait.

use std::fmt;
use std::hash::Hasher;

use dis_buffers::{Reader, Writer};

use crate::{describe, Result};

/// A value with a fixed position and width on the wire.
pub trait Field {
    /// Type label used by the text dump.
    const TYPE_NAME: &'static str;

    /// Encoded width in bytes.
    fn field_size(&self) -> usize;

    /// Appends the encoded value to `w`.
    fn write_field(&self, w: &mut Writer) -> Result<()>;

    /// Overwrites `self` with the value decoded from `r`.
    fn read_field(&mut self, r: &mut Reader<'_>) -> Result<()>;

    /// Dumps the value under the tag `name`.
    fn describe_field(&self, name: &str, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Feeds the value into an order-sensitive hash.
    fn hash_field(&self, state: &mut dyn Hasher);

    /// Equality consistent with [`hash_field`](Field::hash_field).
    fn field_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_int_field {
    ($($ty:ident => $hash:ident),* $(,)?) => {
        $(
            impl Field for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                #[inline]
                fn field_size(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }

                #[inline]
                fn write_field(&self, w: &mut Writer) -> Result<()> {
                    w.$ty(*self);
                    Ok(())
                }

                #[inline]
                fn read_field(&mut self, r: &mut Reader<'_>) -> Result<()> {
                    *self = r.$ty()?;
                    Ok(())
                }

                fn describe_field(&self, name: &str, out: &mut dyn fmt::Write) -> fmt::Result {
                    describe::scalar(out, name, Self::TYPE_NAME, self)
                }

                fn hash_field(&self, state: &mut dyn Hasher) {
                    state.$hash(*self);
                }

                #[inline]
                fn field_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_int_field! {
    u8 => write_u8,
    i8 => write_i8,
    u16 => write_u16,
    i16 => write_i16,
    u32 => write_u32,
    i32 => write_i32,
    u64 => write_u64,
    i64 => write_i64,
}

macro_rules! impl_float_field {
    ($($ty:ident => $hash:ident),* $(,)?) => {
        $(
            impl Field for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                #[inline]
                fn field_size(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }

                #[inline]
                fn write_field(&self, w: &mut Writer) -> Result<()> {
                    w.$ty(*self);
                    Ok(())
                }

                #[inline]
                fn read_field(&mut self, r: &mut Reader<'_>) -> Result<()> {
                    *self = r.$ty()?;
                    Ok(())
                }

                fn describe_field(&self, name: &str, out: &mut dyn fmt::Write) -> fmt::Result {
                    describe::scalar(out, name, Self::TYPE_NAME, self)
                }

                // Bit pattern, so NaN payloads and signed zero hash distinctly.
                fn hash_field(&self, state: &mut dyn Hasher) {
                    state.$hash(self.to_bits());
                }

                // Same bit pattern as the hash: NaN equals itself, 0.0 != -0.0.
                #[inline]
                fn field_eq(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }
            }
        )*
    };
}

impl_float_field! {
    f32 => write_u32,
    f64 => write_u64,
}

impl<const N: usize> Field for [u8; N] {
    const TYPE_NAME: &'static str = "byte[]";

    fn field_size(&self) -> usize {
        N
    }

    fn write_field(&self, w: &mut Writer) -> Result<()> {
        w.buf(self);
        Ok(())
    }

    fn read_field(&mut self, r: &mut Reader<'_>) -> Result<()> {
        self.copy_from_slice(r.buf(N)?);
        Ok(())
    }

    fn describe_field(&self, name: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::bytes(out, name, self)
    }

    fn hash_field(&self, state: &mut dyn Hasher) {
        state.write(self);
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }
}
