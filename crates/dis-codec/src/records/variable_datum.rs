use std::fmt;
use std::hash::{Hash, Hasher};

use dis_buffers::{Reader, Writer};
use serde::{Deserialize, Serialize};

use crate::{describe, Fault, Field, Record, Result};

/// Identified opaque payload whose length travels in bits.
///
/// On the wire: `variable_datum_id:u32`, `variable_datum_length:u32` (bits),
/// the payload bytes, then zero padding up to the next 64-bit boundary.
///
/// `variable_datum_length` is `None` when the payload is a whole number of
/// bytes; the bit length is then derived from `variable_data`. A declared
/// length must round up to exactly `variable_data.len()` bytes.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct VariableDatum {
    pub variable_datum_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_datum_length: Option<u32>,
    pub variable_data: Vec<u8>,
}

impl VariableDatum {
    pub fn new(variable_datum_id: u32, variable_data: impl Into<Vec<u8>>) -> Self {
        Self {
            variable_datum_id,
            variable_datum_length: None,
            variable_data: variable_data.into(),
        }
    }

    /// The bit length written to the wire.
    pub fn wire_bit_length(&self) -> Result<u32> {
        let actual = self.variable_data.len() * 8;
        let Some(declared) = self.variable_datum_length else {
            return u32::try_from(actual).map_err(|_| Fault::InconsistentLength {
                field: "variable_datum_length",
                declared: u32::MAX as usize,
                actual,
            });
        };
        if (declared as usize).div_ceil(8) != self.variable_data.len() {
            return Err(Fault::InconsistentLength {
                field: "variable_datum_length",
                declared: declared as usize,
                actual,
            });
        }
        Ok(declared)
    }

    fn bit_length(&self) -> usize {
        self.variable_datum_length
            .map_or(self.variable_data.len() * 8, |bits| bits as usize)
    }

    fn padded_len(&self) -> usize {
        self.variable_data.len().div_ceil(8) * 8
    }
}

impl PartialEq for VariableDatum {
    fn eq(&self, other: &Self) -> bool {
        self.variable_datum_id == other.variable_datum_id
            && self.bit_length() == other.bit_length()
            && self.variable_data == other.variable_data
    }
}

impl Field for VariableDatum {
    const TYPE_NAME: &'static str = "VariableDatum";

    fn field_size(&self) -> usize {
        self.encoded_size()
    }

    fn write_field(&self, w: &mut Writer) -> Result<()> {
        self.write(w)
    }

    fn read_field(&mut self, r: &mut Reader<'_>) -> Result<()> {
        self.read(r)
    }

    fn describe_field(&self, name: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::open(out, name, Self::TYPE_NAME)?;
        self.describe_fields(out)?;
        describe::close(out, name)
    }

    fn hash_field(&self, state: &mut dyn Hasher) {
        self.hash_fields(state)
    }

    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl Record for VariableDatum {
    const NAME: &'static str = "VariableDatum";

    fn encoded_size(&self) -> usize {
        8 + self.padded_len()
    }

    fn write(&self, w: &mut Writer) -> Result<()> {
        let bits = self.wire_bit_length()?;
        w.u32(self.variable_datum_id);
        w.u32(bits);
        w.buf(&self.variable_data);
        w.zeros(self.padded_len() - self.variable_data.len());
        Ok(())
    }

    fn read(&mut self, r: &mut Reader<'_>) -> Result<()> {
        self.variable_datum_id = r.u32()?;
        let bits = r.u32()? as usize;
        let len = bits.div_ceil(8);
        let padded = bits.div_ceil(64) * 8;
        r.ensure(padded)?;
        self.variable_data.clear();
        self.variable_data.extend_from_slice(r.buf(len)?);
        self.variable_datum_length = (bits != len * 8).then_some(bits as u32);
        r.skip(padded - len)?;
        Ok(())
    }

    fn describe_fields(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::scalar(out, "variable_datum_id", "u32", self.variable_datum_id)?;
        describe::scalar(out, "variable_datum_length", "u32", self.bit_length())?;
        describe::bytes(out, "variable_data", &self.variable_data)
    }

    fn hash_fields(&self, state: &mut dyn Hasher) {
        state.write_u32(self.variable_datum_id);
        state.write_usize(self.bit_length());
        state.write(&self.variable_data);
    }
}

impl Hash for VariableDatum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_fields(state)
    }
}
