//! Record and PDU contracts.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::Hasher;

use dis_buffers::{Reader, Writer};

use crate::{Fault, Field, PduHeader, PduType, ProtocolFamily, Result};

/// A marshalable structure with a fixed field layout.
///
/// Implementations are normally generated by [`dis_record!`](crate::dis_record),
/// [`dis_family!`](crate::dis_family) and [`dis_pdu!`](crate::dis_pdu).
/// These methods do not apply any [`FaultPolicy`](crate::FaultPolicy); a
/// fault always comes back as `Err`. Go through a [`Codec`](crate::Codec) for
/// policy-governed calls.
pub trait Record: Field + Default + Clone + PartialEq + fmt::Debug {
    /// Record name used as the outer tag of [`describe`](Record::describe).
    const NAME: &'static str;

    /// Exact number of bytes [`write`](Record::write) will produce.
    fn encoded_size(&self) -> usize;

    /// Appends every field in wire order.
    fn write(&self, w: &mut Writer) -> Result<()>;

    /// Overwrites every field from `r`, in wire order.
    ///
    /// On failure the fields before the faulting one hold decoded values and
    /// the rest keep whatever they held before the call.
    fn read(&mut self, r: &mut Reader<'_>) -> Result<()>;

    /// Dumps every field, without the enclosing record tag.
    fn describe_fields(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Feeds every field, in wire order, into `state`.
    fn hash_fields(&self, state: &mut dyn Hasher);

    /// Dumps the record as tagged text.
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "<{}>", Self::NAME)?;
        self.describe_fields(out)?;
        writeln!(out, "</{}>", Self::NAME)
    }

    /// [`describe`](Record::describe) into a fresh string.
    fn to_description(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.describe(&mut out);
        out
    }

    /// Order-sensitive hash of every field; floats contribute their bit
    /// pattern.
    fn structural_hash(&self) -> u64 {
        let mut state = DefaultHasher::new();
        self.hash_fields(&mut state);
        state.finish()
    }

    /// Encodes into a fresh buffer sized by [`encoded_size`](Record::encoded_size).
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut w = Writer::with_capacity(self.encoded_size());
        self.write(&mut w)?;
        Ok(w.into_vec())
    }

    /// Decodes a fresh instance from the front of `data`. Trailing bytes are
    /// ignored.
    fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut value = Self::default();
        value.read(&mut Reader::new(data))?;
        Ok(value)
    }
}

/// A protocol family record: the common header plus the family's shared
/// fields.
pub trait PduFamily: Record {
    const PROTOCOL_FAMILY: ProtocolFamily;

    fn header(&self) -> &PduHeader;

    fn header_mut(&mut self) -> &mut PduHeader;
}

/// A leaf PDU.
pub trait Pdu: Record {
    const PDU_TYPE: PduType;
    const PROTOCOL_FAMILY: ProtocolFamily;

    fn header(&self) -> &PduHeader;

    fn header_mut(&mut self) -> &mut PduHeader;

    /// Stores [`encoded_size`](Record::encoded_size) into the header's
    /// `length`.
    fn set_auto_length(&mut self) -> Result<()> {
        let size = self.encoded_size();
        let length = u16::try_from(size).map_err(|_| Fault::InconsistentLength {
            field: "length",
            declared: u16::MAX as usize,
            actual: size,
        })?;
        self.header_mut().length = length;
        Ok(())
    }

    /// Fills in every derived length field, then writes.
    fn write_with_auto_length(&mut self, w: &mut Writer) -> Result<()> {
        self.set_auto_length()?;
        self.write(w)
    }
}
