use std::fmt;
use std::hash::{Hash, Hasher};

use dis_buffers::{Reader, Writer};
use serde::{Deserialize, Serialize};

use crate::family::RadioCommunicationsFamilyPdu;
use crate::records::{EntityId, ModulationType, RadioEntityType, Vector3Double, Vector3Float};
use crate::{describe, Fault, Field, Pdu, PduFamily, PduHeader, PduType, ProtocolFamily, Record, Result};

dis_pdu! {
    /// State of one radio transmitter.
    pub struct TransmitterPdu: RadioCommunicationsFamilyPdu = PduType::Transmitter {
        pub radio_entity_type: RadioEntityType,
        pub transmit_state: u8,
        pub input_source: u8,
        pub padding1: u16,
        pub antenna_location: Vector3Double,
        pub relative_antenna_location: Vector3Float,
        pub antenna_pattern_type: u16,
        pub frequency: u64,
        pub transmit_frequency_bandwidth: f32,
        pub power: f32,
        pub modulation_type: ModulationType,
        pub crypto_system: u16,
        pub crypto_key_id: u16,
        pub padding2: u16,
        pub padding3: u8,
        pub modulation_parameters_list: Vec<Vector3Float>,
        pub antenna_pattern_list: Vec<Vector3Float>,
    }
    layout {
        radio_entity_type,
        transmit_state,
        input_source,
        padding1,
        antenna_location,
        relative_antenna_location,
        antenna_pattern_type,
        antenna_pattern_list: count<u16>,
        frequency,
        transmit_frequency_bandwidth,
        power,
        modulation_type,
        crypto_system,
        crypto_key_id,
        modulation_parameters_list: count<u8>,
        padding2,
        padding3,
        modulation_parameters_list: list,
        antenna_pattern_list: list,
    }
}

dis_pdu! {
    pub struct ReceiverPdu: RadioCommunicationsFamilyPdu = PduType::Receiver {
        pub receiver_state: u16,
        pub padding1: u16,
        pub received_power: f32,
        pub transmitter_entity_id: EntityId,
        pub transmitter_radio_id: u16,
    }
}

dis_pdu! {
    /// Intercom audio or data. The family's `radio_id` carries the
    /// communications device id.
    pub struct IntercomSignalPdu: RadioCommunicationsFamilyPdu = PduType::IntercomSignal {
        pub encoding_scheme: u16,
        pub tdl_type: u16,
        pub sample_rate: u32,
        pub samples: u16,
        pub data: Vec<u8>,
    }
    layout {
        encoding_scheme,
        tdl_type,
        sample_rate,
        data: count<u16>,
        samples,
        data: list,
    }
}

/// Encoded size of the fixed part of [`SignalPdu`] after the family record.
const SIGNAL_FIXED_SIZE: usize = 12;

/// Digitised audio or tactical data link payload.
///
/// `data_length` is the payload length in bits. Leave it at zero to have it
/// derived from `data` on write; a non-zero value must describe `data`
/// exactly (rounded up to whole bytes). Writing with auto length stores the
/// derived value back into `data_length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalPdu {
    pub base: RadioCommunicationsFamilyPdu,
    pub encoding_scheme: u16,
    pub tdl_type: u16,
    pub sample_rate: u32,
    pub data_length: u16,
    pub samples: u16,
    pub data: Vec<u8>,
}

impl Default for SignalPdu {
    fn default() -> Self {
        let mut base = RadioCommunicationsFamilyPdu::default();
        base.header.pdu_type = PduType::Signal as u8;
        Self {
            base,
            encoding_scheme: 0,
            tdl_type: 0,
            sample_rate: 0,
            data_length: 0,
            samples: 0,
            data: Vec::new(),
        }
    }
}

impl SignalPdu {
    /// The bit length that goes on the wire.
    pub fn wire_data_length(&self) -> Result<u16> {
        if self.data_length == 0 && !self.data.is_empty() {
            let bits = self.data.len() * 8;
            return u16::try_from(bits).map_err(|_| Fault::InconsistentLength {
                field: "data_length",
                declared: u16::MAX as usize,
                actual: bits,
            });
        }
        let declared = self.data_length as usize;
        if declared.div_ceil(8) != self.data.len() {
            return Err(Fault::InconsistentLength {
                field: "data_length",
                declared,
                actual: self.data.len() * 8,
            });
        }
        Ok(self.data_length)
    }
}

impl Field for SignalPdu {
    const TYPE_NAME: &'static str = "SignalPdu";

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

impl Record for SignalPdu {
    const NAME: &'static str = "SignalPdu";

    fn encoded_size(&self) -> usize {
        self.base.encoded_size() + SIGNAL_FIXED_SIZE + self.data.len()
    }

    fn write(&self, w: &mut Writer) -> Result<()> {
        let data_length = self.wire_data_length()?;
        self.base.write(w)?;
        w.u16(self.encoding_scheme);
        w.u16(self.tdl_type);
        w.u32(self.sample_rate);
        w.u16(data_length);
        w.u16(self.samples);
        w.buf(&self.data);
        Ok(())
    }

    fn read(&mut self, r: &mut Reader<'_>) -> Result<()> {
        self.base.read(r)?;
        self.encoding_scheme = r.u16()?;
        self.tdl_type = r.u16()?;
        self.sample_rate = r.u32()?;
        self.data_length = r.u16()?;
        self.samples = r.u16()?;
        let len = (self.data_length as usize).div_ceil(8);
        self.data.clear();
        self.data.extend_from_slice(r.buf(len)?);
        Ok(())
    }

    fn describe_fields(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.base.describe_field("base", out)?;
        self.encoding_scheme.describe_field("encoding_scheme", out)?;
        self.tdl_type.describe_field("tdl_type", out)?;
        self.sample_rate.describe_field("sample_rate", out)?;
        self.data_length.describe_field("data_length", out)?;
        self.samples.describe_field("samples", out)?;
        describe::bytes(out, "data", &self.data)
    }

    fn hash_fields(&self, state: &mut dyn Hasher) {
        self.base.hash_field(state);
        state.write_u16(self.encoding_scheme);
        state.write_u16(self.tdl_type);
        state.write_u32(self.sample_rate);
        state.write_u16(self.data_length);
        state.write_u16(self.samples);
        state.write_usize(self.data.len());
        state.write(&self.data);
    }
}

impl Hash for SignalPdu {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_fields(state)
    }
}

impl Pdu for SignalPdu {
    const PDU_TYPE: PduType = PduType::Signal;
    const PROTOCOL_FAMILY: ProtocolFamily = ProtocolFamily::RadioCommunications;

    fn header(&self) -> &PduHeader {
        self.base.header()
    }

    fn header_mut(&mut self) -> &mut PduHeader {
        self.base.header_mut()
    }

    fn write_with_auto_length(&mut self, w: &mut Writer) -> Result<()> {
        self.data_length = self.wire_data_length()?;
        self.set_auto_length()?;
        self.write(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HEADER_SIZE;

    const FAMILY_SIZE: usize = HEADER_SIZE + 8;

    #[test]
    fn transmitter_fixed_size() {
        assert_eq!(TransmitterPdu::default().encoded_size(), FAMILY_SIZE + 84);
    }

    #[test]
    fn transmitter_counts_and_lists_cross() {
        let mut pdu = TransmitterPdu::default();
        pdu.antenna_pattern_list = vec![Vector3Float { x: 1.0, y: 0.0, z: 0.0 }];
        pdu.modulation_parameters_list = vec![Vector3Float::default(); 2];
        let bytes = pdu.to_bytes().unwrap();
        let body = &bytes[FAMILY_SIZE..];
        // antenna pattern count right after the pattern type
        assert_eq!(&body[50..52], &[0, 1]);
        // modulation parameter count after the crypto key id
        assert_eq!(body[80], 2);
        // modulation parameters come before the antenna pattern
        assert_eq!(&body[84 + 24..84 + 28], &1.0f32.to_be_bytes());
        assert_eq!(TransmitterPdu::from_bytes(&bytes).unwrap(), pdu);
    }

    #[test]
    fn receiver_size() {
        assert_eq!(ReceiverPdu::default().encoded_size(), FAMILY_SIZE + 16);
    }

    #[test]
    fn signal_derives_bit_length() {
        let mut pdu = SignalPdu::default();
        pdu.data = vec![1, 2, 3];
        assert_eq!(pdu.wire_data_length().unwrap(), 24);
        let bytes = pdu.to_bytes().unwrap();
        assert_eq!(&bytes[FAMILY_SIZE + 8..FAMILY_SIZE + 10], &[0, 24]);
        let back = SignalPdu::from_bytes(&bytes).unwrap();
        assert_eq!(back.data_length, 24);
        assert_eq!(back.data, vec![1, 2, 3]);
    }

    #[test]
    fn signal_partial_byte() {
        let mut pdu = SignalPdu::default();
        pdu.data_length = 12;
        pdu.data = vec![0xAB, 0xC0];
        let bytes = pdu.to_bytes().unwrap();
        assert_eq!(bytes.len(), FAMILY_SIZE + 12 + 2);
        assert_eq!(SignalPdu::from_bytes(&bytes).unwrap(), pdu);
    }

    #[test]
    fn signal_length_mismatch() {
        let mut pdu = SignalPdu::default();
        pdu.data_length = 32;
        pdu.data = vec![0; 3];
        assert_eq!(
            pdu.to_bytes().unwrap_err(),
            Fault::InconsistentLength {
                field: "data_length",
                declared: 32,
                actual: 24
            }
        );
    }

    #[test]
    fn intercom_signal_byte_count() {
        let mut pdu = IntercomSignalPdu::default();
        pdu.data = b"abc".to_vec();
        let bytes = pdu.to_bytes().unwrap();
        assert_eq!(&bytes[FAMILY_SIZE + 8..FAMILY_SIZE + 10], &[0, 3]);
        assert_eq!(&bytes[FAMILY_SIZE + 12..], b"abc");
    }
}
