//! Common PDU header and the type/family discriminants it carries.

use dis_buffers::Reader;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Encoded size of [`PduHeader`].
pub const HEADER_SIZE: usize = 12;

/// Protocol version written by default (IEEE 1278.1a-1998).
pub const DEFAULT_PROTOCOL_VERSION: u8 = 6;

/// The 12-byte prologue every PDU starts with.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct PduHeader {
    pub protocol_version: u8,
    pub exercise_id: u8,
    pub pdu_type: u8,
    pub protocol_family: u8,
    pub timestamp: u32,
    /// Total encoded size of the PDU, header included.
    pub length: u16,
    pub padding: i16,
}

impl Default for PduHeader {
    fn default() -> Self {
        Self {
            protocol_version: DEFAULT_PROTOCOL_VERSION,
            exercise_id: 0,
            pdu_type: 0,
            protocol_family: 0,
            timestamp: 0,
            length: 0,
            padding: 0,
        }
    }
}

impl_record!(PduHeader {
    protocol_version,
    exercise_id,
    pdu_type,
    protocol_family,
    timestamp,
    length,
    padding,
});

impl PduHeader {
    /// Decodes the header at the front of `data` without consuming it.
    pub fn peek(data: &[u8]) -> Result<Self> {
        let mut header = Self::default();
        crate::Record::read(&mut header, &mut Reader::new(data))?;
        Ok(header)
    }

    /// The PDU type, if it is one this crate knows.
    pub fn kind(&self) -> Option<PduType> {
        PduType::from_u8(self.pdu_type)
    }

    /// The protocol family, if it is one this crate knows.
    pub fn family(&self) -> Option<ProtocolFamily> {
        ProtocolFamily::from_u8(self.protocol_family)
    }
}

/// PDU type discriminants implemented by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PduType {
    EntityState = 1,
    Fire = 2,
    Detonation = 3,
    Collision = 4,
    ServiceRequest = 5,
    ResupplyOffer = 6,
    ResupplyReceived = 7,
    ResupplyCancel = 8,
    RepairComplete = 9,
    RepairResponse = 10,
    CreateEntity = 11,
    RemoveEntity = 12,
    StartResume = 13,
    StopFreeze = 14,
    Acknowledge = 15,
    ActionRequest = 16,
    ActionResponse = 17,
    DataQuery = 18,
    SetData = 19,
    Data = 20,
    EventReport = 21,
    Comment = 22,
    ElectronicEmissions = 23,
    Designator = 24,
    Transmitter = 25,
    Signal = 26,
    Receiver = 27,
    IntercomSignal = 31,
    CreateEntityReliable = 51,
    RemoveEntityReliable = 52,
    StartResumeReliable = 53,
    CommentReliable = 62,
    EntityStateUpdate = 67,
}

impl PduType {
    pub fn from_u8(value: u8) -> Option<Self> {
        use PduType::*;
        Some(match value {
            1 => EntityState,
            2 => Fire,
            3 => Detonation,
            4 => Collision,
            5 => ServiceRequest,
            6 => ResupplyOffer,
            7 => ResupplyReceived,
            8 => ResupplyCancel,
            9 => RepairComplete,
            10 => RepairResponse,
            11 => CreateEntity,
            12 => RemoveEntity,
            13 => StartResume,
            14 => StopFreeze,
            15 => Acknowledge,
            16 => ActionRequest,
            17 => ActionResponse,
            18 => DataQuery,
            19 => SetData,
            20 => Data,
            21 => EventReport,
            22 => Comment,
            23 => ElectronicEmissions,
            24 => Designator,
            25 => Transmitter,
            26 => Signal,
            27 => Receiver,
            31 => IntercomSignal,
            51 => CreateEntityReliable,
            52 => RemoveEntityReliable,
            53 => StartResumeReliable,
            62 => CommentReliable,
            67 => EntityStateUpdate,
            _ => return None,
        })
    }
}

/// Protocol family discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ProtocolFamily {
    EntityInformation = 1,
    Warfare = 2,
    Logistics = 3,
    RadioCommunications = 4,
    SimulationManagement = 5,
    DistributedEmissions = 6,
    SimulationManagementWithReliability = 10,
}

impl ProtocolFamily {
    pub fn from_u8(value: u8) -> Option<Self> {
        use ProtocolFamily::*;
        Some(match value {
            1 => EntityInformation,
            2 => Warfare,
            3 => Logistics,
            4 => RadioCommunications,
            5 => SimulationManagement,
            6 => DistributedEmissions,
            10 => SimulationManagementWithReliability,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;

    #[test]
    fn header_is_twelve_bytes() {
        assert_eq!(PduHeader::default().encoded_size(), HEADER_SIZE);
    }

    #[test]
    fn default_version_is_six() {
        assert_eq!(PduHeader::default().protocol_version, 6);
    }

    #[test]
    fn peek_leaves_input_untouched() {
        let data = [6, 3, 1, 1, 0, 0, 0, 9, 0, 144, 0, 0, 0xAA];
        let header = PduHeader::peek(&data).unwrap();
        assert_eq!(header.exercise_id, 3);
        assert_eq!(header.timestamp, 9);
        assert_eq!(header.length, 144);
        assert_eq!(header.kind(), Some(PduType::EntityState));
        assert_eq!(header.family(), Some(ProtocolFamily::EntityInformation));
    }

    #[test]
    fn unknown_discriminants() {
        assert_eq!(PduType::from_u8(0), None);
        assert_eq!(PduType::from_u8(30), None);
        assert_eq!(PduType::from_u8(23), Some(PduType::ElectronicEmissions));
        assert_eq!(ProtocolFamily::from_u8(7), None);
        assert_eq!(PduType::from_u8(PduType::CommentReliable as u8), Some(PduType::CommentReliable));
    }
}
