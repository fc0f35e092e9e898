//! Protocol family records: the middle link of the header chain.

use crate::records::EntityId;
use crate::ProtocolFamily;

dis_family! {
    pub struct EntityInformationFamilyPdu = ProtocolFamily::EntityInformation {}
}

dis_family! {
    pub struct WarfareFamilyPdu = ProtocolFamily::Warfare {
        pub firing_entity_id: EntityId,
        pub target_entity_id: EntityId,
    }
}

dis_family! {
    pub struct LogisticsFamilyPdu = ProtocolFamily::Logistics {}
}

dis_family! {
    pub struct RadioCommunicationsFamilyPdu = ProtocolFamily::RadioCommunications {
        /// Entity the radio is attached to.
        pub entity_id: EntityId,
        pub radio_id: u16,
    }
}

dis_family! {
    pub struct SimulationManagementFamilyPdu = ProtocolFamily::SimulationManagement {
        pub originating_entity_id: EntityId,
        pub receiving_entity_id: EntityId,
    }
}

dis_family! {
    pub struct DistributedEmissionsFamilyPdu = ProtocolFamily::DistributedEmissions {}
}

dis_family! {
    pub struct SimulationManagementWithReliabilityFamilyPdu =
        ProtocolFamily::SimulationManagementWithReliability {
        pub originating_entity_id: EntityId,
        pub receiving_entity_id: EntityId,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PduFamily, Record, HEADER_SIZE};

    #[test]
    fn default_stamps_family() {
        let family = WarfareFamilyPdu::default();
        assert_eq!(family.header.protocol_family, 2);
        assert_eq!(family.header.pdu_type, 0);
        assert_eq!(
            SimulationManagementWithReliabilityFamilyPdu::default().header().protocol_family,
            10
        );
    }

    #[test]
    fn family_sizes() {
        assert_eq!(EntityInformationFamilyPdu::default().encoded_size(), HEADER_SIZE);
        assert_eq!(WarfareFamilyPdu::default().encoded_size(), HEADER_SIZE + 12);
        assert_eq!(RadioCommunicationsFamilyPdu::default().encoded_size(), HEADER_SIZE + 8);
    }

    #[test]
    fn header_is_written_first() {
        let mut family = RadioCommunicationsFamilyPdu::default();
        family.radio_id = 0x0102;
        let bytes = family.to_bytes().unwrap();
        assert_eq!(bytes[0], 6);
        assert_eq!(bytes[3], 4);
        assert_eq!(&bytes[18..], &[0x01, 0x02]);
    }
}
