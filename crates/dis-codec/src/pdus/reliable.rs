use crate::family::SimulationManagementWithReliabilityFamilyPdu;
use crate::records::{ClockTime, FixedDatum, VariableDatum};
use crate::PduType;

dis_pdu! {
    pub struct CreateEntityReliablePdu: SimulationManagementWithReliabilityFamilyPdu =
        PduType::CreateEntityReliable {
        pub required_reliability_service: u8,
        pub pad1: u16,
        pub pad2: u8,
        pub request_id: u32,
    }
}

dis_pdu! {
    pub struct RemoveEntityReliablePdu: SimulationManagementWithReliabilityFamilyPdu =
        PduType::RemoveEntityReliable {
        pub required_reliability_service: u8,
        pub pad1: u16,
        pub pad2: u8,
        pub request_id: u32,
    }
}

dis_pdu! {
    pub struct StartResumeReliablePdu: SimulationManagementWithReliabilityFamilyPdu =
        PduType::StartResumeReliable {
        pub real_world_time: ClockTime,
        pub simulation_time: ClockTime,
        pub required_reliability_service: u8,
        pub pad1: u16,
        pub pad2: u8,
        pub request_id: u32,
    }
}

dis_pdu! {
    pub struct CommentReliablePdu: SimulationManagementWithReliabilityFamilyPdu =
        PduType::CommentReliable {
        pub fixed_datums: Vec<FixedDatum>,
        pub variable_datums: Vec<VariableDatum>,
    }
    layout {
        fixed_datums: count<u32>,
        variable_datums: count<u32>,
        fixed_datums: list,
        variable_datums: list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pdu, Record, HEADER_SIZE};

    #[test]
    fn reliable_family_discriminant() {
        let pdu = CreateEntityReliablePdu::default();
        assert_eq!(pdu.header().protocol_family, 10);
        assert_eq!(pdu.header().pdu_type, 51);
        assert_eq!(pdu.encoded_size(), HEADER_SIZE + 12 + 8);
    }

    #[test]
    fn start_resume_reliable_roundtrip() {
        let mut pdu = StartResumeReliablePdu::default();
        pdu.real_world_time = ClockTime {
            hour: 400_000,
            time_past_hour: 17,
        };
        pdu.required_reliability_service = 1;
        pdu.request_id = 0xCAFE;
        let bytes = pdu.to_bytes().unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE + 12 + 24);
        assert_eq!(StartResumeReliablePdu::from_bytes(&bytes).unwrap(), pdu);
    }
}
