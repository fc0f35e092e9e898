use crate::family::DistributedEmissionsFamilyPdu;
use crate::records::{ElectronicEmissionSystemData, EntityId, EventId, Vector3Double, Vector3Float};
use crate::PduType;

dis_pdu! {
    /// Active emitter systems of one entity, their beams and the targets
    /// each beam tracks or jams.
    pub struct ElectronicEmissionsPdu: DistributedEmissionsFamilyPdu = PduType::ElectronicEmissions {
        pub emitting_entity_id: EntityId,
        pub event_id: EventId,
        pub state_update_indicator: u8,
        pub padding_for_emissions_pdu: u16,
        pub systems: Vec<ElectronicEmissionSystemData>,
    }
    layout {
        emitting_entity_id,
        event_id,
        state_update_indicator,
        systems: count<u8>,
        padding_for_emissions_pdu,
        systems: list,
    }
}

dis_pdu! {
    /// Laser designation of a spot on (or near) an entity.
    pub struct DesignatorPdu: DistributedEmissionsFamilyPdu = PduType::Designator {
        pub designating_entity_id: EntityId,
        pub code_name: u16,
        pub designated_entity_id: EntityId,
        pub designator_code: u16,
        pub designator_power: f32,
        pub designator_wavelength: f32,
        pub designator_spot_wrt_designated: Vector3Float,
        pub designator_spot_location: Vector3Double,
        pub dead_reckoning_algorithm: i8,
        pub padding1: u16,
        pub padding2: i8,
        pub entity_linear_acceleration: Vector3Float,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ElectronicEmissionBeamData, TrackJamTarget};
    use crate::{Fault, Record, HEADER_SIZE};

    fn emissions() -> ElectronicEmissionsPdu {
        let beam = ElectronicEmissionBeamData {
            beam_id_number: 1,
            track_jam_targets: vec![TrackJamTarget {
                track_jam: EntityId {
                    site: 1,
                    application: 2,
                    entity: 3,
                },
                emitter_id: 1,
                beam_id: 1,
            }],
            ..Default::default()
        };
        ElectronicEmissionsPdu {
            state_update_indicator: 1,
            systems: vec![ElectronicEmissionSystemData {
                beams: vec![beam.clone(), beam],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn emissions_layout() {
        assert_eq!(ElectronicEmissionsPdu::default().encoded_size(), HEADER_SIZE + 16);
        let pdu = emissions();
        assert_eq!(pdu.encoded_size(), HEADER_SIZE + 16 + 20 + 2 * 60);
        let bytes = pdu.to_bytes().unwrap();
        assert_eq!(bytes[2], 23);
        assert_eq!(bytes[HEADER_SIZE + 13], 1);
        assert_eq!(bytes[HEADER_SIZE + 16] as usize, (20 + 2 * 60) / 4);
        assert_eq!(bytes[HEADER_SIZE + 17], 2);
        assert_eq!(ElectronicEmissionsPdu::from_bytes(&bytes).unwrap(), pdu);
    }

    #[test]
    fn system_length_mismatch_is_detected() {
        let mut bytes = emissions().to_bytes().unwrap();
        bytes[HEADER_SIZE + 16] = 5;
        assert_eq!(
            ElectronicEmissionsPdu::from_bytes(&bytes),
            Err(Fault::InconsistentLength {
                field: "system_data_length",
                declared: 5,
                actual: 35
            })
        );
    }

    #[test]
    fn designator_size() {
        assert_eq!(DesignatorPdu::default().encoded_size(), HEADER_SIZE + 76);
    }

    #[test]
    fn designator_wavelength_position() {
        let pdu = DesignatorPdu {
            designator_wavelength: 1.064,
            ..Default::default()
        };
        let bytes = pdu.to_bytes().unwrap();
        assert_eq!(bytes[2], 24);
        assert_eq!(bytes[3], 6);
        assert_eq!(&bytes[HEADER_SIZE + 20..HEADER_SIZE + 24], &1.064f32.to_be_bytes());
    }
}
