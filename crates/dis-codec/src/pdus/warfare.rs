use crate::family::WarfareFamilyPdu;
use crate::records::{ArticulationParameter, BurstDescriptor, EntityId, EventId, Vector3Double, Vector3Float};
use crate::PduType;

dis_pdu! {
    pub struct FirePdu: WarfareFamilyPdu = PduType::Fire {
        pub munition_id: EntityId,
        pub event_id: EventId,
        pub fire_mission_index: u32,
        pub location_in_world_coordinates: Vector3Double,
        pub burst_descriptor: BurstDescriptor,
        pub velocity: Vector3Float,
        pub range: f32,
    }
}

dis_pdu! {
    pub struct DetonationPdu: WarfareFamilyPdu = PduType::Detonation {
        pub munition_id: EntityId,
        pub event_id: EventId,
        pub velocity: Vector3Float,
        pub location_in_world_coordinates: Vector3Double,
        pub burst_descriptor: BurstDescriptor,
        pub location_in_entity_coordinates: Vector3Float,
        pub detonation_result: u8,
        pub pad: i16,
        pub articulation_parameters: Vec<ArticulationParameter>,
    }
    layout {
        munition_id,
        event_id,
        velocity,
        location_in_world_coordinates,
        burst_descriptor,
        location_in_entity_coordinates,
        detonation_result,
        articulation_parameters: count<u8>,
        pad,
        articulation_parameters: list,
    }
}
