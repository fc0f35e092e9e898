use crate::family::EntityInformationFamilyPdu;
use crate::records::{
    ArticulationParameter, DeadReckoningParameter, EntityId, EntityType, EventId, Marking,
    Orientation, Vector3Double, Vector3Float,
};
use crate::PduType;

dis_pdu! {
    /// Position, motion and appearance of one entity.
    pub struct EntityStatePdu: EntityInformationFamilyPdu = PduType::EntityState {
        pub entity_id: EntityId,
        pub force_id: u8,
        pub entity_type: EntityType,
        pub alternative_entity_type: EntityType,
        pub entity_linear_velocity: Vector3Float,
        pub entity_location: Vector3Double,
        pub entity_orientation: Orientation,
        pub entity_appearance: u32,
        pub dead_reckoning_parameters: DeadReckoningParameter,
        pub marking: Marking,
        pub capabilities: u32,
        pub articulation_parameters: Vec<ArticulationParameter>,
    }
    layout {
        entity_id,
        force_id,
        articulation_parameters: count<u8>,
        entity_type,
        alternative_entity_type,
        entity_linear_velocity,
        entity_location,
        entity_orientation,
        entity_appearance,
        dead_reckoning_parameters,
        marking,
        capabilities,
        articulation_parameters: list,
    }
}

dis_pdu! {
    pub struct CollisionPdu: EntityInformationFamilyPdu = PduType::Collision {
        pub issuing_entity_id: EntityId,
        pub colliding_entity_id: EntityId,
        pub event_id: EventId,
        pub collision_type: u8,
        pub pad: i8,
        pub velocity: Vector3Float,
        pub mass: f32,
        /// Collision point in the issuing entity's coordinate system.
        pub location: Vector3Float,
    }
}

dis_pdu! {
    /// Reduced entity state carrying only the fields that change often.
    pub struct EntityStateUpdatePdu: EntityInformationFamilyPdu = PduType::EntityStateUpdate {
        pub entity_id: EntityId,
        pub padding1: i8,
        pub entity_linear_velocity: Vector3Float,
        pub entity_location: Vector3Double,
        pub entity_orientation: Orientation,
        pub entity_appearance: i32,
        pub articulation_parameters: Vec<ArticulationParameter>,
    }
    layout {
        entity_id,
        padding1,
        articulation_parameters: count<u8>,
        entity_linear_velocity,
        entity_location,
        entity_orientation,
        entity_appearance,
        articulation_parameters: list,
    }
}
