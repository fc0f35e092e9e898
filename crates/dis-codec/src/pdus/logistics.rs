use crate::family::LogisticsFamilyPdu;
use crate::records::{EntityId, SupplyQuantity};
use crate::PduType;

dis_pdu! {
    pub struct ServiceRequestPdu: LogisticsFamilyPdu = PduType::ServiceRequest {
        pub requesting_entity_id: EntityId,
        pub servicing_entity_id: EntityId,
        pub service_type_requested: u8,
        pub service_request_padding: i16,
        pub supplies: Vec<SupplyQuantity>,
    }
    layout {
        requesting_entity_id,
        servicing_entity_id,
        service_type_requested,
        supplies: count<u8>,
        service_request_padding,
        supplies: list,
    }
}

dis_pdu! {
    pub struct ResupplyOfferPdu: LogisticsFamilyPdu = PduType::ResupplyOffer {
        pub receiving_entity_id: EntityId,
        pub supplying_entity_id: EntityId,
        pub padding1: i16,
        pub padding2: i8,
        pub supplies: Vec<SupplyQuantity>,
    }
    layout {
        receiving_entity_id,
        supplying_entity_id,
        supplies: count<u8>,
        padding1,
        padding2,
        supplies: list,
    }
}

dis_pdu! {
    pub struct ResupplyReceivedPdu: LogisticsFamilyPdu = PduType::ResupplyReceived {
        pub receiving_entity_id: EntityId,
        pub supplying_entity_id: EntityId,
        pub padding1: i16,
        pub padding2: i8,
        pub supplies: Vec<SupplyQuantity>,
    }
    layout {
        receiving_entity_id,
        supplying_entity_id,
        supplies: count<u8>,
        padding1,
        padding2,
        supplies: list,
    }
}

dis_pdu! {
    pub struct ResupplyCancelPdu: LogisticsFamilyPdu = PduType::ResupplyCancel {
        pub receiving_entity_id: EntityId,
        pub supplying_entity_id: EntityId,
    }
}

dis_pdu! {
    pub struct RepairCompletePdu: LogisticsFamilyPdu = PduType::RepairComplete {
        pub receiving_entity_id: EntityId,
        pub repairing_entity_id: EntityId,
        pub repair: u16,
        pub padding2: i16,
    }
}

dis_pdu! {
    pub struct RepairResponsePdu: LogisticsFamilyPdu = PduType::RepairResponse {
        pub receiving_entity_id: EntityId,
        pub repairing_entity_id: EntityId,
        pub repair_result: u8,
        pub padding1: i16,
        pub padding2: i8,
    }
}
