use crate::family::SimulationManagementFamilyPdu;
use crate::records::{ClockTime, FixedDatum, VariableDatum};
use crate::PduType;

dis_pdu! {
    pub struct CreateEntityPdu: SimulationManagementFamilyPdu = PduType::CreateEntity {
        pub request_id: u32,
    }
}

dis_pdu! {
    pub struct RemoveEntityPdu: SimulationManagementFamilyPdu = PduType::RemoveEntity {
        pub request_id: u32,
    }
}

dis_pdu! {
    pub struct StartResumePdu: SimulationManagementFamilyPdu = PduType::StartResume {
        pub real_world_time: ClockTime,
        pub simulation_time: ClockTime,
        pub request_id: u32,
    }
}

dis_pdu! {
    pub struct StopFreezePdu: SimulationManagementFamilyPdu = PduType::StopFreeze {
        pub real_world_time: ClockTime,
        pub reason: u8,
        pub frozen_behavior: u8,
        pub padding1: i16,
        pub request_id: u32,
    }
}

dis_pdu! {
    pub struct AcknowledgePdu: SimulationManagementFamilyPdu = PduType::Acknowledge {
        pub acknowledge_flag: u16,
        pub response_flag: u16,
        pub request_id: u32,
    }
}

dis_pdu! {
    pub struct ActionRequestPdu: SimulationManagementFamilyPdu = PduType::ActionRequest {
        pub request_id: u32,
        pub action_id: u32,
        pub fixed_datums: Vec<FixedDatum>,
        pub variable_datums: Vec<VariableDatum>,
    }
    layout {
        request_id,
        action_id,
        fixed_datums: count<u32>,
        variable_datums: count<u32>,
        fixed_datums: list,
        variable_datums: list,
    }
}

dis_pdu! {
    pub struct ActionResponsePdu: SimulationManagementFamilyPdu = PduType::ActionResponse {
        pub request_id: u32,
        pub request_status: u32,
        pub fixed_datums: Vec<FixedDatum>,
        pub variable_datums: Vec<VariableDatum>,
    }
    layout {
        request_id,
        request_status,
        fixed_datums: count<u32>,
        variable_datums: count<u32>,
        fixed_datums: list,
        variable_datums: list,
    }
}

dis_pdu! {
    pub struct DataQueryPdu: SimulationManagementFamilyPdu = PduType::DataQuery {
        pub request_id: u32,
        pub time_interval: u32,
        pub fixed_datums: Vec<FixedDatum>,
        pub variable_datums: Vec<VariableDatum>,
    }
    layout {
        request_id,
        time_interval,
        fixed_datums: count<u32>,
        variable_datums: count<u32>,
        fixed_datums: list,
        variable_datums: list,
    }
}

dis_pdu! {
    pub struct SetDataPdu: SimulationManagementFamilyPdu = PduType::SetData {
        pub request_id: u32,
        pub padding1: u32,
        pub fixed_datums: Vec<FixedDatum>,
        pub variable_datums: Vec<VariableDatum>,
    }
    layout {
        request_id,
        padding1,
        fixed_datums: count<u32>,
        variable_datums: count<u32>,
        fixed_datums: list,
        variable_datums: list,
    }
}

dis_pdu! {
    pub struct DataPdu: SimulationManagementFamilyPdu = PduType::Data {
        pub request_id: u32,
        pub padding1: u32,
        pub fixed_datums: Vec<FixedDatum>,
        pub variable_datums: Vec<VariableDatum>,
    }
    layout {
        request_id,
        padding1,
        fixed_datums: count<u32>,
        variable_datums: count<u32>,
        fixed_datums: list,
        variable_datums: list,
    }
}

dis_pdu! {
    pub struct EventReportPdu: SimulationManagementFamilyPdu = PduType::EventReport {
        pub event_type: u32,
        pub padding1: u32,
        pub fixed_datums: Vec<FixedDatum>,
        pub variable_datums: Vec<VariableDatum>,
    }
    layout {
        event_type,
        padding1,
        fixed_datums: count<u32>,
        variable_datums: count<u32>,
        fixed_datums: list,
        variable_datums: list,
    }
}

dis_pdu! {
    pub struct CommentPdu: SimulationManagementFamilyPdu = PduType::Comment {
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
