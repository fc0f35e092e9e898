//! Leaf PDUs, grouped by protocol family.

mod distributed_emissions;
mod entity_info;
mod logistics;
mod radio;
mod reliable;
mod simulation_management;
mod warfare;

pub use distributed_emissions::{DesignatorPdu, ElectronicEmissionsPdu};
pub use entity_info::{CollisionPdu, EntityStatePdu, EntityStateUpdatePdu};
pub use logistics::{
    RepairCompletePdu, RepairResponsePdu, ResupplyCancelPdu, ResupplyOfferPdu,
    ResupplyReceivedPdu, ServiceRequestPdu,
};
pub use radio::{IntercomSignalPdu, ReceiverPdu, SignalPdu, TransmitterPdu};
pub use reliable::{
    CommentReliablePdu, CreateEntityReliablePdu, RemoveEntityReliablePdu, StartResumeReliablePdu,
};
pub use simulation_management::{
    AcknowledgePdu, ActionRequestPdu, ActionResponsePdu, CommentPdu, CreateEntityPdu, DataPdu,
    DataQueryPdu, EventReportPdu, RemoveEntityPdu, SetDataPdu, StartResumePdu, StopFreezePdu,
};
pub use warfare::{DetonationPdu, FirePdu};
