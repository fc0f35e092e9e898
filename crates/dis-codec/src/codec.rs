//! Policy-governed entry points.

use std::fmt;
use std::sync::Arc;

use dis_buffers::{Reader, Writer};

use crate::policy::{FaultEvent, FaultPolicy, Operation};
use crate::{split_datagram, AnyPdu, Fault, Pdu, PduHeader, Record, Result};

/// Callback invoked for every fault when `raise_fault_event` is set.
pub type FaultObserver = Arc<dyn Fn(&FaultEvent) + Send + Sync>;

/// Encoder/decoder bound to a [`FaultPolicy`].
///
/// ```
/// use dis_codec::{Codec, FaultPolicy};
/// use dis_codec::pdus::AcknowledgePdu;
///
/// let codec = Codec::with_policy(FaultPolicy::default());
/// let mut ack = AcknowledgePdu::default();
/// ack.request_id = 7;
/// let bytes = codec.encode(&mut ack).unwrap();
/// assert_eq!(bytes.len(), 32);
/// let back: AcknowledgePdu = codec.decode(&bytes).unwrap();
/// assert_eq!(back, ack);
/// ```
#[derive(Clone)]
pub struct Codec {
    policy: FaultPolicy,
    observers: Vec<FaultObserver>,
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec {
    /// A codec using the process-wide default policy.
    pub fn new() -> Self {
        Self::with_policy(FaultPolicy::current())
    }

    pub fn with_policy(policy: FaultPolicy) -> Self {
        Self {
            policy,
            observers: Vec::new(),
        }
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    /// Registers a fault observer.
    pub fn on_fault<F>(&mut self, observer: F) -> &mut Self
    where
        F: Fn(&FaultEvent) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Applies the policy to a fault. `Ok` means the fault was swallowed.
    fn handle(&self, record: &'static str, operation: Operation, fault: Fault) -> Result<()> {
        if self.policy.trace_on_fault {
            tracing::warn!("{} {} failed: {}", record, operation, fault);
        }
        if self.policy.raise_fault_event && !self.observers.is_empty() {
            let event = FaultEvent {
                record,
                operation,
                fault: fault.clone(),
            };
            for observer in &self.observers {
                observer(&event);
            }
        }
        if self.policy.propagate_faults {
            Err(fault)
        } else {
            Ok(())
        }
    }

    fn govern(&self, record: &'static str, operation: Operation, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(fault) => self.handle(record, operation, fault),
        }
    }

    /// Writes `record` as is. A swallowed fault leaves the bytes written
    /// before it in `w`.
    pub fn write<R: Record>(&self, record: &R, w: &mut Writer) -> Result<()> {
        self.govern(R::NAME, Operation::Write, record.write(w))
    }

    /// Sets the header `length` to the encoded size, then writes.
    pub fn write_with_auto_length<P: Pdu>(&self, pdu: &mut P, w: &mut Writer) -> Result<()> {
        self.govern(P::NAME, Operation::WriteWithAutoLength, pdu.write_with_auto_length(w))
    }

    /// Reads into `record`. A swallowed fault leaves `record` partially
    /// populated.
    pub fn read<R: Record>(&self, record: &mut R, r: &mut Reader<'_>) -> Result<()> {
        self.govern(R::NAME, Operation::Read, record.read(r))
    }

    /// Encodes into a fresh buffer with the header `length` set.
    pub fn encode<P: Pdu>(&self, pdu: &mut P) -> Result<Vec<u8>> {
        let mut w = Writer::with_capacity(pdu.encoded_size());
        let result = pdu.write_with_auto_length(&mut w);
        self.govern(P::NAME, Operation::Encode, result)?;
        Ok(w.into_vec())
    }

    /// Decodes a fresh `P` from the front of `data`.
    ///
    /// The decoded header must carry `P`'s PDU type.
    pub fn decode<P: Pdu>(&self, data: &[u8]) -> Result<P> {
        let mut pdu = P::default();
        let result = pdu.read(&mut Reader::new(data)).and_then(|()| {
            let found = pdu.header().pdu_type;
            if found == P::PDU_TYPE as u8 {
                Ok(())
            } else {
                Err(Fault::StructuralMismatch {
                    expected: P::NAME,
                    found: found_name(pdu.header()),
                })
            }
        });
        self.govern(P::NAME, Operation::Decode, result)?;
        Ok(pdu)
    }

    /// Decodes from the front of `data` into an existing record.
    pub fn decode_into<R: Record>(&self, record: &mut R, data: &[u8]) -> Result<()> {
        self.govern(R::NAME, Operation::Decode, record.read(&mut Reader::new(data)))
    }

    /// Decodes the PDU at the front of `data`, dispatching on its type.
    ///
    /// When the header itself cannot be read and the fault is swallowed, the
    /// result is an [`AnyPdu::Unknown`] holding a default header.
    pub fn decode_any(&self, data: &[u8]) -> Result<AnyPdu> {
        self.decode_one(data).map(|(pdu, _)| pdu)
    }

    /// Decodes every PDU in a datagram. A swallowed fault ends the datagram
    /// at the faulting PDU, which is included partially populated.
    pub fn decode_datagram(&self, data: &[u8]) -> Result<Vec<AnyPdu>> {
        let mut pdus = Vec::new();
        for part in split_datagram(data) {
            match part {
                Ok(bytes) => {
                    let (pdu, faulted) = self.decode_one(bytes)?;
                    pdus.push(pdu);
                    if faulted {
                        break;
                    }
                }
                Err(fault) => {
                    self.handle("AnyPdu", Operation::SplitDatagram, fault)?;
                    break;
                }
            }
        }
        Ok(pdus)
    }

    /// Like [`decode_any`](Codec::decode_any), also reporting whether a
    /// fault was swallowed.
    fn decode_one(&self, data: &[u8]) -> Result<(AnyPdu, bool)> {
        let header = match PduHeader::peek(data) {
            Ok(header) => header,
            Err(fault) => {
                self.handle("AnyPdu", Operation::Decode, fault)?;
                return Ok((AnyPdu::Unknown(PduHeader::default(), Vec::new()), true));
            }
        };
        let mut pdu = AnyPdu::for_header(&header);
        match pdu.read(&mut Reader::new(data)) {
            Ok(()) => Ok((pdu, false)),
            Err(fault) => {
                self.handle(pdu.name(), Operation::Decode, fault)?;
                Ok((pdu, true))
            }
        }
    }
}

fn found_name(header: &PduHeader) -> String {
    match header.kind() {
        Some(kind) => format!("{kind:?}"),
        None => format!("pdu type {}", header.pdu_type),
    }
}
