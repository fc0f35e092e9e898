//! PDU dispatch on the header's type field, and datagram splitting.

use dis_buffers::{Reader, Writer};
use serde::{Deserialize, Serialize};

use crate::pdus::*;
use crate::{Fault, Pdu, PduHeader, PduType, Record, Result, HEADER_SIZE};

macro_rules! any_pdu {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Any PDU this crate can decode, or the raw bytes of one it cannot.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum AnyPdu {
            $( $variant($ty), )+
            /// A PDU type without a decoder: its header and the bytes after it.
            Unknown(PduHeader, Vec<u8>),
        }

        impl AnyPdu {
            /// A default-initialised PDU of the type `header` announces.
            pub fn for_header(header: &PduHeader) -> Self {
                match header.kind() {
                    $( Some(PduType::$variant) => AnyPdu::$variant(<$ty>::default()), )+
                    None => AnyPdu::Unknown(header.clone(), Vec::new()),
                }
            }

            pub fn header(&self) -> &PduHeader {
                match self {
                    $( AnyPdu::$variant(pdu) => pdu.header(), )+
                    AnyPdu::Unknown(header, _) => header,
                }
            }

            pub fn header_mut(&mut self) -> &mut PduHeader {
                match self {
                    $( AnyPdu::$variant(pdu) => pdu.header_mut(), )+
                    AnyPdu::Unknown(header, _) => header,
                }
            }

            /// Record name of the wrapped PDU.
            pub fn name(&self) -> &'static str {
                match self {
                    $( AnyPdu::$variant(_) => <$ty as Record>::NAME, )+
                    AnyPdu::Unknown(..) => "UnknownPdu",
                }
            }

            pub fn encoded_size(&self) -> usize {
                match self {
                    $( AnyPdu::$variant(pdu) => pdu.encoded_size(), )+
                    AnyPdu::Unknown(header, body) => header.encoded_size() + body.len(),
                }
            }

            /// Decodes into the wrapped PDU. On failure the PDU keeps what
            /// was decoded before the fault.
            pub fn read(&mut self, r: &mut Reader<'_>) -> Result<()> {
                match self {
                    $( AnyPdu::$variant(pdu) => pdu.read(r), )+
                    AnyPdu::Unknown(header, body) => {
                        header.read(r)?;
                        let declared = header.length as usize;
                        let len = if declared >= HEADER_SIZE {
                            declared - HEADER_SIZE
                        } else {
                            r.size()
                        };
                        body.clear();
                        body.extend_from_slice(r.buf(len)?);
                        Ok(())
                    }
                }
            }

            pub fn write(&self, w: &mut Writer) -> Result<()> {
                match self {
                    $( AnyPdu::$variant(pdu) => pdu.write(w), )+
                    AnyPdu::Unknown(header, body) => {
                        header.write(w)?;
                        w.buf(body);
                        Ok(())
                    }
                }
            }

            /// Fills in the derived length fields of the wrapped PDU, then
            /// writes.
            pub fn write_with_auto_length(&mut self, w: &mut Writer) -> Result<()> {
                match self {
                    $( AnyPdu::$variant(pdu) => pdu.write_with_auto_length(w), )+
                    AnyPdu::Unknown(header, body) => {
                        let size = HEADER_SIZE + body.len();
                        header.length = u16::try_from(size).map_err(|_| Fault::InconsistentLength {
                            field: "length",
                            declared: u16::MAX as usize,
                            actual: size,
                        })?;
                        header.write(w)?;
                        w.buf(body);
                        Ok(())
                    }
                }
            }
        }

        $(
            impl From<$ty> for AnyPdu {
                fn from(pdu: $ty) -> Self {
                    AnyPdu::$variant(pdu)
                }
            }
        )+
    };
}

any_pdu! {
    EntityState(EntityStatePdu),
    Fire(FirePdu),
    Detonation(DetonationPdu),
    Collision(CollisionPdu),
    ServiceRequest(ServiceRequestPdu),
    ResupplyOffer(ResupplyOfferPdu),
    ResupplyReceived(ResupplyReceivedPdu),
    ResupplyCancel(ResupplyCancelPdu),
    RepairComplete(RepairCompletePdu),
    RepairResponse(RepairResponsePdu),
    CreateEntity(CreateEntityPdu),
    RemoveEntity(RemoveEntityPdu),
    StartResume(StartResumePdu),
    StopFreeze(StopFreezePdu),
    Acknowledge(AcknowledgePdu),
    ActionRequest(ActionRequestPdu),
    ActionResponse(ActionResponsePdu),
    DataQuery(DataQueryPdu),
    SetData(SetDataPdu),
    Data(DataPdu),
    EventReport(EventReportPdu),
    Comment(CommentPdu),
    ElectronicEmissions(ElectronicEmissionsPdu),
    Designator(DesignatorPdu),
    Transmitter(TransmitterPdu),
    Signal(SignalPdu),
    Receiver(ReceiverPdu),
    IntercomSignal(IntercomSignalPdu),
    CreateEntityReliable(CreateEntityReliablePdu),
    RemoveEntityReliable(RemoveEntityReliablePdu),
    StartResumeReliable(StartResumeReliablePdu),
    CommentReliable(CommentReliablePdu),
    EntityStateUpdate(EntityStateUpdatePdu),
}

impl AnyPdu {
    /// Decodes the PDU at the front of `data`, whatever its type.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let header = PduHeader::peek(data)?;
        let mut pdu = AnyPdu::for_header(&header);
        pdu.read(&mut Reader::new(data))?;
        tracing::trace!("decoded {} ({} bytes)", pdu.name(), data.len());
        Ok(pdu)
    }

    /// Encodes with the header `length` set to the encoded size.
    pub fn encode(&mut self) -> Result<Vec<u8>> {
        let mut w = Writer::with_capacity(self.encoded_size());
        self.write_with_auto_length(&mut w)?;
        Ok(w.into_vec())
    }

    /// The header's PDU type, if known.
    pub fn kind(&self) -> Option<PduType> {
        self.header().kind()
    }
}

/// Splits one datagram holding back-to-back PDUs using each header's
/// `length` field.
///
/// Iteration ends at the end of the datagram or at a header whose length is
/// zero. A length shorter than the header or longer than what is left yields
/// one fault and ends the iteration.
pub fn split_datagram(data: &[u8]) -> DatagramIter<'_> {
    DatagramIter {
        reader: Reader::new(data),
        done: false,
    }
}

/// Iterator returned by [`split_datagram`].
#[derive(Debug, Clone)]
pub struct DatagramIter<'a> {
    reader: Reader<'a>,
    done: bool,
}

impl<'a> DatagramIter<'a> {
    fn next_pdu(&mut self) -> Result<Option<&'a [u8]>> {
        if self.reader.is_empty() {
            return Ok(None);
        }
        let header = PduHeader::peek(&self.reader.uint8[self.reader.x..self.reader.end])?;
        let length = header.length as usize;
        if length == 0 {
            return Ok(None);
        }
        if length < HEADER_SIZE {
            return Err(Fault::InconsistentLength {
                field: "length",
                declared: length,
                actual: HEADER_SIZE,
            });
        }
        Ok(Some(self.reader.buf(length)?))
    }
}

impl<'a> Iterator for DatagramIter<'a> {
    type Item = Result<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_pdu() {
            Ok(Some(pdu)) => Some(Ok(pdu)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(fault) => {
                self.done = true;
                Some(Err(fault))
            }
        }
    }
}

impl std::iter::FusedIterator for DatagramIter<'_> {}
