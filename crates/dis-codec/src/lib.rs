//! Binary codec for Distributed Interactive Simulation (IEEE 1278.1) PDUs.
//!
//! Every PDU is a chain of records: the 12-byte [`PduHeader`], a protocol
//! family record that embeds it, and the leaf PDU that embeds the family.
//! Records are declared once with [`dis_record!`], [`dis_family!`] and
//! [`dis_pdu!`]; their size, marshaling, unmarshaling, text dump and hash
//! all come from that one declaration.
//!
//! ```
//! use dis_codec::pdus::EntityStatePdu;
//! use dis_codec::records::Marking;
//! use dis_codec::{AnyPdu, Codec, Record};
//!
//! let mut pdu = EntityStatePdu::default();
//! pdu.entity_id.entity = 42;
//! pdu.marking = Marking::ascii("EAGLE01");
//!
//! let codec = Codec::new();
//! let bytes = codec.encode(&mut pdu).unwrap();
//! assert_eq!(bytes.len(), pdu.encoded_size());
//!
//! match codec.decode_any(&bytes).unwrap() {
//!     AnyPdu::EntityState(decoded) => assert_eq!(decoded, pdu),
//!     other => panic!("unexpected {}", other.name()),
//! }
//! ```

#[macro_use]
mod macros;

mod codec;
pub mod describe;
mod error;
mod factory;
pub mod family;
mod field;
mod header;
pub mod list;
pub mod pdus;
pub mod policy;
mod record;
pub mod records;
pub mod time;

pub use codec::{Codec, FaultObserver};
pub use dis_buffers::{BufferError, Reader, Writer};
pub use error::{Fault, Result};
pub use factory::{split_datagram, AnyPdu, DatagramIter};
pub use field::Field;
pub use header::{PduHeader, PduType, ProtocolFamily, DEFAULT_PROTOCOL_VERSION, HEADER_SIZE};
pub use policy::{FaultEvent, FaultPolicy, Operation};
pub use record::{Pdu, PduFamily, Record};
pub use time::DisTimestamp;
