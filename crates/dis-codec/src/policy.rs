//! Fault handling policy.
//!
//! A [`FaultPolicy`] decides what a [`Codec`](crate::Codec) does when an
//! encode or decode faults: log it, notify observers, and/or hand it back to
//! the caller. A process-wide default can be installed once at start-up;
//! every `Codec::new()` takes a copy of it.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::Fault;

static DEFAULT_POLICY: OnceLock<FaultPolicy> = OnceLock::new();

/// Switches governing fault handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultPolicy {
    /// Emit a `tracing` warning for every fault.
    pub trace_on_fault: bool,
    /// Invoke the registered fault observers.
    pub raise_fault_event: bool,
    /// Return the fault to the caller. When unset the call reports success
    /// and the record keeps whatever was decoded before the fault.
    pub propagate_faults: bool,
}

impl Default for FaultPolicy {
    fn default() -> Self {
        Self {
            trace_on_fault: true,
            raise_fault_event: true,
            propagate_faults: true,
        }
    }
}

impl FaultPolicy {
    /// Swallow every fault without logging or notifying.
    pub const SILENT: Self = Self {
        trace_on_fault: false,
        raise_fault_event: false,
        propagate_faults: false,
    };

    /// Installs the process-wide default.
    ///
    /// Succeeds only once, and only before the default has been read by
    /// [`FaultPolicy::current`]. Otherwise the rejected policy is handed
    /// back.
    pub fn install(policy: FaultPolicy) -> Result<(), FaultPolicy> {
        DEFAULT_POLICY.set(policy)
    }

    /// The process-wide default. Reading it freezes it.
    pub fn current() -> FaultPolicy {
        *DEFAULT_POLICY.get_or_init(FaultPolicy::default)
    }
}

/// The codec entry point a fault surfaced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Write,
    WriteWithAutoLength,
    Read,
    Encode,
    Decode,
    SplitDatagram,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Write => "write",
            Operation::WriteWithAutoLength => "write_with_auto_length",
            Operation::Read => "read",
            Operation::Encode => "encode",
            Operation::Decode => "decode",
            Operation::SplitDatagram => "split_datagram",
        };
        f.write_str(name)
    }
}

/// Delivered to fault observers.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultEvent {
    /// Name of the record being processed.
    pub record: &'static str,
    pub operation: Operation,
    pub fault: Fault,
}

impl fmt::Display for FaultEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.record, self.operation, self.fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let policy = FaultPolicy::default();
        assert!(policy.trace_on_fault);
        assert!(policy.raise_fault_event);
        assert!(policy.propagate_faults);
    }

    #[test]
    fn install_after_read_is_rejected() {
        let current = FaultPolicy::current();
        assert_eq!(FaultPolicy::install(FaultPolicy::SILENT), Err(FaultPolicy::SILENT));
        assert_eq!(FaultPolicy::current(), current);
    }

    #[test]
    fn event_display() {
        let event = FaultEvent {
            record: "EntityStatePdu",
            operation: Operation::Read,
            fault: Fault::Underflow {
                needed: 4,
                remaining: 0,
                offset: 140,
            },
        };
        assert_eq!(
            event.to_string(),
            "EntityStatePdu read: underflow: needed 4 bytes at offset 140, 0 remaining"
        );
    }
}
