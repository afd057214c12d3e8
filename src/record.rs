//! The record handed to a backend per enabled logging call.

use crate::caller::Caller;
use crate::level::Level;
use std::error::Error;

/// A single log record.
///
/// Records are ephemeral: the facade builds one per enabled call, hands
/// it to the backend by reference, and drops it. The message is already
/// formatted; routing and output formatting belong to the backend.
#[derive(Debug)]
pub struct Record<'a> {
    /// Severity of this record.
    pub level: Level,
    /// The formatted message.
    pub message: String,
    /// Error attached by the error-carrying logging methods.
    pub error: Option<&'a (dyn Error + 'static)>,
    /// Resolved call site, when caller attribution succeeded.
    pub caller: Option<Caller>,
}
