//! The leveled logger handle.
//!
//! A [`Log`] is bound to one name and one backend at construction and
//! never changes afterwards, so handles are freely shared across
//! threads. Every level exposes an enablement query, a plain logging
//! method, and an error-carrying variant; all of them funnel through a
//! single private emit path that formats the message, resolves the true
//! call site, and hands one record to the backend.
//!
//! Handles are minted by [`Registry`](crate::registry::Registry), never
//! constructed directly, so equal names always share one instance.

use crate::backend::Backend;
use crate::caller::{capture_frames, locate_caller};
use crate::level::Level;
use crate::record::Record;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// This type's own path as it appears in demangled stack frames. The
/// caller scan skips frames belonging to it.
const SELF: &str = concat!(module_path!(), "::Log");

/// A leveled logger bound to one named channel.
pub struct Log {
    name: String,
    backend: Arc<dyn Backend>,
}

impl Log {
    /// Binds a handle to a name and a backend.
    ///
    /// Crate-private so that only the registry can mint handles.
    pub(crate) fn new(name: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        Self {
            name: name.into(),
            backend,
        }
    }

    /// The channel name this handle is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Is this logger enabled for the trace level?
    pub fn is_trace_enabled(&self) -> bool {
        self.backend.enabled(&self.name, Level::Trace)
    }

    /// Is this logger enabled for the debug level?
    pub fn is_debug_enabled(&self) -> bool {
        self.backend.enabled(&self.name, Level::Debug)
    }

    /// Is this logger enabled for the info level?
    pub fn is_info_enabled(&self) -> bool {
        self.backend.enabled(&self.name, Level::Info)
    }

    /// Is this logger enabled for the warn level?
    pub fn is_warn_enabled(&self) -> bool {
        self.backend.enabled(&self.name, Level::Warn)
    }

    /// Is this logger enabled for the error level?
    pub fn is_error_enabled(&self) -> bool {
        self.backend.enabled(&self.name, Level::Error)
    }

    /// Log a message at the trace level.
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, None, args);
    }

    /// Log an error at the trace level with an accompanying message.
    pub fn trace_err(&self, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        self.log(Level::Trace, Some(error), args);
    }

    /// Log a message at the debug level.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, None, args);
    }

    /// Log an error at the debug level with an accompanying message.
    pub fn debug_err(&self, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        self.log(Level::Debug, Some(error), args);
    }

    /// Log a message at the info level.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, None, args);
    }

    /// Log an error at the info level with an accompanying message.
    pub fn info_err(&self, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        self.log(Level::Info, Some(error), args);
    }

    /// Log a message at the warn level.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, None, args);
    }

    /// Log an error at the warn level with an accompanying message.
    pub fn warn_err(&self, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        self.log(Level::Warn, Some(error), args);
    }

    /// Log a message at the error level.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, None, args);
    }

    /// Log an error at the error level with an accompanying message.
    pub fn error_err(&self, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        self.log(Level::Error, Some(error), args);
    }

    /// The shared emit path.
    ///
    /// Disabled levels return before any string construction or stack
    /// walking. Enabled levels format eagerly, resolve the caller, and
    /// hand exactly one record to the backend.
    ///
    /// Kept out of line so captured stacks always contain at least one
    /// frame belonging to this type for the caller scan to anchor on.
    #[inline(never)]
    fn log(&self, level: Level, error: Option<&(dyn Error + 'static)>, args: fmt::Arguments<'_>) {
        if !self.backend.enabled(&self.name, level) {
            return;
        }
        let message = fmt::format(args);
        let frames = capture_frames();
        let caller = locate_caller(&frames, SELF);
        let record = Record {
            level,
            message,
            error,
            caller,
        };
        self.backend.emit(&self.name, &record);
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log").field("name", &self.name).finish()
    }
}

/// Log at trace level through a [`Log`] handle.
///
/// The `err:` arm attaches an error value to the record:
/// `log_trace!(log, err: e, "retrying {}", attempt)`.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, err: $err:expr, $($arg:tt)+) => {
        $logger.trace_err(&$err, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(format_args!($($arg)+))
    };
}

/// Log at debug level through a [`Log`] handle.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, err: $err:expr, $($arg:tt)+) => {
        $logger.debug_err(&$err, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log at info level through a [`Log`] handle.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, err: $err:expr, $($arg:tt)+) => {
        $logger.info_err(&$err, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log at warn level through a [`Log`] handle.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, err: $err:expr, $($arg:tt)+) => {
        $logger.warn_err(&$err, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log at error level through a [`Log`] handle.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, err: $err:expr, $($arg:tt)+) => {
        $logger.error_err(&$err, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}
