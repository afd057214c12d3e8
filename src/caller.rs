//! Caller-frame resolution.
//!
//! Log records should report the call site that invoked the facade, not
//! the facade's own methods. This module captures the current call stack
//! as a sequence of frame descriptors and scans it outward: skip
//! everything up to and including the facade's own frames, then take the
//! first frame belonging to someone else.
//!
//! The scan ([`locate_caller`]) is a pure function over frame slices so
//! it can be driven with synthetic stacks. [`capture_frames`] is the
//! production capture built on stack unwinding; on builds without symbol
//! information it yields nothing and attribution is simply omitted.

use backtrace::{resolve_frame, trace};

/// Frames captured per call. Deep stacks past this point cannot contain
/// the caller, which sits directly above the facade frames.
const MAX_FRAMES: usize = 128;

/// One call-stack frame descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Path of the enclosing type or module, e.g. `app::worker::Worker`.
    pub type_name: String,
    /// Name of the function or method, e.g. `run`.
    pub method_name: String,
}

/// Resolved source attribution for a log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Path of the calling type or module.
    pub type_name: String,
    /// Name of the calling function or method.
    pub method_name: String,
}

impl Frame {
    /// Parses a demangled symbol name into a frame descriptor.
    ///
    /// Symbols carry a trailing `::h<16 hex digits>` disambiguator which
    /// is stripped. Qualified forms such as `<Type as Trait>::method`
    /// are flattened to `Type::method` before splitting. The final path
    /// segment becomes the method name, everything before it the
    /// enclosing type path.
    ///
    /// Returns `None` for symbols with no path separator (foreign
    /// frames like `__libc_start_main`), which carry no type identity
    /// worth attributing.
    pub fn from_symbol(symbol: &str) -> Option<Frame> {
        let name = strip_hash_suffix(symbol.trim());
        let path = flatten_qualified(name)?;
        let split = path.rfind("::")?;
        let type_name = &path[..split];
        let method_name = &path[split + 2..];
        if type_name.is_empty() || method_name.is_empty() {
            return None;
        }
        Some(Frame {
            type_name: type_name.to_string(),
            method_name: method_name.to_string(),
        })
    }
}

/// Scans a captured stack for the true caller of the facade.
///
/// `frames` is ordered innermost-first. The scan finds the first frame
/// whose type is `facade` (the facade method currently executing), keeps
/// skipping while frames still belong to the facade (the public entry
/// points funnel through a shared private method, so several contiguous
/// facade frames are expected), and returns the next frame outside it.
///
/// Returns `None` when the facade frame cannot be located (truncated or
/// inlined-away stack) or when no frame outside the facade follows it.
/// Both cases mean attribution is skipped, not that the record is lost.
pub fn locate_caller(frames: &[Frame], facade: &str) -> Option<Caller> {
    let self_index = frames.iter().position(|f| f.type_name == facade)?;
    frames[self_index..]
        .iter()
        .find(|f| f.type_name != facade)
        .map(|f| Caller {
            type_name: f.type_name.clone(),
            method_name: f.method_name.clone(),
        })
}

/// Captures the current call stack as frame descriptors, innermost-first.
///
/// Frames whose symbols cannot be resolved or parsed are dropped; the
/// scan in [`locate_caller`] tolerates the gaps. The capture is bounded
/// by [`MAX_FRAMES`].
pub fn capture_frames() -> Vec<Frame> {
    let mut frames = Vec::with_capacity(32);
    trace(|frame| {
        resolve_frame(frame, |symbol| {
            if let Some(name) = symbol.name() {
                if let Some(parsed) = Frame::from_symbol(&name.to_string()) {
                    frames.push(parsed);
                }
            }
        });
        frames.len() < MAX_FRAMES
    });
    frames
}

/// Strips the trailing `::h<hex>` symbol disambiguator, if present.
fn strip_hash_suffix(name: &str) -> &str {
    if let Some(pos) = name.rfind("::h") {
        let hash = &name[pos + 3..];
        if hash.len() == 16 && hash.bytes().all(|b| b.is_ascii_hexdigit()) {
            return &name[..pos];
        }
    }
    name
}

/// Flattens `<Type as Trait>::method` and `<Type>::method` forms into a
/// plain `Type::method` path. Plain paths pass through unchanged.
fn flatten_qualified(name: &str) -> Option<String> {
    let rest = match name.strip_prefix('<') {
        None => return Some(name.to_string()),
        Some(rest) => rest,
    };
    let close = matching_angle(rest)?;
    let inner = &rest[..close];
    let base = match inner.find(" as ") {
        Some(pos) => &inner[..pos],
        None => inner,
    };
    let tail = rest[close + 1..].strip_prefix("::")?;
    Some(format!("{base}::{tail}"))
}

/// Index of the `>` closing the already-opened angle bracket, counting
/// nested brackets from generic arguments.
fn matching_angle(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
