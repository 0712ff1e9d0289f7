use std::io;

use thiserror::Error;

/// Errors raised by the trace pipeline.
///
/// None of these affect the read the collaborator already performed; a
/// failed trace call leaves the program's primary I/O untouched.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The tokenized format string, the split name list, and the supplied
    /// values disagree on how many records to emit. The call is aborted
    /// before any record is written, since positional matching would be
    /// misaligned.
    #[error(
        "count mismatch: {tags} conversion(s), {names} name(s), {values} value(s) supplied"
    )]
    TokenCountMismatch {
        names: usize,
        tags: usize,
        values: usize,
    },

    /// A `%`-introduced segment matched no vocabulary entry, or a
    /// recognized tag has no rendering rule. Carries the offending
    /// specifier text. Records already written for earlier values stand.
    #[error("unsupported conversion specifier '%{spec}'")]
    UnsupportedConversion { spec: Box<str> },

    /// The diagnostic sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
