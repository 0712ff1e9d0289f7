//! Trace instrumentation for formatted-input reads.
//!
//! After a program performs a scanf-style read, this crate re-tokenizes the
//! format string, splits the stringified argument-name list, and emits one
//! `name,type,value` record per value on a diagnostic channel (stderr by
//! default). The program's primary input and output are never touched:
//! tracing is best-effort observability layered on top of the real read.
//!
//! # Architecture
//!
//! Two leaf algorithms feed one dispatcher:
//! 1. **Format tokenization** ([`FormatSpec`]): the format string is split
//!    on `%` and each conversion is resolved by greedy longest-prefix match
//!    against a closed vocabulary (`%l` vs `%ld` vs `%lld`).
//! 2. **Name splitting** ([`split_names`]): the comma-separated name list
//!    is split into trimmed entries, order preserved.
//! 3. **Record emission** ([`Record`]): for each position `i`, the triple
//!    `(name[i], tag[i], value[i])` becomes one `name,tag,value\n` line.
//!
//! The three sequences must agree on length; a mismatch aborts the trace
//! call before anything is written, since rendering misaligned triples
//! would be worse than rendering nothing.
//!
//! # Type safety
//!
//! The call site knows the concrete type of every argument it read into, so
//! values arrive as a tagged union ([`Value`]) rather than as untyped
//! pointers reinterpreted through the format string. A conversion the
//! writer has no rule for is a reported [`TraceError::UnsupportedConversion`],
//! never a fallback integer rendering.
//!
//! # Macros
//!
//! [`trace_read!`] and [`trace_line!`] capture the argument expression text
//! at the call site, so instrumenting an existing read is one extra line:
//!
//! ```no_run
//! use scantap::{trace_line, trace_read};
//!
//! let mut line = String::new();
//! std::io::stdin().read_line(&mut line).unwrap();
//! let count: i32 = line.trim().parse().unwrap();
//!
//! trace_read!("%d", count).unwrap();
//! trace_line!(line).unwrap();
//! ```

#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use std::io::{self, Write};

mod constants;
mod error;
mod format;
mod names;
mod record;
mod types;

pub use error::TraceError;
pub use format::FormatSpec;
pub use names::split_names;
pub use record::Record;
pub use types::{ConversionTag, VOCABULARY, Value};

pub use scantap_proc_macro::{trace_line, trace_read};

/// Trace one formatted read into `sink`.
///
/// Tokenizes `format`, splits `names`, and emits one record per value in
/// positional order. The three sequences must have equal length; on
/// [`TraceError::TokenCountMismatch`] nothing is written. A tag without a
/// rendering rule fails that value's record without retracting records
/// already written for earlier values.
///
/// ```
/// use scantap::{Value, trace_formatted};
///
/// let mut sink = Vec::new();
/// trace_formatted(
///     " %c,%s",
///     "c, d",
///     &[Value::Char('x'), Value::Text("hi")],
///     &mut sink,
/// )
/// .unwrap();
/// assert_eq!(sink, b"c,c,x\nd,s,hi\n");
/// ```
pub fn trace_formatted<W: Write>(
    format: &str,
    names: &str,
    values: &[Value<'_>],
    sink: &mut W,
) -> Result<(), TraceError> {
    let spec = FormatSpec::parse(format)?;
    let names = split_names(names);

    if spec.len() != values.len() || names.len() != values.len() {
        return Err(TraceError::TokenCountMismatch {
            names: names.len(),
            tags: spec.len(),
            values: values.len(),
        });
    }

    for ((&name, &tag), &value) in names.iter().zip(spec.conversions()).zip(values) {
        Record { name, tag, value }.write_to(sink)?;
    }
    Ok(())
}

/// [`trace_formatted`] with the process diagnostic channel (stderr) as the
/// sink.
pub fn trace_values(format: &str, names: &str, values: &[Value<'_>]) -> Result<(), TraceError> {
    trace_formatted(format, names, values, &mut io::stderr().lock())
}

/// Trace a plain string read (no format string involved).
///
/// Emits a single record under the fixed `s` tag, bypassing the tokenizer.
/// This is the path for line reads and stream extraction into a string
/// buffer.
pub fn trace_string(name: &str, value: &str) -> Result<(), TraceError> {
    write_string_record(name, value, &mut io::stderr().lock())
}

/// [`trace_string`] into an explicit sink.
pub fn write_string_record<W: Write>(
    name: &str,
    value: &str,
    sink: &mut W,
) -> Result<(), TraceError> {
    Record {
        name,
        tag: ConversionTag::Str,
        value: Value::Text(value),
    }
    .write_to(sink)
}
