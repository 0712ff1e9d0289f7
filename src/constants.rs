//! Limits and capacity constants for the trace pipeline.

/// Maximum length of a conversion specifier in characters.
///
/// The vocabulary tops out at three characters (`lld`, `llu`); longer
/// candidate text after a `%` is truncated before prefix matching.
pub const CONVERSION_MAX_LEN: usize = 3;

/// Initial capacity hint for the conversion-tag sequence.
///
/// Most instrumented reads have 1-4 conversions, so this avoids initial
/// reallocations.
pub const TAGS_INITIAL_CAPACITY: usize = 4;

/// Initial capacity hint for the split name list.
///
/// Sized to match `TAGS_INITIAL_CAPACITY`: one name per conversion.
pub const NAMES_INITIAL_CAPACITY: usize = 4;
