//! Format-string tokenization.

use std::io;

use crate::constants::TAGS_INITIAL_CAPACITY;
use crate::error::TraceError;
use crate::types::ConversionTag;

mod format_parser;

/// A tokenized scanf-style format string.
///
/// Holds one [`ConversionTag`] per `%`-introduced conversion, in
/// left-to-right occurrence order. Literal text (including `%%` escapes)
/// contributes nothing to the sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct FormatSpec {
    conversions: Vec<ConversionTag>,
}

impl FormatSpec {
    /// Tokenize `input`, resolving each conversion by greedy longest-prefix
    /// match against the vocabulary.
    ///
    /// An unknown specifier (no vocabulary prefix even at length 1, e.g.
    /// `%Q`) fails the whole call with
    /// [`TraceError::UnsupportedConversion`] rather than being dropped,
    /// which would silently misalign the positional matching downstream.
    pub fn parse(input: &str) -> Result<Self, TraceError> {
        let (_, segments) = format_parser::segments(input).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid format string: {e}"),
            )
        })?;

        let mut conversions = Vec::with_capacity(TAGS_INITIAL_CAPACITY);
        let mut iter = segments.into_iter();
        while let Some(segment) = iter.next() {
            if segment.is_empty() {
                // A "%%" escape splits into an empty segment followed by
                // literal text; consume both.
                iter.next();
                continue;
            }
            conversions.push(format_parser::resolve_conversion(segment)?);
        }

        Ok(Self { conversions })
    }

    /// The conversion tags, in occurrence order.
    pub fn conversions(&self) -> &[ConversionTag] {
        &self.conversions
    }

    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }
}
