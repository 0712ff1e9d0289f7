use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::char,
    error::Error,
    multi::many0,
    sequence::preceded,
};

use crate::constants::CONVERSION_MAX_LEN;
use crate::error::TraceError;
use crate::types::ConversionTag;

/// Split a format string into the segments that follow each `%`.
///
/// The literal text before the first `%` is consumed and discarded; each
/// returned segment is the raw text between one `%` and the next (or the
/// end of input). `"%d %f"` yields `["d ", "f"]`, `"a%%b"` yields
/// `["", "b"]`.
pub(super) fn segments(input: &str) -> IResult<&str, Vec<&str>> {
    let (rest, _literal) = take_till::<_, _, Error<&str>>(|c| c == '%').parse(input)?;
    many0(preceded(char('%'), take_till(|c: char| c == '%'))).parse(rest)
}

/// Resolve one post-`%` segment to a conversion tag.
///
/// Takes at most the first [`CONVERSION_MAX_LEN`] characters as candidate
/// text and picks the longest prefix that is in the vocabulary. Specifiers
/// are not self-delimiting (`l`, `ld`, and `lld` all begin with `l`), so
/// only greedy longest-match recovers the intended conversion width.
pub(super) fn resolve_conversion(segment: &str) -> Result<ConversionTag, TraceError> {
    let candidate = truncate_chars(segment, CONVERSION_MAX_LEN);

    let mut boundaries: Vec<usize> = candidate
        .char_indices()
        .map(|(offset, ch)| offset + ch.len_utf8())
        .collect();
    boundaries.reverse();

    for end in boundaries {
        if let Some(tag) = ConversionTag::from_spec(&candidate[..end]) {
            return Ok(tag);
        }
    }

    Err(TraceError::UnsupportedConversion {
        spec: candidate.into(),
    })
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(input: &str) -> Vec<&str> {
        let (rest, segments) = segments(input).unwrap();
        assert!(rest.is_empty());
        segments
    }

    #[test]
    fn test_leading_literal_discarded() {
        assert_eq!(split("value: %d"), vec!["d"]);
        assert_eq!(split("no conversions here"), Vec::<&str>::new());
        assert_eq!(split(""), Vec::<&str>::new());
    }

    #[test]
    fn test_segments_between_conversions() {
        assert_eq!(split("%d %f"), vec!["d ", "f"]);
        assert_eq!(split("%s%c"), vec!["s", "c"]);
        assert_eq!(split("a%%b"), vec!["", "b"]);
        assert_eq!(split("tail%"), vec![""]);
    }

    #[test]
    fn test_longest_prefix_wins() {
        assert_eq!(resolve_conversion("lld").unwrap(), ConversionTag::LongLong);
        assert_eq!(resolve_conversion("lldx").unwrap(), ConversionTag::LongLong);
        assert_eq!(resolve_conversion("ld").unwrap(), ConversionTag::LongDecimal);
        assert_eq!(resolve_conversion("l").unwrap(), ConversionTag::Long);
        // "ll" is not in the vocabulary, so "llx" falls back to "l".
        assert_eq!(resolve_conversion("llx").unwrap(), ConversionTag::Long);
    }

    #[test]
    fn test_trailing_literal_ignored_by_match() {
        assert_eq!(resolve_conversion("d years").unwrap(), ConversionTag::Decimal);
        assert_eq!(resolve_conversion("f\n").unwrap(), ConversionTag::Float);
    }

    #[test]
    fn test_unknown_specifier_is_an_error() {
        let err = resolve_conversion("Q").unwrap_err();
        match err {
            TraceError::UnsupportedConversion { spec } => assert_eq!(&*spec, "Q"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_candidate_truncated_to_three_chars() {
        let err = resolve_conversion("wxyz").unwrap_err();
        match err {
            TraceError::UnsupportedConversion { spec } => assert_eq!(&*spec, "wxy"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
