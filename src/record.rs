//! Record rendering and emission.

use std::io::Write;

use crate::error::TraceError;
use crate::types::{ConversionTag, Value};

/// One trace record: a variable name, the conversion tag the read used for
/// it, and the value it received.
///
/// Records are ephemeral; they are written to the diagnostic sink as
/// `name,tag,value\n` and not retained. Writing holds no state, so writing
/// the same record twice produces two identical lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    pub name: &'a str,
    pub tag: ConversionTag,
    pub value: Value<'a>,
}

impl Record<'_> {
    /// Write this record to `sink`.
    ///
    /// Tags outside the rendering set fail with
    /// [`TraceError::UnsupportedConversion`]; a value is never silently
    /// reinterpreted under a tag the writer has no rule for. The value is
    /// rendered as the type the caller tagged it with; cross-checking the
    /// tag against the value variant is the caller's contract.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<(), TraceError> {
        if !self.tag.has_render_rule() {
            return Err(TraceError::UnsupportedConversion {
                spec: self.tag.as_str().into(),
            });
        }
        writeln!(sink, "{},{},{}", self.name, self.tag, self.value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_shape() {
        let record = Record {
            name: "n",
            tag: ConversionTag::Decimal,
            value: Value::Int32(42),
        };
        let mut sink = Vec::new();
        record.write_to(&mut sink).unwrap();
        assert_eq!(sink, b"n,d,42\n");
    }

    #[test]
    fn test_writing_twice_is_idempotent() {
        let record = Record {
            name: "weight",
            tag: ConversionTag::Double,
            value: Value::Float64(35.5),
        };
        let mut sink = Vec::new();
        record.write_to(&mut sink).unwrap();
        record.write_to(&mut sink).unwrap();
        assert_eq!(sink, b"weight,lf,35.5\nweight,lf,35.5\n");
    }

    #[test]
    fn test_tag_without_render_rule_rejected() {
        let record = Record {
            name: "ptr",
            tag: ConversionTag::Pointer,
            value: Value::UInt64(0),
        };
        let mut sink = Vec::new();
        let err = record.write_to(&mut sink).unwrap_err();
        assert!(matches!(
            err,
            TraceError::UnsupportedConversion { ref spec } if &**spec == "p"
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_empty_name_passes_through() {
        let record = Record {
            name: "",
            tag: ConversionTag::Str,
            value: Value::Text("hi"),
        };
        let mut sink = Vec::new();
        record.write_to(&mut sink).unwrap();
        assert_eq!(sink, b",s,hi\n");
    }
}
