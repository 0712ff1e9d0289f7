//! Core types for the trace pipeline.
//!
//! This module defines the conversion-tag vocabulary and the tagged value
//! union that travels from the instrumented call site to the record writer.

use std::fmt;

/// A scanf conversion specifier recognized by the tokenizer.
///
/// The vocabulary is closed: every variant corresponds to one canonical
/// 1–3 character specifier and nothing can be added at runtime. Only a
/// subset of the vocabulary has a rendering rule (see
/// [`ConversionTag::has_render_rule`]); the rest is recognized so that the
/// tokenizer can disambiguate prefixes correctly (`%l` vs `%ld` vs `%lld`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionTag {
    /// `%c`, a single character.
    Char,
    /// `%d`, signed 32-bit integer.
    Decimal,
    /// `%e`, scientific-notation float.
    Scientific,
    /// `%E`, scientific-notation float, uppercase exponent.
    ScientificUpper,
    /// `%f`, single-precision float.
    Float,
    /// `%g`, shortest-form float.
    General,
    /// `%i`, signed integer with auto-detected base.
    Integer,
    /// `%l`, bare length modifier read as a conversion by legacy code.
    Long,
    /// `%o`, octal integer.
    Octal,
    /// `%p`, pointer.
    Pointer,
    /// `%s`, whitespace-delimited string.
    Str,
    /// `%u`, unsigned 32-bit integer.
    Unsigned,
    /// `%x`, hexadecimal integer.
    Hex,
    /// `%n`, consumed-character count.
    Count,
    /// `%hi`, signed 16-bit integer.
    ShortInteger,
    /// `%hu`, unsigned 16-bit integer.
    ShortUnsigned,
    /// `%hd`, signed 16-bit integer.
    Short,
    /// `%ld`, signed 64-bit integer.
    LongDecimal,
    /// `%li`, signed 64-bit integer, auto-detected base.
    LongInteger,
    /// `%lf`, double-precision float.
    Double,
    /// `%lu`, unsigned 64-bit integer.
    LongUnsigned,
    /// `%Lf`, long double (rendered at double precision).
    LongDouble,
    /// `%lli`, signed 64-bit integer, auto-detected base.
    LongLongInteger,
    /// `%lld`, signed 64-bit integer.
    LongLong,
    /// `%llu`, unsigned 64-bit integer.
    LongLongUnsigned,
}

/// Every vocabulary entry, in canonical-text order.
pub const VOCABULARY: &[ConversionTag] = &[
    ConversionTag::Char,
    ConversionTag::Decimal,
    ConversionTag::Scientific,
    ConversionTag::ScientificUpper,
    ConversionTag::Float,
    ConversionTag::General,
    ConversionTag::Integer,
    ConversionTag::Long,
    ConversionTag::Octal,
    ConversionTag::Pointer,
    ConversionTag::Str,
    ConversionTag::Unsigned,
    ConversionTag::Hex,
    ConversionTag::Count,
    ConversionTag::ShortInteger,
    ConversionTag::ShortUnsigned,
    ConversionTag::Short,
    ConversionTag::LongDecimal,
    ConversionTag::LongInteger,
    ConversionTag::Double,
    ConversionTag::LongUnsigned,
    ConversionTag::LongDouble,
    ConversionTag::LongLongInteger,
    ConversionTag::LongLong,
    ConversionTag::LongLongUnsigned,
];

impl ConversionTag {
    /// Canonical specifier text, without the leading `%`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Char => "c",
            Self::Decimal => "d",
            Self::Scientific => "e",
            Self::ScientificUpper => "E",
            Self::Float => "f",
            Self::General => "g",
            Self::Integer => "i",
            Self::Long => "l",
            Self::Octal => "o",
            Self::Pointer => "p",
            Self::Str => "s",
            Self::Unsigned => "u",
            Self::Hex => "x",
            Self::Count => "n",
            Self::ShortInteger => "hi",
            Self::ShortUnsigned => "hu",
            Self::Short => "hd",
            Self::LongDecimal => "ld",
            Self::LongInteger => "li",
            Self::Double => "lf",
            Self::LongUnsigned => "lu",
            Self::LongDouble => "Lf",
            Self::LongLongInteger => "lli",
            Self::LongLong => "lld",
            Self::LongLongUnsigned => "llu",
        }
    }

    /// Exact vocabulary lookup. Returns `None` for text that is not a
    /// canonical specifier, including prefixes of longer specifiers that
    /// are not themselves in the vocabulary (`"ll"`, `"h"`).
    pub fn from_spec(text: &str) -> Option<Self> {
        let tag = match text {
            "c" => Self::Char,
            "d" => Self::Decimal,
            "e" => Self::Scientific,
            "E" => Self::ScientificUpper,
            "f" => Self::Float,
            "g" => Self::General,
            "i" => Self::Integer,
            "l" => Self::Long,
            "o" => Self::Octal,
            "p" => Self::Pointer,
            "s" => Self::Str,
            "u" => Self::Unsigned,
            "x" => Self::Hex,
            "n" => Self::Count,
            "hi" => Self::ShortInteger,
            "hu" => Self::ShortUnsigned,
            "hd" => Self::Short,
            "ld" => Self::LongDecimal,
            "li" => Self::LongInteger,
            "lf" => Self::Double,
            "lu" => Self::LongUnsigned,
            "Lf" => Self::LongDouble,
            "lli" => Self::LongLongInteger,
            "lld" => Self::LongLong,
            "llu" => Self::LongLongUnsigned,
            _ => return None,
        };
        Some(tag)
    }

    /// Whether the record writer has a rule for this tag.
    ///
    /// The set matches the conversions that actually occur in instrumented
    /// corpora: `c`, `s`, `u`, `lu`, `d`, `ld`, `lld`, `hd`, `f`, `lf`,
    /// `Lf`. Everything else is rejected at render time rather than
    /// reinterpreted as an integer.
    pub fn has_render_rule(self) -> bool {
        matches!(
            self,
            Self::Char
                | Self::Str
                | Self::Unsigned
                | Self::LongUnsigned
                | Self::Decimal
                | Self::LongDecimal
                | Self::LongLong
                | Self::Short
                | Self::Float
                | Self::Double
                | Self::LongDouble
        )
    }
}

impl fmt::Display for ConversionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value captured by an instrumented read, tagged with its real type.
///
/// The call site knows the concrete type of each argument it read into, so
/// it builds one of these instead of handing over an untyped pointer plus a
/// separately derived tag. The core only borrows the value for the duration
/// of the rendering call; `Text` keeps the caller's string as a slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Char(char),
    Text(&'a str),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::UInt32(v) => write!(f, "{v}"),
            Self::UInt64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }

            impl From<&$ty> for Value<'_> {
                fn from(v: &$ty) -> Self {
                    Self::$variant(*v)
                }
            }
        )*
    };
}

impl_value_from! {
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    char => Char,
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Self::Text(v)
    }
}

impl<'a> From<&'a &str> for Value<'a> {
    fn from(v: &'a &str) -> Self {
        Self::Text(v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Self::Text(v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_text_round_trips() {
        for &tag in VOCABULARY {
            assert_eq!(ConversionTag::from_spec(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_non_vocabulary_text_rejected() {
        assert_eq!(ConversionTag::from_spec(""), None);
        assert_eq!(ConversionTag::from_spec("Q"), None);
        assert_eq!(ConversionTag::from_spec("ll"), None);
        assert_eq!(ConversionTag::from_spec("h"), None);
        assert_eq!(ConversionTag::from_spec("lld "), None);
    }

    #[test]
    fn test_render_rule_set() {
        let renderable: Vec<&str> = VOCABULARY
            .iter()
            .filter(|tag| tag.has_render_rule())
            .map(|tag| tag.as_str())
            .collect();
        assert_eq!(
            renderable,
            ["c", "d", "f", "s", "u", "hd", "ld", "lf", "lu", "Lf", "lld"]
        );
    }

    #[test]
    fn test_value_display_natural_forms() {
        assert_eq!(Value::Int32(-7).to_string(), "-7");
        assert_eq!(Value::UInt64(18_446_744_073_709_551_615).to_string(), "18446744073709551615");
        assert_eq!(Value::Float32(2.5).to_string(), "2.5");
        assert_eq!(Value::Char('x').to_string(), "x");
        assert_eq!(Value::Text("hi there").to_string(), "hi there");
    }

    #[test]
    fn test_value_from_references() {
        let n = 42i32;
        let s = String::from("buf");
        assert_eq!(Value::from(&n), Value::Int32(42));
        assert_eq!(Value::from(&s), Value::Text("buf"));
        assert_eq!(Value::from("lit"), Value::Text("lit"));
    }
}
