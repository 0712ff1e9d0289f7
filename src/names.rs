//! Variable-name-list splitting.

use crate::constants::NAMES_INITIAL_CAPACITY;

/// Split a comma-separated name list into trimmed name slices.
///
/// Entries are separated by `,` and carry at most one leading space (the
/// list is typically the stringified argument text of the instrumented
/// call, `"a, b, c"`). Exactly one leading space is stripped per entry;
/// internal and trailing whitespace is preserved. No identifier validation
/// is performed.
///
/// Splitting the empty string yields a single empty entry, mirroring
/// split-on-delimiter semantics:
///
/// ```
/// assert_eq!(scantap::split_names(""), [""]);
/// ```
pub fn split_names(list: &str) -> Vec<&str> {
    let mut names = Vec::with_capacity(NAMES_INITIAL_CAPACITY);
    for entry in list.split(',') {
        names.push(entry.strip_prefix(' ').unwrap_or(entry));
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringified_argument_list() {
        assert_eq!(split_names("a, b,c"), ["a", "b", "c"]);
        assert_eq!(split_names("count"), ["count"]);
    }

    #[test]
    fn test_only_one_leading_space_stripped() {
        assert_eq!(split_names("  a,b"), [" a", "b"]);
    }

    #[test]
    fn test_internal_and_trailing_whitespace_preserved() {
        assert_eq!(split_names("x , y"), ["x ", "y"]);
        assert_eq!(split_names("arr [0], arr [1]"), ["arr [0]", "arr [1]"]);
    }

    #[test]
    fn test_degenerate_entries_pass_through() {
        assert_eq!(split_names(""), [""]);
        assert_eq!(split_names(" "), [""]);
        assert_eq!(split_names("a,,b"), ["a", "", "b"]);
    }
}
