//! Centralized naming conventions for ggbuild-generated identifiers.
//!
//! Every aesthetic mapping bound against a data source is backed by a
//! generated column in the output `data` object. Columns are named
//! `list<n>`, where `n` is the zero-based registration order of the
//! extractor within its data-binding registry. The name strings are part
//! of the output contract with the downstream rendering pipeline and must
//! be reproduced verbatim.

/// Prefix shared by every generated column name
pub const COLUMN_PREFIX: &str = "list";

/// Generate the column name for the n-th registered extractor.
///
/// # Example
/// ```
/// use ggbuild::naming;
/// assert_eq!(naming::column_name(0), "list0");
/// assert_eq!(naming::column_name(12), "list12");
/// ```
pub fn column_name(index: usize) -> String {
    format!("{}{}", COLUMN_PREFIX, index)
}

/// Check if a column name was generated by ggbuild.
///
/// # Example
/// ```
/// use ggbuild::naming;
/// assert!(naming::is_generated_column("list0"));
/// assert!(!naming::is_generated_column("revenue"));
/// assert!(!naming::is_generated_column("list"));
/// ```
pub fn is_generated_column(name: &str) -> bool {
    column_index(name).is_some()
}

/// Extract the registration index from a generated column name.
///
/// Returns `None` for names that do not follow the `list<n>` convention.
///
/// # Example
/// ```
/// use ggbuild::naming;
/// assert_eq!(naming::column_index("list3"), Some(3));
/// assert_eq!(naming::column_index("list"), None);
/// assert_eq!(naming::column_index("revenue"), None);
/// ```
pub fn column_index(name: &str) -> Option<usize> {
    name.strip_prefix(COLUMN_PREFIX)
        .filter(|rest| !rest.is_empty())
        .and_then(|rest| rest.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(0), "list0");
        assert_eq!(column_name(1), "list1");
        assert_eq!(column_name(42), "list42");
    }

    #[test]
    fn test_is_generated_column() {
        assert!(is_generated_column("list0"));
        assert!(is_generated_column("list10"));
        assert!(!is_generated_column("list"));
        assert!(!is_generated_column("listed"));
        assert!(!is_generated_column("x"));
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("list0"), Some(0));
        assert_eq!(column_index("list7"), Some(7));
        assert_eq!(column_index("list007"), Some(7));
        assert_eq!(column_index("list"), None);
        assert_eq!(column_index("listx"), None);
        assert_eq!(column_index("mapping"), None);
    }

    #[test]
    fn test_round_trip() {
        for index in [0usize, 1, 9, 10, 99] {
            assert_eq!(column_index(&column_name(index)), Some(index));
        }
    }
}
