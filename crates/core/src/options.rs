//! Distinct-value aggregation for filter option lists.
//!
//! Each filterable attribute of the dataset becomes a deduplicated list of
//! stringified values, sorted lexicographically. A `BTreeSet<String>` gives
//! both properties in one pass.

use std::collections::BTreeSet;
use std::fmt::Display;

/// Collect distinct string values, sorted lexicographically.
pub fn distinct_sorted<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Collect distinct stringified values from a nullable column, sorted
/// lexicographically. `None`s are excluded, never stringified.
pub fn distinct_sorted_optional<I, T>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    values
        .into_iter()
        .flatten()
        .map(|v| v.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_and_sorts_strings() {
        let values = ["Seat", "Audi", "Seat", "BMW", "Audi"];
        assert_eq!(distinct_sorted(values), vec!["Audi", "BMW", "Seat"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let no_strings: [&str; 0] = [];
        let no_numbers: [Option<i32>; 0] = [];
        assert_eq!(distinct_sorted(no_strings), Vec::<String>::new());
        assert_eq!(distinct_sorted_optional(no_numbers), Vec::<String>::new());
    }

    #[test]
    fn excludes_nulls_and_stringifies_the_rest() {
        let values = [Some(2018), None, Some(2016), Some(2018), None];
        assert_eq!(distinct_sorted_optional(values), vec!["2016", "2018"]);
    }

    #[test]
    fn sort_is_lexicographic_on_the_stringified_value() {
        // "10" < "9" lexicographically; option lists are rendered as text.
        let values = [Some(9), Some(10), Some(100)];
        assert_eq!(distinct_sorted_optional(values), vec!["10", "100", "9"]);
    }
}
