use std::ffi::OsString;

/// Keep the entries that contain `query` as a contiguous, case-sensitive substring.
///
/// Order follows `entries`; an empty query keeps everything. Names that are not
/// valid UTF-8 are matched on their lossy rendering, as displayed.
pub fn filter_entries(entries: &[OsString], query: &str) -> Vec<OsString> {
    entries
        .iter()
        .filter(|name| name.to_string_lossy().contains(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(items: &[&str]) -> Vec<OsString> {
        items.iter().map(|s| OsString::from(*s)).collect()
    }

    #[test]
    fn substring_match_keeps_order() {
        let full = names(&["a.txt", "b", "bb"]);
        assert_eq!(filter_entries(&full, "b"), names(&["b", "bb"]));
    }

    #[test]
    fn empty_query_keeps_everything() {
        let full = names(&["z", "a", "m"]);
        assert_eq!(filter_entries(&full, ""), full);
    }

    #[test]
    fn match_is_case_sensitive() {
        let full = names(&["README.md", "readme.txt"]);
        assert_eq!(filter_entries(&full, "READ"), names(&["README.md"]));
    }

    #[test]
    fn glob_characters_are_literal() {
        let full = names(&["a*b", "axb", "a.b"]);
        assert_eq!(filter_entries(&full, "*"), names(&["a*b"]));
        assert_eq!(filter_entries(&full, "."), names(&["a.b"]));
    }

    #[test]
    fn non_utf8_names_match_their_readable_part() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"d\xffir".to_vec());
        let full = vec![raw.clone(), OsString::from("docs")];
        assert_eq!(filter_entries(&full, "ir"), vec![raw.clone()]);
        assert_eq!(filter_entries(&full, "d"), full);
    }

    #[test]
    fn no_match_is_empty() {
        let full = names(&["alpha", "beta"]);
        assert!(filter_entries(&full, "gamma").is_empty());
    }

    proptest! {
        #[test]
        fn filter_is_deterministic_and_order_preserving(
            raw in proptest::collection::vec("[a-c.]{0,4}", 0..12),
            query in "[a-c.]{0,2}",
        ) {
            let entries: Vec<OsString> = raw.iter().map(OsString::from).collect();
            let first = filter_entries(&entries, &query);
            let second = filter_entries(&entries, &query);
            prop_assert_eq!(&first, &second);

            // Result is a subsequence of the input.
            let mut rest = entries.iter();
            for kept in &first {
                prop_assert!(kept.to_string_lossy().contains(query.as_str()));
                prop_assert!(rest.any(|e| e == kept));
            }
        }
    }
}
