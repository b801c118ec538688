//! Editing helpers shared by the content form.

/// Parses the comma-separated tag field into the tag sequence.
///
/// Order is preserved and duplicates are kept; only empty segments are
/// dropped, so a trailing comma does not create a blank tag.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Formats a tag sequence back into the editable field text.
pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_duplicates() {
        assert_eq!(
            parse_tags("b, a , b"),
            vec!["b".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn parse_drops_empty_segments() {
        assert_eq!(parse_tags("one,,two,  ,"), vec!["one", "two"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn format_round_trips() {
        let tags = vec!["MINIMALISM".to_string(), "TYPOGRAPHY".to_string()];
        assert_eq!(parse_tags(&format_tags(&tags)), tags);
    }
}
