//! Text search predicates for [`filter`](crate::filter())

/// Build a case-insensitive substring matcher.
///
/// The query is lowercased and trimmed once. A blank query matches
/// everything; an element whose text is empty never matches a non-blank
/// query.
pub fn create_search<T, S>(query: &str, stringifier: S) -> impl Fn(&T) -> bool + use<T, S>
where
    S: Fn(&T) -> String,
{
    let prepared = query.trim().to_lowercase();

    move |element: &T| {
        if prepared.is_empty() {
            return true;
        }
        let text = stringifier(element);
        !text.is_empty() && text.to_lowercase().contains(&prepared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;

    #[test]
    fn matches_case_insensitively() {
        let matches = create_search("  Sec ", |name: &&str| (*name).to_string());
        assert!(matches(&"Security Camera"));
        assert!(matches(&"medsec"));
        assert!(!matches(&"Engineering"));
    }

    #[test]
    fn blank_query_matches_everything() {
        let matches = create_search("   ", |_: &u8| String::new());
        assert!(matches(&0));
    }

    #[test]
    fn empty_text_never_matches() {
        let matches = create_search("a", |_: &u8| String::new());
        assert!(!matches(&0));
    }

    #[test]
    fn feeds_filter() {
        let names = ["Bridge", "Brig", "Bar"];
        let matches = create_search("bri", |name: &&str| (*name).to_string());

        let found = filter(|name, _, _| matches(name), &names);

        assert_eq!(found, vec!["Bridge", "Brig"]);
    }
}
