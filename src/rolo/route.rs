//! Fragment routing: one route pattern, `filter/<value>`, mapped 1:1 onto a
//! [`Filter`]. Parsing is pure, so re-applying the same fragment always lands
//! on the same state.

use crate::directory::Filter;

/// Maps a URL fragment to a filter. `None` means no route matched, which the
/// caller treats as "change nothing".
///
/// Accepted forms (leading `#` optional): the empty fragment, `filter/all`
/// in any casing, and `filter/<kind>`.
pub fn parse_fragment(fragment: &str) -> Option<Filter> {
    let fragment = fragment.trim().trim_start_matches('#');
    if fragment.is_empty() {
        return Some(Filter::All);
    }
    let value = fragment.strip_prefix("filter/")?;
    // Filter::from_str is infallible; the sentinel and empty both mean All.
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_filter_fragments() {
        assert_eq!(parse_fragment("filter/family"), Some(Filter::kind("family")));
        assert_eq!(
            parse_fragment("#filter/Family"),
            Some(Filter::kind("family"))
        );
        assert_eq!(parse_fragment("filter/all"), Some(Filter::All));
        assert_eq!(parse_fragment("filter/ALL"), Some(Filter::All));
    }

    #[test]
    fn empty_fragment_means_everything() {
        assert_eq!(parse_fragment(""), Some(Filter::All));
        assert_eq!(parse_fragment("#"), Some(Filter::All));
        assert_eq!(parse_fragment("filter/"), Some(Filter::All));
    }

    #[test]
    fn unknown_routes_do_not_match() {
        assert_eq!(parse_fragment("settings/profile"), None);
        assert_eq!(parse_fragment("filters/family"), None);
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse_fragment("#filter/colleague");
        let again = parse_fragment("#filter/colleague");
        assert_eq!(first, again);
    }
}
