//! Stateless formatting helpers.
//!
//! These are plain string transforms with no connection to the cache or the
//! render pipeline. They exist for consumers that move text between HTML
//! fragments and plain-text form fields.

use regex::Regex;
use std::sync::LazyLock;

static BR_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br\s*/?>").unwrap());

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n\r|\r|\n").unwrap());

/// Convert `<br>`, `<br/>`, and `<br />` to `\n`.
pub fn br2nl(input: &str) -> String {
    BR_TAG.replace_all(input, "\n").into_owned()
}

/// Convert `\n` (and `\r`, `\r\n`, `\n\r`) to `<br />`.
///
/// The original line break is kept after the tag so that the plain-text
/// layout of the source survives. The self-closing form is valid in both
/// HTML5 and XHTML.
pub fn nl2br(input: &str) -> String {
    LINE_BREAK.replace_all(input, "<br />$0").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn br2nl_handles_all_tag_forms() {
        assert_eq!(br2nl("a<br>b"), "a\nb");
        assert_eq!(br2nl("a<br/>b"), "a\nb");
        assert_eq!(br2nl("a<br />b"), "a\nb");
        assert_eq!(br2nl("a<br   />b"), "a\nb");
    }

    #[test]
    fn br2nl_leaves_other_tags_alone() {
        assert_eq!(br2nl("<p>no breaks</p>"), "<p>no breaks</p>");
    }

    #[test]
    fn nl2br_inserts_tag_before_each_break() {
        assert_eq!(nl2br("a\nb"), "a<br />\nb");
        assert_eq!(nl2br("a\r\nb"), "a<br />\r\nb");
        assert_eq!(nl2br("a\rb"), "a<br />\rb");
    }

    #[test]
    fn nl2br_handles_multiple_breaks() {
        assert_eq!(nl2br("a\nb\nc"), "a<br />\nb<br />\nc");
    }

    #[test]
    fn round_trip_restores_br_tags() {
        // br2nl collapses every tag form to \n; nl2br restores the
        // canonical self-closing form.
        let collapsed = br2nl("x<br>y<br />z");
        assert_eq!(collapsed, "x\ny\nz");
        assert_eq!(nl2br(&collapsed), "x<br />\ny<br />\nz");
    }

    #[test]
    fn empty_input_passes_through() {
        assert_eq!(br2nl(""), "");
        assert_eq!(nl2br(""), "");
    }
}
