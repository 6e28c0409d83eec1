//! Include-directive preprocessing.
//!
//! Raw template text may contain `<% include name %>` directives. The loader
//! first loads every named template through the full fetch pipeline (so the
//! include target and its behavior are cached before the parent compiles),
//! then rewrites each directive to the template language's native include
//! tag, which resolves within the namespace's compiled set at render time.

use regex::Regex;
use std::sync::LazyLock;

static INCLUDE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<%\s*include\s+(\S+?)\s*%>").unwrap());

/// Names of included templates, in left-to-right scan order.
pub(crate) fn include_names(source: &str) -> Vec<String> {
    INCLUDE_DIRECTIVE
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Rewrite every include directive to a native include tag.
pub(crate) fn rewrite_includes(source: &str) -> String {
    INCLUDE_DIRECTIVE
        .replace_all(source, "{% include \"$1\" %}")
        .into_owned()
}
