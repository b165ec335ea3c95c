use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{FONT_TAG_CLOSE, FONT_TAG_OPEN, FONT_TAG_OPEN_END};

static FONT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?font\b[^>]*>").expect("font tag pattern is valid"));

/// Append `<font color='COLOR'>UNIT</font>`, the exact markup of the rich text renderer
pub fn push_font_tag(out: &mut String, color: &str, unit: &str) {
    let tags_len = FONT_TAG_OPEN.len() + FONT_TAG_OPEN_END.len() + FONT_TAG_CLOSE.len();
    out.reserve(tags_len + color.len() + unit.len());
    out.push_str(FONT_TAG_OPEN);
    out.push_str(color);
    out.push_str(FONT_TAG_OPEN_END);
    out.push_str(unit);
    out.push_str(FONT_TAG_CLOSE);
}

pub fn font_tag(color: &str, unit: &str) -> String {
    let mut s = String::new();
    push_font_tag(&mut s, color, unit);
    s
}

/// Remove all opening and closing font tags, leaving only the text
pub fn strip_font_tags(marked: &str) -> Cow<'_, str> {
    FONT_TAG_RE.replace_all(marked, "")
}

pub fn count_font_tags(marked: &str) -> usize {
    marked.matches(FONT_TAG_OPEN).count()
}
