pub mod segmented;

use std::sync::LazyLock;

use regex::Regex;

use crate::db::ContactRow;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="member_name"><a href="[^"]+">([^<]+)</a>"#).unwrap()
});

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="member_info_content">\s*(.*教授.*?)\s*</div>"#).unwrap()
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a href="mailto:([\w.%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})">"#).unwrap()
});

/// Scan the whole page with the three field patterns and pair the match
/// lists by position: the i-th name goes with the i-th title and the i-th
/// email, and the result is as long as the shortest list.
///
/// Nothing ties the i-th match of each pattern to the same member block.
/// A page entry missing one field shifts every later pairing in that
/// list, so irregular pages can attribute a title or email to the wrong
/// person. `segmented::extract` is the strict variant.
pub fn extract(raw: &str) -> Vec<ContactRow> {
    let names: Vec<String> = NAME_RE
        .captures_iter(raw)
        .map(|caps| caps[1].to_string())
        .collect();

    let titles: Vec<String> = TITLE_RE
        .captures_iter(raw)
        .map(|caps| caps[1].trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let emails: Vec<String> = EMAIL_RE
        .captures_iter(raw)
        .map(|caps| caps[1].to_string())
        .collect();

    names
        .into_iter()
        .zip(titles)
        .zip(emails)
        .map(|((name, title), email)| ContactRow { name, title, email })
        .collect()
}

// ── Tests ──
