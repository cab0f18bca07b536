use super::{EMAIL_RE, NAME_RE, TITLE_RE};
use crate::db::ContactRow;

/// Block-scoped extraction, the strict alternative to the positional zip
/// in [`super::extract`]. The page is cut into one span per name anchor
/// (anchor to next anchor) and the title and email patterns only match
/// inside that span. Entries missing either field are dropped instead of
/// borrowing a value from a neighbour.
pub fn extract(raw: &str) -> Vec<ContactRow> {
    let mut anchors: Vec<(usize, String)> = Vec::new();
    for caps in NAME_RE.captures_iter(raw) {
        if let Some(m) = caps.get(0) {
            anchors.push((m.start(), caps[1].to_string()));
        }
    }

    let mut rows = Vec::new();
    for (i, (start, name)) in anchors.iter().enumerate() {
        let end = anchors.get(i + 1).map_or(raw.len(), |(next, _)| *next);
        let span = &raw[*start..end];

        let title = TITLE_RE
            .captures(span)
            .map(|caps| caps[1].trim().to_string())
            .filter(|t| !t.is_empty());
        let email = EMAIL_RE.captures(span).map(|caps| caps[1].to_string());

        if let (Some(title), Some(email)) = (title, email) {
            rows.push(ContactRow {
                name: name.clone(),
                title,
                email,
            });
        }
    }
    rows
}

// ── Tests ──
