use unicode_width::UnicodeWidthChar;

use crate::db::ContactRow;

const HEADERS: [&str; 3] = ["姓名", "職稱", "Email"];
const WIDTHS: [usize; 3] = [20, 30, 28];

/// Display width in terminal cells. East-Asian Wide and Fullwidth
/// characters take two cells, everything else one.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c.width() == Some(2) { 2 } else { 1 })
        .sum()
}

/// Pad `text` with trailing spaces up to `width` display cells. A string
/// already wider than the column is returned unchanged and the row
/// overflows its column boundary; no truncation.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

/// Render contacts as a fixed-column table: header line, dash separator
/// across the full declared width, one line per row.
pub fn render(rows: &[ContactRow]) -> String {
    let total: usize = WIDTHS.iter().sum();
    let mut out = String::new();

    let header: String = HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(label, width)| pad_to_width(label, width))
        .collect();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in rows {
        let cells = [row.name.as_str(), row.title.as_str(), row.email.as_str()];
        for (cell, width) in cells.iter().zip(WIDTHS) {
            out.push_str(&pad_to_width(cell, width));
        }
        out.push('\n');
    }

    out
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_characters_are_two_cells_wide() {
        assert_eq!(display_width("姓名"), 4);
        assert_eq!(display_width("Email"), 5);
        assert_eq!(display_width("王小明 wang"), 11);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn padding_counts_display_cells_not_chars() {
        let padded = pad_to_width("姓名", 20);
        assert_eq!(padded, format!("姓名{}", " ".repeat(16)));
        assert_eq!(display_width(&padded), 20);
    }

    #[test]
    fn overflowing_cell_is_left_unchanged() {
        let wide = "資訊工程學系特聘教授兼系主任";
        assert!(display_width(wide) > 10);
        assert_eq!(pad_to_width(wide, 10), wide);
    }

    #[test]
    fn renders_header_separator_and_rows() {
        let rows = vec![
            ContactRow {
                name: "王小明".to_string(),
                title: "教授".to_string(),
                email: "wang@csie.example.edu.tw".to_string(),
            },
            ContactRow {
                name: "李大華".to_string(),
                title: "副教授".to_string(),
                email: "lee@csie.example.edu.tw".to_string(),
            },
        ];

        let text = render(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "-".repeat(78));
        assert!(lines[0].starts_with("姓名"));
        assert_eq!(display_width(lines[0]), 78);
        assert_eq!(display_width(lines[2]), 78);
        assert!(lines[2].starts_with("王小明"));
        assert!(lines[3].contains("lee@csie.example.edu.tw"));
    }

    #[test]
    fn empty_input_still_renders_the_frame() {
        let text = render(&[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "-".repeat(78));
    }

    #[test]
    fn render_over_extract_end_to_end() {
        let page = "
            <div class=\"member_name\"><a href=\"/p/1\">王小明</a></div>
            <div class=\"member_info_content\">教授</div>
            <a href=\"mailto:wang@csie.example.edu.tw\">mail</a>
            <div class=\"member_name\"><a href=\"/p/2\">李大華</a></div>
            <div class=\"member_info_content\">副教授</div>
            <a href=\"mailto:lee@csie.example.edu.tw\">mail</a>
            <div class=\"member_name\"><a href=\"/p/3\">陳美玲</a></div>
            <div class=\"member_info_content\">助理教授</div>
            <a href=\"mailto:chen@csie.example.edu.tw\">mail</a>
        ";

        let rows = crate::parse::extract(page);
        let text = render(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1].len(), 78);
        assert!(lines[2].starts_with(&pad_to_width("王小明", 20)));
        assert!(lines[4].contains("chen@csie.example.edu.tw"));
    }
}
