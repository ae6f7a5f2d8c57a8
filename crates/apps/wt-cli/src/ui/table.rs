use crate::theme::Theme;
use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

/// Bordered table with rounded corners and a header separator.
///
/// Column widths are measured in terminal cells, so Cyrillic or other
/// non-ASCII text stays aligned. Styling is skipped when no theme is set.
#[derive(Debug, Clone, Default)]
pub struct Table {
    theme: Option<Theme>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn themed(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn header(&mut self, columns: &[&str]) -> &mut Self {
        self.headers = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for line in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (idx, cell) in line.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.width());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        if widths.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        out.push_str(&self.rule(&widths, '╭', '┬', '╮'));
        if !self.headers.is_empty() {
            out.push_str(&self.line(&widths, &self.headers, true));
            out.push_str(&self.rule(&widths, '├', '┼', '┤'));
        }
        for row in &self.rows {
            out.push_str(&self.line(&widths, row, false));
        }
        out.push_str(&self.rule(&widths, '╰', '┴', '╯'));
        out
    }

    fn rule(&self, widths: &[usize], left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        let mid = mid.to_string();
        let rule = format!("{}{}{}", left, segments.join(mid.as_str()), right);
        format!("{}\n", self.paint_border(&rule))
    }

    fn line(&self, widths: &[usize], cells: &[String], heading: bool) -> String {
        let bar = self.paint_border("│");
        let mut out = bar.clone();
        for (idx, width) in widths.iter().enumerate() {
            let text = cells.get(idx).map(String::as_str).unwrap_or("");
            let pad = " ".repeat(width - text.width());
            let text = if heading {
                self.paint_heading(text)
            } else {
                text.to_string()
            };
            out.push_str(&format!(" {}{} ", text, pad));
            out.push_str(&bar);
        }
        out.push('\n');
        out
    }

    fn paint_border(&self, text: &str) -> String {
        match &self.theme {
            Some(theme) => text.with(theme.border).to_string(),
            None => text.to_string(),
        }
    }

    fn paint_heading(&self, text: &str) -> String {
        match &self.theme {
            Some(theme) => text.with(theme.primary).bold().to_string(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rounded_table() {
        let mut table = Table::new();
        table.header(&["City", "Time"]);
        table.row(["Paris", "01:00 PM"]);

        let expected = "\
╭───────┬──────────╮
│ City  │ Time     │
├───────┼──────────┤
│ Paris │ 01:00 PM │
╰───────┴──────────╯
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn lines_share_display_width_with_cyrillic() {
        let mut table = Table::new();
        table.header(&["Город", "Местное время", "Часовой пояс"]);
        table.row(["Местное", "09:00 AM", "-"]);
        table.row(["Tokyo", "05:00 PM", "Asia/Tokyo"]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(|l| l.width()).collect();
        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new();
        table.header(&["A", "B", "C"]);
        table.row(["x"]);

        let rendered = table.render();
        assert!(rendered.contains("│ x │   │   │"));
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(Table::new().render(), "");
    }

    #[test]
    fn themed_table_keeps_cell_text() {
        let mut table = Table::themed(Theme::default());
        table.header(&["City"]);
        table.row(["Lima"]);

        let rendered = table.render();
        assert!(rendered.contains("City"));
        assert!(rendered.contains("Lima"));
        assert_eq!(rendered.lines().count(), 5);
    }
}
