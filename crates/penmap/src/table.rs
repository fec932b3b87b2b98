use penmap_core::{DeviceMap, Window};

/// Box-drawn table with left-aligned columns.
struct TableFormatter {
    widths: Vec<usize>,
}

impl TableFormatter {
    fn new(headers: &[&str], rows: &[Vec<String>], max_widths: &[usize]) -> Self {
        let widths = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                rows.iter()
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0)
                    .clamp(header.chars().count(), max_widths[col])
            })
            .collect();
        Self { widths }
    }

    fn print_table(&self, headers: &[&str], rows: &[Vec<String>]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.row(headers.iter().copied()));
        println!("{}", self.border('├', '┼', '┤'));
        for row in rows {
            println!("{}", self.row(row.iter().map(String::as_str)));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn row<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let cells: Vec<String> = cells
            .zip(&self.widths)
            .map(|(cell, width)| format!(" {} ", truncate(cell, *width)))
            .collect();
        format!("│{}│", cells.join("│"))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(middle.to_string().as_str()))
    }
}

pub fn print_devices_table(devices: &DeviceMap) {
    let headers = ["Name", "ID"];
    let rows: Vec<Vec<String>> = devices
        .iter()
        .map(|d| vec![d.name.clone(), d.id.clone()])
        .collect();
    TableFormatter::new(&headers, &rows, &[50, 8]).print_table(&headers, &rows);
}

pub fn print_windows_table(windows: &[Window]) {
    let headers = ["#", "ID", "Geometry", "Title"];
    let rows: Vec<Vec<String>> = windows
        .iter()
        .enumerate()
        .map(|(i, w)| {
            vec![
                (i + 1).to_string(),
                w.id.clone(),
                w.geometry.to_string(),
                w.title.clone(),
            ]
        })
        .collect();
    TableFormatter::new(&headers, &rows, &[4, 12, 22, 50]).print_table(&headers, &rows);
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 titles.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_pads_short_strings() {
        assert_eq!(truncate("abc", 5), "abc  ");
    }

    #[test]
    fn test_truncate_long_strings() {
        assert_eq!(truncate("Untitled Document", 10), "Untitle...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("éditeur de texte", 8), "édite...");
    }

    #[test]
    fn test_column_widths_clamped() {
        let rows = vec![vec!["x".repeat(80), "9".to_string()]];
        let formatter = TableFormatter::new(&["Name", "ID"], &rows, &[50, 8]);
        assert_eq!(formatter.widths, vec![50, 2]);
    }

    #[test]
    fn test_border_layout() {
        let formatter = TableFormatter {
            widths: vec![2, 3],
        };
        assert_eq!(formatter.border('┌', '┬', '┐'), "┌────┬─────┐");
        assert_eq!(
            formatter.row(["a", "bc"].into_iter()),
            "│ a  │ bc  │"
        );
    }
}
