//! View rendering functions for list components.
//!
//! The list renders top to bottom as:
//! - the title
//! - a results counter while a query is entered
//! - a table of the current page with a leading row-number column
//! - the paginator

use super::types::Record;
use super::Model;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Pads `text` with spaces to `width` terminal cells.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

impl<R: Record + 'static> Model<R> {
    pub(super) fn view_header(&self) -> String {
        self.styles.title.clone().render(&self.title)
    }

    pub(super) fn view_search_info(&self) -> String {
        match self.search_summary() {
            Some(summary) => self.styles.search_info.clone().render(&summary),
            None => String::new(),
        }
    }

    /// Renders the current page as an aligned table.
    ///
    /// Column widths are measured in terminal cells, so wide characters in
    /// names stay aligned.
    pub(super) fn view_table(&self) -> String {
        let visible = self.visible_slice();
        if visible.is_empty() {
            let message = if self.is_filtered() {
                "No records match your search."
            } else {
                "No records found."
            };
            return self.styles.no_items.clone().render(message);
        }

        let headers: Vec<String> = std::iter::once("No".to_string())
            .chain(self.delegate.headers())
            .collect();
        let rows: Vec<Vec<String>> = visible
            .iter()
            .enumerate()
            .map(|(i, record)| {
                std::iter::once(self.row_number(i).to_string())
                    .chain(self.delegate.cells(record))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(cell.width()),
                    None => widths.push(cell.width()),
                }
            }
        }

        let format_row = |cells: &[String]| -> Vec<String> {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| pad(cell, w))
                .collect()
        };

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(
            self.styles
                .header
                .clone()
                .render(format_row(&headers).join(COLUMN_GAP).trim_end()),
        );
        for row in &rows {
            let mut cells = format_row(row);
            if let Some(first) = cells.first_mut() {
                *first = self.styles.row_number.clone().render(first);
            }
            let line = cells.join(COLUMN_GAP);
            lines.push(self.styles.row.clone().render(line.trim_end()));
        }
        lines.join("\n")
    }

    pub(super) fn view_pagination(&self) -> String {
        if !self.show_pagination {
            return String::new();
        }
        self.styles
            .pagination
            .clone()
            .render(&self.paginator.view())
    }
}
