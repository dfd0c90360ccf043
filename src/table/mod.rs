//! Plain text tables
//!
//! Every setter checks the shape of what it receives, so a [`Table`] always
//! has exactly one cell per header in every row.

use std::fmt;
use std::str::FromStr;

use crate::error::TableError;
use crate::layout;

const HORIZONTAL_SEPARATOR: char = '-';
const VERTICAL_SEPARATOR: char = '|';
const JOIN_WITH_VLINES: char = '+';
const JOIN_WITHOUT_VLINES: char = ' ';

/// Horizontal placement of text inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    fn apply(self, text: &str, width: usize) -> String {
        match self {
            Alignment::Left => layout::column(text, width),
            Alignment::Center => layout::center(text, width),
            Alignment::Right => layout::right(text, width),
        }
    }
}

impl TryFrom<i64> for Alignment {
    type Error = TableError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Alignment::Left),
            0 => Ok(Alignment::Center),
            1 => Ok(Alignment::Right),
            other => Err(TableError::UnknownAlignment(other)),
        }
    }
}

impl FromStr for Alignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" | "centre" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(TableError::UnknownAlignmentName(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    show_vlines: bool,
    alignment: Alignment,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_vlines(&self) -> bool {
        self.show_vlines
    }

    pub fn set_show_vlines(&mut self, show: bool) {
        self.show_vlines = show;
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Replace the headers. While rows exist the header count can't change.
    pub fn set_headers(&mut self, headers: Vec<String>) -> Result<(), TableError> {
        if !self.rows.is_empty() && headers.len() != self.headers.len() {
            return Err(TableError::HeaderCount {
                expected: self.headers.len(),
                found: headers.len(),
            });
        }

        self.headers = headers;
        Ok(())
    }

    /// Add a column; existing rows get an empty cell.
    pub fn append_header(&mut self, header: impl Into<String>) {
        self.headers.push(header.into());

        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Add several columns; existing rows get empty cells.
    pub fn extend_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.headers.len();
        self.headers.extend(headers.into_iter().map(Into::into));
        let added = self.headers.len() - before;

        for row in &mut self.rows {
            row.extend(std::iter::repeat(String::new()).take(added));
        }
    }

    /// Replace every row. Nothing changes if any row has the wrong length.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) -> Result<(), TableError> {
        self.check_rows(&rows)?;
        self.rows = rows;
        Ok(())
    }

    pub fn append_row(&mut self, row: Vec<String>) -> Result<(), TableError> {
        self.check_row(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Append several rows. Nothing changes if any row has the wrong length.
    pub fn extend_rows(&mut self, rows: Vec<Vec<String>>) -> Result<(), TableError> {
        self.check_rows(&rows)?;
        self.rows.extend(rows);
        Ok(())
    }

    /// Width of each column: its widest cell, header included.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();

        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let rule = self.rule(&widths);

        let mut out = String::new();
        out.push_str(&rule);
        out.push_str(&self.line(&self.headers, &widths));
        out.push_str(&rule);
        for row in &self.rows {
            out.push_str(&self.line(row, &widths));
        }
        if !self.rows.is_empty() {
            out.push_str(&rule);
        }

        out
    }

    fn rule(&self, widths: &[usize]) -> String {
        let join = if self.show_vlines {
            JOIN_WITH_VLINES
        } else {
            JOIN_WITHOUT_VLINES
        };

        let segments: Vec<String> = widths
            .iter()
            .map(|w| layout::repeat(HORIZONTAL_SEPARATOR, *w as i64 + 2))
            .collect();

        self.edged(segments.join(&join.to_string()), join)
    }

    fn line(&self, cells: &[String], widths: &[usize]) -> String {
        let separator = if self.show_vlines {
            VERTICAL_SEPARATOR
        } else {
            JOIN_WITHOUT_VLINES
        };

        let cells: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {} ", self.alignment.apply(cell, *width)))
            .collect();

        self.edged(cells.join(&separator.to_string()), separator)
    }

    fn edged(&self, body: String, edge: char) -> String {
        if self.show_vlines {
            format!("{edge}{body}{edge}\n")
        } else {
            format!("{body}\n")
        }
    }

    fn check_row(&self, row: &[String]) -> Result<(), TableError> {
        if row.len() != self.headers.len() {
            return Err(TableError::RowLength {
                expected: self.headers.len(),
                found: row.len(),
            });
        }

        Ok(())
    }

    fn check_rows(&self, rows: &[Vec<String>]) -> Result<(), TableError> {
        rows.iter().try_for_each(|row| self.check_row(row))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn staff() -> Result<Table, TableError> {
        let mut table = Table::new();
        table.set_headers(strings(&["id", "name", "department"]))?;
        table.extend_rows(vec![
            strings(&["1", "Sam", "Operations"]),
            strings(&["2", "Anne", "Analytics"]),
        ])?;
        Ok(table)
    }

    #[test]
    fn alignment_from_integer() {
        assert_eq!(Alignment::try_from(-1_i64), Ok(Alignment::Left));
        assert_eq!(Alignment::try_from(0_i64), Ok(Alignment::Center));
        assert_eq!(Alignment::try_from(1_i64), Ok(Alignment::Right));
        assert_eq!(Alignment::try_from(2_i64), Err(TableError::UnknownAlignment(2)));
    }

    #[test]
    fn alignment_from_name() {
        assert_eq!("Right".parse::<Alignment>(), Ok(Alignment::Right));
        assert_eq!("centre".parse::<Alignment>(), Ok(Alignment::Center));
        assert!("middle".parse::<Alignment>().is_err());
    }

    #[test]
    fn rows_must_match_header_count() -> Result<(), TableError> {
        let mut table = staff()?;

        let err = table.append_row(strings(&["3", "Bob"])).unwrap_err();
        assert_eq!(err, TableError::RowLength { expected: 3, found: 2 });

        let err = table
            .extend_rows(vec![strings(&["3", "Bob", "Support"]), strings(&["4"])])
            .unwrap_err();
        assert_eq!(err, TableError::RowLength { expected: 3, found: 1 });
        assert_eq!(table.rows().len(), 2);

        table.append_row(strings(&["3", "Bob", "Support"]))?;
        assert_eq!(table.rows().len(), 3);
        Ok(())
    }

    #[test]
    fn headers_cannot_be_resized_under_rows() -> Result<(), TableError> {
        let mut table = staff()?;
        let err = table.set_headers(strings(&["only"])).unwrap_err();
        assert_eq!(err, TableError::HeaderCount { expected: 3, found: 1 });

        table.set_headers(strings(&["ID", "Name", "Dept"]))?;
        assert_eq!(table.headers()[2], "Dept");
        Ok(())
    }

    #[test]
    fn new_headers_pad_existing_rows() -> Result<(), TableError> {
        let mut table = staff()?;
        table.append_header("age");
        table.extend_headers(["gender", "salary"]);

        assert_eq!(table.headers().len(), 6);
        assert!(table.rows().iter().all(|row| row.len() == 6));
        assert_eq!(table.rows()[0][3], "");
        Ok(())
    }

    #[test]
    fn column_widths_include_headers() -> Result<(), TableError> {
        assert_eq!(staff()?.column_widths(), vec![2, 4, 10]);
        Ok(())
    }

    #[test]
    fn render_with_vlines() -> Result<(), TableError> {
        let mut table = staff()?;
        table.set_show_vlines(true);

        let expected = "\
+----+------+------------+
| id | name | department |
+----+------+------------+
| 1  | Sam  | Operations |
| 2  | Anne | Analytics  |
+----+------+------------+
";
        assert_eq!(table.to_string(), expected);
        Ok(())
    }

    #[test]
    fn render_right_aligned_without_vlines() -> Result<(), TableError> {
        let mut table = staff()?;
        table.set_alignment(Alignment::Right);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "---- ------ ------------");
        assert_eq!(lines[3], "  1    Sam   Operations ");
        assert_eq!(lines.len(), 6);
        Ok(())
    }

    #[test]
    fn empty_table_renders_header_only() {
        let mut table = Table::new();
        table.append_header("name");
        assert_eq!(table.render(), "------\n name \n------\n");
    }
}
