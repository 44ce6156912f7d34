//! AsciiDoc table output.
//!
//! Step data tables, the cases table and the statistics table all share
//! the same shape: an optional title, an attribute line, the `|===`
//! delimiters and one line per row. They differ only in role, options,
//! column styles and cell padding, which are parameters of `AsciiDocTable`.

use crate::types::DataTable;

/// Opening and closing delimiter of a table
pub const TABLE_DELIMITER: &str = "|===";

/// Style of a single column in the `cols` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStyle {
    /// `1`
    Default,
    /// `h` - the column is rendered as row headers
    Header,
    /// `>1`
    RightAligned,
}

impl ColumnStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnStyle::Default => "1",
            ColumnStyle::Header => "h",
            ColumnStyle::RightAligned => ">1",
        }
    }
}

/// How the cells of a row are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPadding {
    /// `| a | b`
    Compact,
    /// `| a | b ` - every cell is followed by a space
    Trailing,
}

/// A table ready to be rendered as AsciiDoc lines
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiDocTable {
    title: Option<String>,
    role: Option<&'static str>,
    options: Vec<&'static str>,
    columns: Vec<ColumnStyle>,
    padding: CellPadding,
    rows: Vec<Vec<String>>,
}

impl AsciiDocTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        AsciiDocTable {
            title: None,
            role: None,
            options: Vec::new(),
            columns: Vec::new(),
            padding: CellPadding::Compact,
            rows,
        }
    }

    /// Table for a step argument; the header orientation decides the
    /// `header` option and whether the first column is a header column.
    pub fn from_data_table(table: &DataTable, role: &'static str) -> Self {
        let header_type = table.header_type();

        let mut columns = vec![ColumnStyle::Default; table.column_count()];
        if header_type.is_vertical() {
            columns[0] = ColumnStyle::Header;
        }

        let mut result =
            AsciiDocTable::new(table.rows().to_vec()).role(role).columns(columns).padding(CellPadding::Trailing);
        if header_type.is_horizontal() {
            result = result.option("header");
        }
        result
    }

    /// Block title, rendered as `.<title>` above the table
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn role(mut self, role: &'static str) -> Self {
        self.role = Some(role);
        self
    }

    pub fn option(mut self, option: &'static str) -> Self {
        self.options.push(option);
        self
    }

    pub fn columns(mut self, columns: Vec<ColumnStyle>) -> Self {
        self.columns = columns;
        self
    }

    pub fn padding(mut self, padding: CellPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Attribute line such as `[.jg-casesTable%header,cols="h,1,>1"]`.
    ///
    /// Options are attached to the role shorthand when a role is set and
    /// spelled out as `options="..."` otherwise.
    fn attribute_line(&self) -> Option<String> {
        let mut attributes = Vec::new();

        match self.role {
            Some(role) => {
                let mut shorthand = format!(".{}", role);
                for option in &self.options {
                    shorthand.push('%');
                    shorthand.push_str(option);
                }
                attributes.push(shorthand);
            }
            None if !self.options.is_empty() => {
                attributes.push(format!("options=\"{}\"", self.options.join(",")));
            }
            None => {}
        }

        if !self.columns.is_empty() {
            let cols: Vec<&str> = self.columns.iter().map(ColumnStyle::as_str).collect();
            attributes.push(format!("cols=\"{}\"", cols.join(",")));
        }

        if attributes.is_empty() { None } else { Some(format!("[{}]", attributes.join(","))) }
    }

    fn format_row(&self, cells: &[String]) -> String {
        match self.padding {
            CellPadding::Compact => format!("| {}", cells.join(" | ")),
            CellPadding::Trailing => cells.iter().map(|cell| format!("| {} ", cell)).collect(),
        }
    }

    /// Render the table, one entry per output line
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        if let Some(ref title) = self.title {
            lines.push(format!(".{}", title));
        }
        if let Some(attributes) = self.attribute_line() {
            lines.push(attributes);
        }

        lines.push(TABLE_DELIMITER.to_string());
        for row in &self.rows {
            lines.push(self.format_row(row));
        }
        lines.push(TABLE_DELIMITER.to_string());

        lines
    }
}
