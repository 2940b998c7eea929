//! Rectangular cell grid and its HTML rendering

/// Rows of rendered cell strings, all of the same width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl CellGrid {
    /// Build a grid, dropping rows without cells and padding the rest on the
    /// right with empty cells. Returns `None` when no row has a cell.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Option<Self> {
        let mut rows: Vec<_> = rows.into_iter().filter(|r| !r.is_empty()).collect();
        let width = rows.iter().map(Vec::len).max()?;
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Some(Self { rows, width })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The first row is a header when none of its cells is blank
    pub fn has_header(&self) -> bool {
        self.rows
            .first()
            .is_some_and(|row| row.iter().all(|cell| !cell.trim().is_empty()))
    }

    /// `<table border="1">` block surrounded by blank lines
    pub fn to_html(&self) -> String {
        let mut lines = vec![r#"<table border="1">"#.to_string()];

        let body = if self.has_header() {
            lines.push("  <thead>".to_string());
            push_row(&mut lines, &self.rows[0], "th");
            lines.push("  </thead>".to_string());
            &self.rows[1..]
        } else {
            &self.rows[..]
        };

        lines.push("  <tbody>".to_string());
        for row in body {
            push_row(&mut lines, row, "td");
        }
        lines.push("  </tbody>".to_string());
        lines.push("</table>".to_string());

        format!("\n\n{}\n\n", lines.join("\n"))
    }
}

fn push_row(lines: &mut Vec<String>, row: &[String], tag: &str) {
    lines.push("    <tr>".to_string());
    for cell in row {
        lines.push(format!("      <{tag}>{cell}</{tag}>"));
    }
    lines.push("    </tr>".to_string());
}
