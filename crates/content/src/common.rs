use serde::Deserialize;

/// A single table cell value. Untagged so clients can mix numbers,
/// booleans and text in one row, as spreadsheet tool-callers do.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// Plain-text form for renderers that have no typed cells
    /// (slide tables, document tables, PDF tables).
    pub fn display(&self) -> String {
        match self {
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// Tabular data shared by slides, sections, sheet blocks and page blocks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl TableData {
    /// Column count: the widest of the header row and any data row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// One block on a stats slide: a large value with a short label.
#[derive(Debug, Clone, Deserialize)]
pub struct StatBlock {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_values_deserialize_untagged() {
        let cells: Vec<CellValue> = serde_json::from_str(r#"[1.5, "two", true, 3]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                CellValue::Number(1.5),
                CellValue::Text("two".into()),
                CellValue::Bool(true),
                CellValue::Number(3.0),
            ]
        );
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(CellValue::Number(42.0).display(), "42");
        assert_eq!(CellValue::Number(1.25).display(), "1.25");
        assert_eq!(CellValue::Bool(false).display(), "FALSE");
    }

    #[test]
    fn column_count_takes_widest_row() {
        let table = TableData {
            headers: vec!["A".into(), "B".into()],
            rows: vec![vec![
                CellValue::Number(1.0),
                CellValue::Number(2.0),
                CellValue::Number(3.0),
            ]],
        };
        assert_eq!(table.column_count(), 3);
    }
}
