use crate::{CellValue, ValidationError};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Worksheet names Excel refuses beyond this length.
const MAX_SHEET_NAME: usize = 31;

/// A request to generate a spreadsheet workbook.
#[derive(Debug, Clone, Deserialize)]
pub struct SpreadsheetRequest {
    pub title: String,
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub sheets: Vec<SheetContent>,
}

/// One worksheet: a header row, data rows, and optional formula, width and
/// chart annotations.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetContent {
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
    #[serde(default)]
    pub formulas: Vec<FormulaSpec>,
    /// Explicit column widths keyed by column letter ("A", "B", ...).
    #[serde(default)]
    pub column_widths: BTreeMap<String, f64>,
    #[serde(default)]
    pub charts: Vec<ChartSpec>,
}

/// A formula written verbatim into one target cell.
#[derive(Debug, Clone, Deserialize)]
pub struct FormulaSpec {
    /// Target cell reference, e.g. "B5".
    pub cell: String,
    /// Formula text; a leading '=' is accepted and normalized away.
    pub formula: String,
}

/// A declarative chart over a cell range. Binding is best-effort: a
/// malformed range skips the chart, never the sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSpec {
    /// "bar", "line" or "pie"; anything else renders as a bar chart.
    #[serde(default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Two colon-separated endpoints, e.g. "A1:C5".
    pub data_range: String,
    /// Top-left anchor cell for the chart frame, e.g. "E2".
    #[serde(default)]
    pub anchor: Option<String>,
}

impl SpreadsheetRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        for (i, sheet) in self.sheets.iter().enumerate() {
            if sheet.name.trim().is_empty() {
                return Err(ValidationError::EmptySheetName(i));
            }
            if sheet.name.chars().count() > MAX_SHEET_NAME {
                return Err(ValidationError::SheetNameTooLong {
                    index: i,
                    name: sheet.name.clone(),
                });
            }
            for (f, formula) in sheet.formulas.iter().enumerate() {
                if formula.cell.trim().is_empty() {
                    return Err(ValidationError::EmptyFormulaCell { index: i, formula: f });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_sheet_deserializes() {
        let req: SpreadsheetRequest =
            serde_json::from_str(r#"{"title": "Report", "sheets": [{"name": "Data"}]}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.sheets[0].charts.is_empty());
    }

    #[test]
    fn overlong_sheet_name_is_rejected() {
        let name = "x".repeat(32);
        let req = SpreadsheetRequest {
            title: "Report".into(),
            palette: None,
            logo: None,
            template: None,
            sheets: vec![SheetContent {
                name: name.clone(),
                headers: vec![],
                rows: vec![],
                formulas: vec![],
                column_widths: BTreeMap::new(),
                charts: vec![],
            }],
        };
        assert_eq!(
            req.validate(),
            Err(ValidationError::SheetNameTooLong { index: 0, name })
        );
    }

    #[test]
    fn chart_spec_keeps_raw_range() {
        let chart: ChartSpec =
            serde_json::from_str(r#"{"data_range": "A1", "chart_type": "pie"}"#).unwrap();
        // Malformed ranges are the chart binder's concern, not validation's.
        assert_eq!(chart.data_range, "A1");
    }
}
