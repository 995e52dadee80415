use crate::cellref;
use crate::chart::{self, BoundChart};
use papermill_content::{CellValue, SheetContent, SpreadsheetRequest};
use papermill_ooxml::MediaImage;
use std::collections::BTreeMap;

/// A formula bound to its parsed target cell, '=' prefix normalized away.
#[derive(Debug, Clone)]
pub struct BoundFormula {
    pub col: u32,
    pub row: u32,
    pub formula: String,
}

/// One worksheet after composition: content plus resolved annotations.
#[derive(Debug, Clone)]
pub struct WorkbookSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub formulas: Vec<BoundFormula>,
    /// Column index to explicit width, keys resolved from letters.
    pub column_widths: BTreeMap<u32, f64>,
    pub charts: Vec<BoundChart>,
}

/// The composed workbook handed to the serializer.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<WorkbookSheet>,
    /// Placed at the top-left cell of the first sheet.
    pub logo: Option<MediaImage>,
}

/// Resolves each sheet's formulas, widths and charts. Every annotation is
/// best-effort: an entry that does not parse is logged and dropped without
/// affecting the rest of the sheet.
pub struct SheetComposer {
    logo: Option<MediaImage>,
}

impl SheetComposer {
    pub fn new() -> Self {
        Self { logo: None }
    }

    pub fn with_logo(mut self, logo: Option<MediaImage>) -> Self {
        self.logo = logo;
        self
    }

    pub fn compose(&self, request: &SpreadsheetRequest) -> Workbook {
        // A workbook must carry at least one sheet to open; an empty
        // request gets a blank Sheet1.
        let sheets = if request.sheets.is_empty() {
            log::debug!("request has no sheets, substituting an empty Sheet1");
            vec![WorkbookSheet {
                name: "Sheet1".to_string(),
                headers: Vec::new(),
                rows: Vec::new(),
                formulas: Vec::new(),
                column_widths: BTreeMap::new(),
                charts: Vec::new(),
            }]
        } else {
            request.sheets.iter().map(compose_sheet).collect()
        };
        Workbook { sheets, logo: self.logo.clone() }
    }
}

impl Default for SheetComposer {
    fn default() -> Self {
        Self::new()
    }
}

fn compose_sheet(sheet: &SheetContent) -> WorkbookSheet {
    let formulas = sheet
        .formulas
        .iter()
        .filter_map(|spec| {
            let Some((col, row)) = cellref::parse_cell(&spec.cell) else {
                log::warn!(
                    "skipping formula on sheet {:?}: bad target cell {:?}",
                    sheet.name,
                    spec.cell
                );
                return None;
            };
            Some(BoundFormula {
                col,
                row,
                formula: spec.formula.trim_start_matches('=').to_string(),
            })
        })
        .collect();

    let column_widths = sheet
        .column_widths
        .iter()
        .filter_map(|(letters, width)| match cellref::column_index(letters) {
            Some(col) if *width > 0.0 => Some((col, *width)),
            _ => {
                log::warn!(
                    "skipping column width on sheet {:?}: bad column {:?}",
                    sheet.name,
                    letters
                );
                None
            }
        })
        .collect();

    let charts = sheet
        .charts
        .iter()
        .filter_map(|spec| chart::bind(spec, sheet))
        .collect();

    WorkbookSheet {
        name: sheet.name.clone(),
        headers: sheet.headers.clone(),
        rows: sheet.rows.clone(),
        formulas,
        column_widths,
        charts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papermill_content::{ChartSpec, FormulaSpec};

    fn request(sheet: SheetContent) -> SpreadsheetRequest {
        SpreadsheetRequest {
            title: "Report".into(),
            palette: None,
            logo: None,
            template: None,
            sheets: vec![sheet],
        }
    }

    fn bare_sheet() -> SheetContent {
        SheetContent {
            name: "Data".into(),
            headers: vec![],
            rows: vec![],
            formulas: vec![],
            column_widths: BTreeMap::new(),
            charts: vec![],
        }
    }

    #[test]
    fn formulas_normalize_their_equals_prefix() {
        let mut sheet = bare_sheet();
        sheet.formulas = vec![
            FormulaSpec { cell: "B5".into(), formula: "=SUM(B2:B4)".into() },
            FormulaSpec { cell: "C5".into(), formula: "AVERAGE(C2:C4)".into() },
        ];
        let workbook = SheetComposer::new().compose(&request(sheet));
        let formulas = &workbook.sheets[0].formulas;
        assert_eq!(formulas[0].formula, "SUM(B2:B4)");
        assert_eq!((formulas[0].col, formulas[0].row), (1, 4));
        assert_eq!(formulas[1].formula, "AVERAGE(C2:C4)");
    }

    #[test]
    fn unparseable_formula_targets_are_dropped() {
        let mut sheet = bare_sheet();
        sheet.formulas = vec![FormulaSpec { cell: "??".into(), formula: "SUM(A:A)".into() }];
        let workbook = SheetComposer::new().compose(&request(sheet));
        assert!(workbook.sheets[0].formulas.is_empty());
    }

    #[test]
    fn width_letters_resolve_to_indices() {
        let mut sheet = bare_sheet();
        sheet.column_widths = BTreeMap::from([
            ("A".to_string(), 22.0),
            ("c".to_string(), 9.5),
            ("not-a-column".to_string(), 8.0),
        ]);
        let workbook = SheetComposer::new().compose(&request(sheet));
        let widths = &workbook.sheets[0].column_widths;
        assert_eq!(widths.get(&0), Some(&22.0));
        assert_eq!(widths.get(&2), Some(&9.5));
        assert_eq!(widths.len(), 2);
    }

    #[test]
    fn zero_sheet_requests_get_a_blank_default_sheet() {
        let req = SpreadsheetRequest {
            title: "Report".into(),
            palette: None,
            logo: None,
            template: None,
            sheets: vec![],
        };
        let workbook = SheetComposer::new().compose(&req);
        assert_eq!(workbook.sheets.len(), 1);
        assert_eq!(workbook.sheets[0].name, "Sheet1");
        assert!(workbook.sheets[0].rows.is_empty());
    }

    #[test]
    fn only_malformed_charts_are_skipped() {
        let mut sheet = bare_sheet();
        sheet.charts = vec![
            ChartSpec {
                chart_type: None,
                title: None,
                data_range: "A1".into(),
                anchor: None,
            },
            ChartSpec {
                chart_type: Some("line".into()),
                title: None,
                data_range: "A1:B4".into(),
                anchor: None,
            },
        ];
        let workbook = SheetComposer::new().compose(&request(sheet));
        assert_eq!(workbook.sheets[0].charts.len(), 1);
    }
}
