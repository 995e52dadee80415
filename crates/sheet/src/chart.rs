use crate::cellref::{self, CellRange};
use papermill_content::{ChartSpec, SheetContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    /// Unknown type strings render as bar charts.
    fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("line") => ChartKind::Line,
            Some("pie") => ChartKind::Pie,
            _ => ChartKind::Bar,
        }
    }
}

/// One series of a bound chart: a display name plus an absolute
/// sheet-qualified values reference.
#[derive(Debug, Clone)]
pub struct BoundSeries {
    pub name: String,
    pub values_ref: String,
}

/// A chart spec resolved against its sheet: concrete category and series
/// references plus a placement anchor, ready for serialization.
#[derive(Debug, Clone)]
pub struct BoundChart {
    pub kind: ChartKind,
    pub title: Option<String>,
    /// Reference for the category axis; a single-column range has none.
    pub categories_ref: Option<String>,
    pub series: Vec<BoundSeries>,
    /// Zero-based (column, row) of the chart frame's top-left cell.
    pub anchor: (u32, u32),
}

/// Resolve one declarative chart against its sheet. The first column of
/// the data range supplies categories and every further column one series;
/// a one-column range becomes a single category-less series. A malformed
/// range skips just this chart.
pub fn bind(spec: &ChartSpec, sheet: &SheetContent) -> Option<BoundChart> {
    let Some(range) = cellref::parse_range(&spec.data_range) else {
        log::warn!(
            "skipping chart on sheet {:?}: malformed data range {:?}",
            sheet.name,
            spec.data_range
        );
        return None;
    };

    let (categories_ref, first_series_col) = if range.width() == 1 {
        (None, range.start.0)
    } else {
        (
            Some(cellref::column_ref(
                &sheet.name,
                range.start.0,
                range.start.1,
                range.end.1,
            )),
            range.start.0 + 1,
        )
    };

    let series = (first_series_col..=range.end.0)
        .map(|col| BoundSeries {
            name: series_name(sheet, col, first_series_col),
            values_ref: cellref::column_ref(&sheet.name, col, range.start.1, range.end.1),
        })
        .collect();

    Some(BoundChart {
        kind: ChartKind::from_tag(spec.chart_type.as_deref()),
        title: spec.title.clone(),
        categories_ref,
        series,
        anchor: anchor_for(spec, range),
    })
}

/// Series are named after the sheet's header row when it covers the
/// series column.
fn series_name(sheet: &SheetContent, col: u32, first_series_col: u32) -> String {
    sheet
        .headers
        .get(col as usize)
        .cloned()
        .unwrap_or_else(|| format!("Series {}", col - first_series_col + 1))
}

/// Explicit anchor if it parses; otherwise two columns right of the data.
fn anchor_for(spec: &ChartSpec, range: CellRange) -> (u32, u32) {
    if let Some(anchor) = spec.anchor.as_deref() {
        if let Some(cell) = cellref::parse_cell(anchor) {
            return cell;
        }
        log::warn!("unparseable chart anchor {anchor:?}, using default placement");
    }
    (range.end.0 + 2, range.start.1)
}
