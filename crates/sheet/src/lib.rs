//! Spreadsheet (xlsx) composition: typed cells, verbatim formula
//! injection, per-column widths and best-effort chart binding.

pub mod cellref;
mod chart;
mod compose;
mod error;
mod write;

pub use chart::{bind as bind_chart, BoundChart, BoundSeries, ChartKind};
pub use compose::{BoundFormula, SheetComposer, Workbook, WorkbookSheet};
pub use error::ComposeError;
pub use write::write_xlsx;
