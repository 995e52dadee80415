use crate::cellref::cell_name;
use crate::chart::{BoundChart, ChartKind};
use crate::compose::{Workbook, WorkbookSheet};
use crate::error::ComposeError;
use papermill_content::CellValue;
use papermill_ooxml::{
    core_properties_xml, escape_xml, ContentTypes, PackageWriter, Relationships,
};
use papermill_style::Palette;
use papermill_types::Color;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
const REL_DRAWING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing";
const REL_CHART: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Width applied to columns without an explicit entry in the width map.
const DEFAULT_COLUMN_WIDTH: f64 = 14.0;

/// Cell style slots in styles.xml, in cellXfs order.
const XF_HEADER: u32 = 1;
const XF_TEXT: u32 = 2;
const XF_NUMBER: u32 = 3;
const XF_FORMULA: u32 = 4;

/// Serialize a composed workbook into xlsx bytes.
pub fn write_xlsx(
    workbook: &Workbook,
    palette: &Palette,
    title: &str,
) -> Result<Vec<u8>, ComposeError> {
    let mut package = PackageWriter::new();

    let mut content_types = ContentTypes::new();
    content_types
        .default("png", "image/png")
        .default("jpeg", "image/jpeg")
        .default("gif", "image/gif")
        .r#override(
            "/xl/workbook.xml",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
        )
        .r#override(
            "/xl/styles.xml",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml",
        )
        .r#override(
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        );

    let mut root_rels = Relationships::new();
    root_rels.add(
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
        "xl/workbook.xml",
    );
    root_rels.add(
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
        "docProps/core.xml",
    );

    let mut workbook_rels = Relationships::new();
    workbook_rels.add(REL_STYLES, "styles.xml");

    let mut sheet_entries = String::new();
    let mut chart_counter = 0usize;
    let mut drawing_counter = 0usize;

    for (i, sheet) in workbook.sheets.iter().enumerate() {
        let sheet_index = i + 1;
        let rid = workbook_rels.add(REL_WORKSHEET, &format!("worksheets/sheet{sheet_index}.xml"));
        let _ = write!(
            sheet_entries,
            r#"<sheet name="{}" sheetId="{sheet_index}" r:id="{rid}"/>"#,
            escape_xml(&sheet.name)
        );
        content_types.r#override(
            &format!("/xl/worksheets/sheet{sheet_index}.xml"),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml",
        );

        // The first sheet carries the logo; any sheet with charts gets a
        // drawing part.
        let logo = (i == 0).then_some(workbook.logo.as_ref()).flatten();
        let has_drawing = logo.is_some() || !sheet.charts.is_empty();

        let mut sheet_rels = Relationships::new();
        let drawing_rid = if has_drawing {
            drawing_counter += 1;
            content_types.r#override(
                &format!("/xl/drawings/drawing{drawing_counter}.xml"),
                "application/vnd.openxmlformats-officedocument.drawing+xml",
            );
            Some(sheet_rels.add(REL_DRAWING, &format!("../drawings/drawing{drawing_counter}.xml")))
        } else {
            None
        };

        package.part(
            &format!("xl/worksheets/sheet{sheet_index}.xml"),
            &worksheet_xml(sheet, drawing_rid.as_deref()),
        )?;
        if !sheet_rels.is_empty() {
            package.part(
                &format!("xl/worksheets/_rels/sheet{sheet_index}.xml.rels"),
                &sheet_rels.to_xml(),
            )?;
        }

        if has_drawing {
            let mut drawing_rels = Relationships::new();
            let mut anchors = String::new();

            if let Some(logo) = logo {
                let image_rid =
                    drawing_rels.add(REL_IMAGE, &format!("../media/logo.{}", logo.extension));
                package.raw_part(&format!("xl/media/logo.{}", logo.extension), &logo.bytes)?;
                let (cx, cy) = logo.fit_emu(
                    papermill_types::Emu::from_inches(1.0).raw(),
                    papermill_types::Emu::from_inches(0.6).raw(),
                );
                anchors.push_str(&logo_anchor_xml(&image_rid, cx, cy));
            }

            for chart in &sheet.charts {
                chart_counter += 1;
                content_types.r#override(
                    &format!("/xl/charts/chart{chart_counter}.xml"),
                    "application/vnd.openxmlformats-officedocument.drawingml.chart+xml",
                );
                package.part(
                    &format!("xl/charts/chart{chart_counter}.xml"),
                    &chart_xml(chart, palette),
                )?;
                let chart_rid =
                    drawing_rels.add(REL_CHART, &format!("../charts/chart{chart_counter}.xml"));
                anchors.push_str(&chart_anchor_xml(chart, &chart_rid, chart_counter));
            }

            package.part(
                &format!("xl/drawings/drawing{drawing_counter}.xml"),
                &format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<xdr:wsDr xmlns:xdr="http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">{anchors}</xdr:wsDr>"#
                ),
            )?;
            package.part(
                &format!("xl/drawings/_rels/drawing{drawing_counter}.xml.rels"),
                &drawing_rels.to_xml(),
            )?;
        }
    }

    package.part("[Content_Types].xml", &content_types.to_xml())?;
    package.part("_rels/.rels", &root_rels.to_xml())?;
    package.part("docProps/core.xml", &core_properties_xml(title, None))?;
    // fullCalcOnLoad makes the consuming application evaluate injected
    // formulas on first open, since no cached values are written.
    package.part(
        "xl/workbook.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{sheet_entries}</sheets><calcPr fullCalcOnLoad="1"/></workbook>"#
        ),
    )?;
    package.part("xl/_rels/workbook.xml.rels", &workbook_rels.to_xml())?;
    package.part("xl/styles.xml", &styles_xml(palette))?;

    Ok(package.finish()?)
}

enum Cell<'a> {
    Header(&'a str),
    Value(&'a CellValue),
    Formula(&'a str),
}

fn worksheet_xml(sheet: &WorkbookSheet, drawing_rid: Option<&str>) -> String {
    // Merge headers, data rows and formula cells into one sparse grid so
    // rows and cells serialize in ascending order.
    let mut grid: BTreeMap<u32, BTreeMap<u32, Cell<'_>>> = BTreeMap::new();
    for (col, header) in sheet.headers.iter().enumerate() {
        grid.entry(0).or_default().insert(col as u32, Cell::Header(header));
    }
    for (r, row) in sheet.rows.iter().enumerate() {
        let row_cells = grid.entry(r as u32 + 1).or_default();
        for (col, value) in row.iter().enumerate() {
            row_cells.insert(col as u32, Cell::Value(value));
        }
    }
    for formula in &sheet.formulas {
        grid.entry(formula.row)
            .or_default()
            .insert(formula.col, Cell::Formula(&formula.formula));
    }

    let max_col = grid
        .values()
        .flat_map(|cells| cells.keys().copied())
        .chain(sheet.column_widths.keys().copied())
        .max();

    let mut cols = String::new();
    if let Some(max_col) = max_col {
        cols.push_str("<cols>");
        for col in 0..=max_col {
            let (width, custom) = match sheet.column_widths.get(&col) {
                Some(width) => (*width, r#" customWidth="1""#),
                None => (DEFAULT_COLUMN_WIDTH, ""),
            };
            let _ = write!(
                cols,
                r#"<col min="{n}" max="{n}" width="{width}"{custom}/>"#,
                n = col + 1
            );
        }
        cols.push_str("</cols>");
    }

    let mut sheet_data = String::new();
    for (row, cells) in &grid {
        let _ = write!(sheet_data, r#"<row r="{}">"#, row + 1);
        for (col, cell) in cells {
            sheet_data.push_str(&cell_xml(*col, *row, cell));
        }
        sheet_data.push_str("</row>");
    }

    let drawing = drawing_rid
        .map(|rid| format!(r#"<drawing r:id="{rid}"/>"#))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">{cols}<sheetData>{sheet_data}</sheetData>{drawing}</worksheet>"#
    )
}

/// Header cells are bold on the brand fill; numeric cells center, text
/// cells left, formulas bold. All data styles carry thin borders.
fn cell_xml(col: u32, row: u32, cell: &Cell<'_>) -> String {
    let reference = cell_name(col, row);
    match cell {
        Cell::Header(text) => format!(
            r#"<c r="{reference}" s="{XF_HEADER}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
            escape_xml(text)
        ),
        Cell::Value(CellValue::Number(n)) => {
            format!(r#"<c r="{reference}" s="{XF_NUMBER}"><v>{n}</v></c>"#)
        }
        Cell::Value(CellValue::Bool(b)) => format!(
            r#"<c r="{reference}" s="{XF_TEXT}" t="b"><v>{}</v></c>"#,
            u8::from(*b)
        ),
        Cell::Value(CellValue::Text(text)) => format!(
            r#"<c r="{reference}" s="{XF_TEXT}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
            escape_xml(text)
        ),
        Cell::Formula(formula) => format!(
            r#"<c r="{reference}" s="{XF_FORMULA}"><f>{}</f></c>"#,
            escape_xml(formula)
        ),
    }
}

fn styles_xml(palette: &Palette) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><fonts count="3"><font><sz val="11"/><name val="Calibri"/><color rgb="FF{dark}"/></font><font><sz val="11"/><name val="Calibri"/><b/><color rgb="FF{light}"/></font><font><sz val="11"/><name val="Calibri"/><b/><color rgb="FF{dark}"/></font></fonts><fills count="3"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill><fill><patternFill patternType="solid"><fgColor rgb="FF{primary}"/><bgColor rgb="FF{primary}"/></patternFill></fill></fills><borders count="2"><border><left/><right/><top/><bottom/><diagonal/></border><border><left style="thin"><color auto="1"/></left><right style="thin"><color auto="1"/></right><top style="thin"><color auto="1"/></top><bottom style="thin"><color auto="1"/></bottom><diagonal/></border></borders><cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs><cellXfs count="5"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="0" fontId="1" fillId="2" borderId="1" xfId="0" applyFont="1" applyFill="1" applyBorder="1" applyAlignment="1"><alignment horizontal="center" vertical="center"/></xf><xf numFmtId="0" fontId="0" fillId="0" borderId="1" xfId="0" applyBorder="1" applyAlignment="1"><alignment horizontal="left"/></xf><xf numFmtId="0" fontId="0" fillId="0" borderId="1" xfId="0" applyBorder="1" applyAlignment="1"><alignment horizontal="center"/></xf><xf numFmtId="0" fontId="2" fillId="0" borderId="1" xfId="0" applyFont="1" applyBorder="1"/></cellXfs></styleSheet>"#,
        dark = palette.text_dark.hex(),
        light = palette.text_light.hex(),
        primary = palette.primary.hex(),
    )
}

fn logo_anchor_xml(rid: &str, cx: i64, cy: i64) -> String {
    format!(
        r#"<xdr:oneCellAnchor><xdr:from><xdr:col>0</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>0</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:from><xdr:ext cx="{cx}" cy="{cy}"/><xdr:pic><xdr:nvPicPr><xdr:cNvPr id="1" name="Logo"/><xdr:cNvPicPr/></xdr:nvPicPr><xdr:blipFill><a:blip r:embed="{rid}"/><a:stretch><a:fillRect/></a:stretch></xdr:blipFill><xdr:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></xdr:spPr></xdr:pic><xdr:clientData/></xdr:oneCellAnchor>"#
    )
}

/// Chart frames span a fixed 8x15 cell block from their anchor.
fn chart_anchor_xml(chart: &BoundChart, rid: &str, number: usize) -> String {
    let (col, row) = chart.anchor;
    format!(
        r#"<xdr:twoCellAnchor><xdr:from><xdr:col>{col}</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>{row}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:from><xdr:to><xdr:col>{}</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>{}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:to><xdr:graphicFrame macro=""><xdr:nvGraphicFramePr><xdr:cNvPr id="{}" name="Chart {number}"/><xdr:cNvGraphicFramePr/></xdr:nvGraphicFramePr><xdr:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/></xdr:xfrm><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/chart"><c:chart xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" r:id="{rid}"/></a:graphicData></a:graphic></xdr:graphicFrame><xdr:clientData/></xdr:twoCellAnchor>"#,
        col + 8,
        row + 15,
        number + 1,
    )
}

fn chart_xml(chart: &BoundChart, palette: &Palette) -> String {
    let series_colors = [palette.primary, palette.secondary, palette.accent];
    let mut series_xml = String::new();
    for (i, series) in chart.series.iter().enumerate() {
        series_xml.push_str(&series_body(
            i,
            &series.name,
            &series.values_ref,
            chart.categories_ref.as_deref(),
            series_colors[i % series_colors.len()],
        ));
    }

    let title_xml = chart
        .title
        .as_deref()
        .map(|title| {
            format!(
                r#"<c:title><c:tx><c:rich><a:bodyPr/><a:lstStyle/><a:p><a:r><a:t>{}</a:t></a:r></a:p></c:rich></c:tx><c:overlay val="0"/></c:title><c:autoTitleDeleted val="0"/>"#,
                escape_xml(title)
            )
        })
        .unwrap_or_default();

    let (plot, axes) = match chart.kind {
        ChartKind::Bar => (
            format!(
                r#"<c:barChart><c:barDir val="col"/><c:grouping val="clustered"/>{series_xml}<c:axId val="1"/><c:axId val="2"/></c:barChart>"#
            ),
            category_value_axes(),
        ),
        ChartKind::Line => (
            format!(
                r#"<c:lineChart><c:grouping val="standard"/>{series_xml}<c:axId val="1"/><c:axId val="2"/></c:lineChart>"#
            ),
            category_value_axes(),
        ),
        ChartKind::Pie => (
            format!(r#"<c:pieChart><c:varyColors val="1"/>{series_xml}</c:pieChart>"#),
            String::new(),
        ),
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><c:chart>{title_xml}<c:plotArea><c:layout/>{plot}{axes}</c:plotArea><c:plotVisOnly val="1"/></c:chart></c:chartSpace>"#
    )
}

/// `<c:f>` content keeps its literal apostrophes (quoted sheet names),
/// matching what spreadsheet applications themselves write; only the
/// markup metacharacters are escaped.
fn escape_ref(reference: &str) -> String {
    reference
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn series_body(
    index: usize,
    name: &str,
    values_ref: &str,
    categories_ref: Option<&str>,
    color: Color,
) -> String {
    let cat = categories_ref
        .map(|reference| {
            format!(
                r#"<c:cat><c:strRef><c:f>{}</c:f></c:strRef></c:cat>"#,
                escape_ref(reference)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<c:ser><c:idx val="{index}"/><c:order val="{index}"/><c:tx><c:v>{}</c:v></c:tx><c:spPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></c:spPr>{cat}<c:val><c:numRef><c:f>{}</c:f></c:numRef></c:val></c:ser>"#,
        escape_xml(name),
        color.hex(),
        escape_ref(values_ref),
    )
}

fn category_value_axes() -> String {
    r#"<c:catAx><c:axId val="1"/><c:scaling><c:orientation val="minMax"/></c:scaling><c:delete val="0"/><c:axPos val="b"/><c:crossAx val="2"/></c:catAx><c:valAx><c:axId val="2"/><c:scaling><c:orientation val="minMax"/></c:scaling><c:delete val="0"/><c:axPos val="l"/><c:crossAx val="1"/></c:valAx>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::SheetComposer;
    use papermill_content::{ChartSpec, FormulaSpec, SheetContent, SpreadsheetRequest};
    use papermill_style::default_palette;
    use std::io::{Cursor, Read};

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut out = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut out).unwrap();
        out
    }

    fn compose(sheets: Vec<SheetContent>) -> Workbook {
        SheetComposer::new().compose(&SpreadsheetRequest {
            title: "Report".into(),
            palette: None,
            logo: None,
            template: None,
            sheets,
        })
    }

    fn data_sheet() -> SheetContent {
        serde_json::from_value(serde_json::json!({
            "name": "Data",
            "headers": ["Month", "North"],
            "rows": [["Jan", 10], ["Feb", 12.5]]
        }))
        .unwrap()
    }

    #[test]
    fn headers_and_rows_round_trip_in_order() {
        let bytes = write_xlsx(&compose(vec![data_sheet()]), default_palette(), "R").unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
        let a1 = sheet.find(r#"<c r="A1" s="1""#).unwrap();
        let a2 = sheet.find(r#"<c r="A2""#).unwrap();
        let b3 = sheet.find(r#"<c r="B3""#).unwrap();
        assert!(a1 < a2 && a2 < b3);
        assert!(sheet.contains("<t xml:space=\"preserve\">Month</t>"));
        assert!(sheet.contains("<v>12.5</v>"));
        // numeric cells center via style slot 3, text via slot 2
        assert!(sheet.contains(r#"<c r="B2" s="3""#));
        assert!(sheet.contains(r#"<c r="A2" s="2""#));
    }

    #[test]
    fn formulas_write_verbatim_with_calc_on_load() {
        let mut sheet = data_sheet();
        sheet.formulas = vec![FormulaSpec { cell: "B4".into(), formula: "=SUM(B2:B3)".into() }];
        let bytes = write_xlsx(&compose(vec![sheet]), default_palette(), "R").unwrap();
        let ws = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert!(ws.contains(r#"<c r="B4" s="4"><f>SUM(B2:B3)</f></c>"#));
        let wb = read_part(&bytes, "xl/workbook.xml");
        assert!(wb.contains(r#"fullCalcOnLoad="1""#));
    }

    #[test]
    fn explicit_widths_override_the_default() {
        let mut sheet = data_sheet();
        sheet.column_widths = [("B".to_string(), 25.0)].into_iter().collect();
        let bytes = write_xlsx(&compose(vec![sheet]), default_palette(), "R").unwrap();
        let ws = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert!(ws.contains(r#"<col min="2" max="2" width="25" customWidth="1"/>"#));
        assert!(ws.contains(r#"<col min="1" max="1" width="14"/>"#));
    }

    #[test]
    fn bound_charts_produce_chart_and_drawing_parts() {
        let mut sheet = data_sheet();
        sheet.charts = vec![
            ChartSpec {
                chart_type: Some("bar".into()),
                title: Some("Revenue".into()),
                data_range: "A2:B3".into(),
                anchor: Some("D2".into()),
            },
            ChartSpec {
                chart_type: None,
                title: None,
                data_range: "A1".into(), // malformed, skipped
                anchor: None,
            },
        ];
        let bytes = write_xlsx(&compose(vec![sheet]), default_palette(), "R").unwrap();
        let chart = read_part(&bytes, "xl/charts/chart1.xml");
        assert!(chart.contains("<c:barChart>"));
        assert!(chart.contains("<c:f>'Data'!$B$2:$B$3</c:f>"));
        assert!(chart.contains("<a:t>Revenue</a:t>"));
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        assert!(archive.by_name("xl/charts/chart2.xml").is_err());
        let drawing = read_part(&bytes, "xl/drawings/drawing1.xml");
        assert!(drawing.contains("<xdr:col>3</xdr:col>"));
    }

    #[test]
    fn empty_request_serializes_an_openable_single_sheet_workbook() {
        let bytes = write_xlsx(&compose(vec![]), default_palette(), "R").unwrap();
        let wb = read_part(&bytes, "xl/workbook.xml");
        assert!(wb.contains(r#"<sheet name="Sheet1" sheetId="1""#));
        let ws = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert!(ws.contains("<sheetData></sheetData>"));
    }

    #[test]
    fn header_style_uses_the_brand_fill() {
        let bytes = write_xlsx(&compose(vec![data_sheet()]), default_palette(), "R").unwrap();
        let styles = read_part(&bytes, "xl/styles.xml");
        assert!(styles.contains(&format!("FF{}", default_palette().primary.hex())));
        assert!(styles.contains(r#"<alignment horizontal="center"/>"#));
    }

    #[test]
    fn logo_lands_on_the_first_sheet_only() {
        use papermill_ooxml::MediaImage;
        use std::sync::Arc;
        let mut workbook = compose(vec![data_sheet(), {
            let mut s = data_sheet();
            s.name = "Other".into();
            s
        }]);
        workbook.logo = Some(MediaImage {
            bytes: Arc::new(vec![0]),
            extension: "png",
            content_type: "image/png",
            px_width: 10,
            px_height: 10,
        });
        let bytes = write_xlsx(&workbook, default_palette(), "R").unwrap();
        let drawing = read_part(&bytes, "xl/drawings/drawing1.xml");
        assert!(drawing.contains("<xdr:oneCellAnchor>"));
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("xl/media/logo.png").is_ok());
        assert!(archive.by_name("xl/drawings/drawing2.xml").is_err());
    }
}
