use crate::error::ComposeError;
use crate::model::{DocBlock, DocModel};
use papermill_content::TableData;
use papermill_ooxml::{
    core_properties_xml, escape_xml, ContentTypes, MediaImage, PackageWriter, Relationships,
};
use papermill_style::Palette;
use std::fmt::Write as _;

const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Twentieths of a point, the unit `w:ind`/`w:pgSz` speak.
const TWIPS_PER_INCH: i64 = 1_440;

/// Serialize a composed document into docx bytes.
pub fn write_docx(
    model: &DocModel,
    palette: &Palette,
    title: &str,
    author: Option<&str>,
) -> Result<Vec<u8>, ComposeError> {
    let mut package = PackageWriter::new();

    let mut content_types = ContentTypes::new();
    content_types
        .default("png", "image/png")
        .default("jpeg", "image/jpeg")
        .default("gif", "image/gif")
        .r#override(
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        )
        .r#override(
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        )
        .r#override(
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        );
    package.part("[Content_Types].xml", &content_types.to_xml())?;

    let mut root_rels = Relationships::new();
    root_rels.add(
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
        "word/document.xml",
    );
    root_rels.add(
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
        "docProps/core.xml",
    );
    package.part("_rels/.rels", &root_rels.to_xml())?;
    package.part("docProps/core.xml", &core_properties_xml(title, author))?;

    let mut doc_rels = Relationships::new();
    doc_rels.add(REL_STYLES, "styles.xml");
    let logo_rid = model
        .logo
        .as_ref()
        .map(|logo| doc_rels.add(REL_IMAGE, &format!("media/logo.{}", logo.extension)));

    if let Some(logo) = &model.logo {
        package.raw_part(&format!("word/media/logo.{}", logo.extension), &logo.bytes)?;
    }

    package.part("word/styles.xml", &styles_xml(palette))?;
    package.part(
        "word/document.xml",
        &document_xml(model, palette, logo_rid.as_deref()),
    )?;
    package.part("word/_rels/document.xml.rels", &doc_rels.to_xml())?;

    Ok(package.finish()?)
}

fn document_xml(model: &DocModel, palette: &Palette, logo_rid: Option<&str>) -> String {
    let mut body = String::new();
    for block in &model.blocks {
        match block {
            DocBlock::Title(text) => body.push_str(&styled_para("Title", text)),
            DocBlock::Subtitle(text) => body.push_str(&styled_para("Subtitle", text)),
            DocBlock::Byline(text) => body.push_str(&styled_para("Byline", text)),
            DocBlock::Heading { text, level } => {
                let style = if *level <= 1 { "Heading1" } else { "Heading2" };
                body.push_str(&styled_para(style, text));
            }
            DocBlock::Paragraph(text) => body.push_str(&plain_para(text)),
            DocBlock::Bullet(text) => body.push_str(&bullet_para(text)),
            DocBlock::TocEntry { text, level } => body.push_str(&toc_para(text, *level)),
            DocBlock::Table(table) => body.push_str(&table_xml(table, palette)),
            DocBlock::PageBreak => {
                body.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#)
            }
            DocBlock::Logo => {
                if let (Some(rid), Some(logo)) = (logo_rid, &model.logo) {
                    body.push_str(&logo_para(logo, rid));
                }
            }
        }
    }
    // US Letter with one-inch margins.
    let _ = write!(
        body,
        r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#,
        m = TWIPS_PER_INCH
    );
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><w:body>{body}</w:body></w:document>"#
    )
}

fn styled_para(style: &str, text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="{style}"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape_xml(text)
    )
}

fn plain_para(text: &str) -> String {
    format!(
        r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape_xml(text)
    )
}

fn bullet_para(text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:ind w:left="720"/></w:pPr><w:r><w:t xml:space="preserve">{} {}</w:t></w:r></w:p>"#,
        '\u{2022}',
        escape_xml(text)
    )
}

fn toc_para(text: &str, level: u8) -> String {
    let indent = 360 * i64::from(level.max(1));
    format!(
        r#"<w:p><w:pPr><w:ind w:left="{indent}"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape_xml(text)
    )
}

fn logo_para(logo: &MediaImage, rid: &str) -> String {
    let (cx, cy) = logo.fit_emu(
        papermill_types::Emu::from_inches(1.5).raw(),
        papermill_types::Emu::from_inches(1.0).raw(),
    );
    format!(
        r#"<w:p><w:pPr><w:jc w:val="right"/></w:pPr><w:r><w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{cx}" cy="{cy}"/><wp:docPr id="1" name="Logo"/><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic><pic:nvPicPr><pic:cNvPr id="1" name="Logo"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{rid}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#
    )
}

fn table_xml(table: &TableData, palette: &Palette) -> String {
    let columns = table.column_count().max(1);
    let col_width = 9_360 / columns as i64; // printable width of a letter page
    let mut grid = String::new();
    for _ in 0..columns {
        let _ = write!(grid, r#"<w:gridCol w:w="{col_width}"/>"#);
    }

    let mut rows = String::new();
    if !table.headers.is_empty() {
        rows.push_str("<w:tr>");
        let mut headers = table.headers.clone();
        headers.resize(columns, String::new());
        for header in &headers {
            let _ = write!(
                rows,
                r#"<w:tc><w:tcPr><w:shd w:val="clear" w:color="auto" w:fill="{}"/></w:tcPr><w:p><w:r><w:rPr><w:b/><w:color w:val="{}"/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r></w:p></w:tc>"#,
                palette.primary.hex(),
                palette.text_light.hex(),
                escape_xml(header)
            );
        }
        rows.push_str("</w:tr>");
    }
    for row in &table.rows {
        rows.push_str("<w:tr>");
        for i in 0..columns {
            let text = row.get(i).map(|c| c.display()).unwrap_or_default();
            let _ = write!(
                rows,
                r#"<w:tc><w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p></w:tc>"#,
                escape_xml(&text)
            );
        }
        rows.push_str("</w:tr>");
    }

    format!(
        r#"<w:tbl><w:tblPr><w:tblW w:w="5000" w:type="pct"/><w:tblBorders><w:top w:val="single" w:sz="4" w:color="auto"/><w:left w:val="single" w:sz="4" w:color="auto"/><w:bottom w:val="single" w:sz="4" w:color="auto"/><w:right w:val="single" w:sz="4" w:color="auto"/><w:insideH w:val="single" w:sz="4" w:color="auto"/><w:insideV w:val="single" w:sz="4" w:color="auto"/></w:tblBorders></w:tblPr><w:tblGrid>{grid}</w:tblGrid>{rows}</w:tbl>"#
    )
}

/// Style sheet binding the heading tiers to the resolved palette. Sizes are
/// half-points (`w:sz val="56"` is 28pt).
fn styles_xml(palette: &Palette) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/><w:sz w:val="22"/><w:color w:val="{dark}"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:styleId="Normal" w:default="1"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:rPr><w:b/><w:sz w:val="56"/><w:color w:val="{primary}"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Subtitle"><w:name w:val="Subtitle"/><w:basedOn w:val="Normal"/><w:rPr><w:i/><w:sz w:val="28"/><w:color w:val="{secondary}"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Byline"><w:name w:val="Byline"/><w:basedOn w:val="Normal"/><w:rPr><w:sz w:val="22"/><w:color w:val="{dark}"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:pPr><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="32"/><w:color w:val="{primary}"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:pPr><w:spacing w:before="200" w:after="100"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/><w:color w:val="{secondary}"/></w:rPr></w:style></w:styles>"#,
        dark = palette.text_dark.hex(),
        primary = palette.primary.hex(),
        secondary = palette.secondary.hex(),
    )
}
