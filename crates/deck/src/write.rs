use crate::error::ComposeError;
use crate::layout::{CANVAS_H, CANVAS_W};
use crate::model::{Align, Deck, Para, Shape, Slide};
use papermill_content::TableData;
use papermill_ooxml::{
    core_properties_xml, escape_xml, ContentTypes, PackageWriter, Relationships,
};
use papermill_style::Palette;
use papermill_types::{Color, Rect};
use std::fmt::Write as _;

const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Serialize a composed deck into pptx bytes.
pub fn write_pptx(
    deck: &Deck,
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
            "/ppt/presentation.xml",
            "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
        )
        .r#override(
            "/ppt/slideMasters/slideMaster1.xml",
            "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml",
        )
        .r#override(
            "/ppt/slideLayouts/slideLayout1.xml",
            "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml",
        )
        .r#override(
            "/ppt/theme/theme1.xml",
            "application/vnd.openxmlformats-officedocument.theme+xml",
        )
        .r#override(
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        );
    for i in 1..=deck.slides.len() {
        content_types.r#override(
            &format!("/ppt/slides/slide{i}.xml"),
            "application/vnd.openxmlformats-officedocument.presentationml.slide+xml",
        );
    }
    package.part("[Content_Types].xml", &content_types.to_xml())?;

    let mut root_rels = Relationships::new();
    root_rels.add(
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
        "ppt/presentation.xml",
    );
    root_rels.add(
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
        "docProps/core.xml",
    );
    package.part("_rels/.rels", &root_rels.to_xml())?;
    package.part("docProps/core.xml", &core_properties_xml(title, author))?;

    // Presentation part and its relationships. rId1 is the master; each
    // slide follows in deck order.
    let mut pres_rels = Relationships::new();
    let master_rid = pres_rels.add(REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    let mut slide_id_entries = String::new();
    for i in 1..=deck.slides.len() {
        let rid = pres_rels.add(REL_SLIDE, &format!("slides/slide{i}.xml"));
        let _ = write!(
            slide_id_entries,
            r#"<p:sldId id="{}" r:id="{rid}"/>"#,
            255 + i
        );
    }
    package.part("ppt/_rels/presentation.xml.rels", &pres_rels.to_xml())?;
    package.part(
        "ppt/presentation.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{master_rid}"/></p:sldMasterIdLst><p:sldIdLst>{slide_id_entries}</p:sldIdLst><p:sldSz cx="{}" cy="{}"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#,
            CANVAS_W.raw(),
            CANVAS_H.raw()
        ),
    )?;

    package.part("ppt/slideMasters/slideMaster1.xml", &slide_master_xml())?;
    let mut master_rels = Relationships::new();
    master_rels.add(REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    master_rels.add(REL_THEME, "../theme/theme1.xml");
    package.part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &master_rels.to_xml(),
    )?;

    package.part("ppt/slideLayouts/slideLayout1.xml", &slide_layout_xml())?;
    let mut layout_rels = Relationships::new();
    layout_rels.add(REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    package.part(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &layout_rels.to_xml(),
    )?;

    package.part("ppt/theme/theme1.xml", &theme_xml(palette))?;

    for (i, media) in deck.media.iter().enumerate() {
        package.raw_part(
            &format!("ppt/media/image{}.{}", i + 1, media.extension),
            &media.bytes,
        )?;
    }

    for (i, slide) in deck.slides.iter().enumerate() {
        let mut rels = Relationships::new();
        rels.add(REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        let xml = slide_xml(slide, deck, palette, &mut rels);
        package.part(&format!("ppt/slides/slide{}.xml", i + 1), &xml)?;
        package.part(
            &format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
            &rels.to_xml(),
        )?;
    }

    Ok(package.finish()?)
}

fn slide_xml(slide: &Slide, deck: &Deck, palette: &Palette, rels: &mut Relationships) -> String {
    let mut shapes = String::new();
    // Shape ids start at 2; id 1 is the group shape itself.
    for (i, shape) in slide.shapes.iter().enumerate() {
        let id = i + 2;
        match shape {
            Shape::Text { frame, paras, fill, middle } => {
                shapes.push_str(&text_shape_xml(id, *frame, paras, *fill, *middle));
            }
            Shape::Block { frame, fill } => {
                shapes.push_str(&block_shape_xml(id, *frame, *fill));
            }
            Shape::Table { frame, data } => {
                shapes.push_str(&table_shape_xml(id, *frame, data, palette));
            }
            Shape::Picture { frame, media } => {
                let image = &deck.media[*media];
                let rid = rels.add(
                    REL_IMAGE,
                    &format!("../media/image{}.{}", media + 1, image.extension),
                );
                shapes.push_str(&picture_shape_xml(id, *frame, &rid));
            }
        }
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#
    )
}

fn xfrm(frame: Rect) -> String {
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        frame.x.raw(),
        frame.y.raw(),
        frame.w.raw(),
        frame.h.raw()
    )
}

fn solid_fill(color: Color) -> String {
    format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.hex())
}

fn para_xml(para: &Para) -> String {
    let algn = match para.align {
        Align::Left => "",
        Align::Center => r#" algn="ctr""#,
    };
    let bold = if para.bold { r#" b="1""# } else { "" };
    format!(
        r#"<a:p><a:pPr{algn}/><a:r><a:rPr lang="en-US" sz="{}"{bold} dirty="0">{}</a:rPr><a:t>{}</a:t></a:r></a:p>"#,
        para.size_pt * 100,
        solid_fill(para.color),
        escape_xml(&para.text)
    )
}

fn text_shape_xml(id: usize, frame: Rect, paras: &[Para], fill: Option<Color>, middle: bool) -> String {
    let fill_xml = fill.map(solid_fill).unwrap_or_else(|| "<a:noFill/>".to_string());
    let anchor = if middle { r#" anchor="ctr""# } else { "" };
    let body: String = paras.iter().map(para_xml).collect();
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>{fill_xml}</p:spPr><p:txBody><a:bodyPr wrap="square"{anchor}><a:normAutofit/></a:bodyPr><a:lstStyle/>{body}</p:txBody></p:sp>"#,
        xfrm(frame)
    )
}

fn block_shape_xml(id: usize, frame: Rect, fill: Color) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Rectangle {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>{}<a:ln><a:noFill/></a:ln></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        xfrm(frame),
        solid_fill(fill)
    )
}

fn picture_shape_xml(id: usize, frame: Rect, rid: &str) -> String {
    format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rid}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
        xfrm(frame)
    )
}

fn table_shape_xml(id: usize, frame: Rect, data: &TableData, palette: &Palette) -> String {
    // Palette styling lives in the cell runs and fills written below, so
    // the table carries no style id.
    let columns = data.column_count().max(1);
    let col_width = (frame.w.raw() / columns as i64).max(1);
    let mut grid = String::new();
    for _ in 0..columns {
        let _ = write!(grid, r#"<a:gridCol w="{col_width}"/>"#);
    }

    let mut rows_xml = String::new();
    if !data.headers.is_empty() {
        rows_xml.push_str(&table_row_xml(&header_cells(data, columns), Some(palette)));
    }
    for row in &data.rows {
        let mut cells: Vec<String> = row.iter().map(|c| c.display()).collect();
        cells.resize(columns, String::new());
        rows_xml.push_str(&table_row_xml(&cells, None));
    }

    format!(
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="{id}" name="Table {id}"/><p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr><p:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></p:xfrm><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl><a:tblPr firstRow="1" bandRow="1"/><a:tblGrid>{grid}</a:tblGrid>{rows_xml}</a:tbl></a:graphicData></a:graphic></p:graphicFrame>"#,
        frame.x.raw(),
        frame.y.raw(),
        frame.w.raw(),
        frame.h.raw()
    )
}

fn header_cells(data: &TableData, columns: usize) -> Vec<String> {
    let mut cells = data.headers.clone();
    cells.resize(columns, String::new());
    cells
}

/// A header row gets a bold run in the light text color over a primary
/// fill; data rows stay unfilled.
fn table_row_xml(cells: &[String], header: Option<&Palette>) -> String {
    let mut row = String::from(r#"<a:tr h="370840">"#);
    for cell in cells {
        let (rpr, tc_pr) = match header {
            Some(palette) => (
                format!(r#" b="1">{}</a:rPr>"#, solid_fill(palette.text_light)),
                format!("<a:tcPr>{}</a:tcPr>", solid_fill(palette.primary)),
            ),
            None => ("></a:rPr>".to_string(), "<a:tcPr/>".to_string()),
        };
        let _ = write!(
            row,
            r#"<a:tc><a:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US" sz="1400"{rpr}<a:t>{}</a:t></a:r></a:p></a:txBody>{tc_pr}</a:tc>"#,
            escape_xml(cell)
        );
    }
    row.push_str("</a:tr>");
    row
}

fn slide_master_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#.to_string()
}

fn slide_layout_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1"><p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#.to_string()
}

/// Office theme carrying the resolved palette: primary/secondary/accent map
/// onto accent1..3 so theme-aware consumers pick up the deck's colors.
fn theme_xml(palette: &Palette) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Papermill"><a:themeElements><a:clrScheme name="Papermill"><a:dk1><a:srgbClr val="{dark}"/></a:dk1><a:lt1><a:srgbClr val="{light}"/></a:lt1><a:dk2><a:srgbClr val="{dark}"/></a:dk2><a:lt2><a:srgbClr val="{light}"/></a:lt2><a:accent1><a:srgbClr val="{primary}"/></a:accent1><a:accent2><a:srgbClr val="{secondary}"/></a:accent2><a:accent3><a:srgbClr val="{accent}"/></a:accent3><a:accent4><a:srgbClr val="{secondary}"/></a:accent4><a:accent5><a:srgbClr val="{accent}"/></a:accent5><a:accent6><a:srgbClr val="{primary}"/></a:accent6><a:hlink><a:srgbClr val="{secondary}"/></a:hlink><a:folHlink><a:srgbClr val="{accent}"/></a:folHlink></a:clrScheme><a:fontScheme name="Papermill"><a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#,
        dark = palette.text_dark.hex(),
        light = palette.text_light.hex(),
        primary = palette.primary.hex(),
        secondary = palette.secondary.hex(),
        accent = palette.accent.hex(),
    )
}
