use crate::error::ComposeError;
use crate::model::{PageElement, PdfModel};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::HashMap;

/// Serialize a placed page model into PDF bytes. Text uses the built-in
/// Helvetica pair (F1 regular, F2 bold) with WinAnsi encoding.
pub fn write_pdf(
    model: &PdfModel,
    title: &str,
    author: Option<&str>,
) -> Result<Vec<u8>, ComposeError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular = doc.add_object(dictionary! {
        "Type" => "Font", "Subtype" => "Type1",
        "BaseFont" => "Helvetica", "Encoding" => "WinAnsiEncoding",
    });
    let bold = doc.add_object(dictionary! {
        "Type" => "Font", "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold", "Encoding" => "WinAnsiEncoding",
    });

    // Decode embedded media into uncompressed RGB image XObjects. An image
    // that fails to decode is dropped; elements referencing it are skipped.
    let mut xobject_names: HashMap<usize, String> = HashMap::new();
    let mut xobjects = Dictionary::new();
    for (i, media) in model.media.iter().enumerate() {
        match image::load_from_memory(&media.bytes) {
            Ok(decoded) => {
                let rgb = decoded.into_rgb8();
                let (width, height) = rgb.dimensions();
                let stream = Stream::new(
                    dictionary! {
                        "Type" => "XObject", "Subtype" => "Image",
                        "Width" => width as i64, "Height" => height as i64,
                        "ColorSpace" => "DeviceRGB", "BitsPerComponent" => 8,
                    },
                    rgb.into_raw(),
                );
                let id = doc.add_object(stream);
                let name = format!("Im{}", i + 1);
                xobjects.set(name.as_bytes(), Object::Reference(id));
                xobject_names.insert(i, name);
            }
            Err(err) => log::warn!("dropping undecodable embedded image: {err}"),
        }
    }

    let mut resources = dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(regular),
            "F2" => Object::Reference(bold),
        },
    };
    if !xobjects.is_empty() {
        resources.set("XObject", Object::Dictionary(xobjects));
    }
    let resources_id = doc.add_object(resources);

    let page_h = model.size.height;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    for page in &model.pages {
        let mut operations = Vec::new();
        for element in &page.elements {
            emit_element(&mut operations, element, page_h, &xobject_names);
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![0.into(), 0.into(), model.size.width.into(), page_h.into()],
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Reference(resources_id),
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut info = dictionary! {
        "Title" => Object::string_literal(title),
        "Producer" => Object::string_literal("papermill"),
    };
    if let Some(author) = author {
        info.set("Author", Object::string_literal(author));
    }
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", Object::Reference(info_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

fn emit_element(
    ops: &mut Vec<Operation>,
    element: &PageElement,
    page_h: f32,
    xobject_names: &HashMap<usize, String>,
) {
    match element {
        PageElement::Rect { x, y, w, h, color } => {
            let [r, g, b] = color.unit_rgb();
            ops.push(Operation::new("q", vec![]));
            ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            ops.push(Operation::new(
                "re",
                vec![(*x).into(), (page_h - y - h).into(), (*w).into(), (*h).into()],
            ));
            ops.push(Operation::new("f", vec![]));
            ops.push(Operation::new("Q", vec![]));
        }
        PageElement::Text { x, y, size, bold, color, text } => {
            let [r, g, b] = color.unit_rgb();
            let font = if *bold { "F2" } else { "F1" };
            // Descend from the top-down y to the text baseline.
            let baseline = page_h - (y + size * 0.8);
            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new("Tf", vec![font.into(), (*size).into()]));
            ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            ops.push(Operation::new("Td", vec![(*x).into(), baseline.into()]));
            ops.push(Operation::new(
                "Tj",
                vec![Object::String(win_ansi_bytes(text), StringFormat::Literal)],
            ));
            ops.push(Operation::new("ET", vec![]));
        }
        PageElement::Image { x, y, w, h, media } => {
            let Some(name) = xobject_names.get(media) else {
                return;
            };
            ops.push(Operation::new("q", vec![]));
            ops.push(Operation::new(
                "cm",
                vec![
                    (*w).into(),
                    0.into(),
                    0.into(),
                    (*h).into(),
                    (*x).into(),
                    (page_h - y - h).into(),
                ],
            ));
            ops.push(Operation::new("Do", vec![name.as_str().into()]));
            ops.push(Operation::new("Q", vec![]));
        }
    }
}

/// Best-effort WinAnsi encoding: Latin-1 passes through, a few common
/// punctuation characters map to their CP-1252 slots, everything else
/// degrades to '?'.
fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{20AC}' => 0x80, // euro
            c if (c as u32) < 0x100 => c as u8,
            _ => b'?',
        })
        .collect()
}
