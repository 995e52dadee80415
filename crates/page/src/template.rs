use crate::error::ComposeError;
use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;

/// Copies objects between two documents, remapping ids. Page trees are
/// cyclic (Page -> Parent -> Kids -> Page), so each source id is mapped
/// before its contents are copied.
struct ObjectCopier<'a> {
    source: &'a Document,
    target: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source: &'a Document, target: &'a mut Document) -> Self {
        Self { source, target, id_map: HashMap::new() }
    }

    fn copy_object(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(*target_id);
        }
        // Reserve the target slot first to break reference cycles.
        let new_id = self.target.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let source_obj = self.source.get_object(source_id)?.clone();
        let new_obj = self.remap(source_obj)?;
        match self.target.objects.get_mut(&new_id) {
            Some(slot) => *slot = new_obj,
            None => return Err(lopdf::Error::ObjectNotFound(new_id)),
        }
        Ok(new_id)
    }

    fn remap(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => Ok(Object::Reference(self.copy_object(id)?)),
            Object::Array(items) => Ok(Object::Array(
                items
                    .into_iter()
                    .map(|item| self.remap(item))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.remap(value.clone())?;
                }
                Ok(Object::Dictionary(dict))
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.remap(value.clone())?;
                }
                Ok(Object::Stream(stream))
            }
            other => Ok(other),
        }
    }
}

/// Prepend every page of a template PDF in front of the generated pages.
/// The template's pages and all their dependencies are deep-copied into
/// `target`; the template document itself is discarded.
pub fn prepend_template(target: &mut Document, template: &[u8]) -> Result<(), ComposeError> {
    let source = Document::load_mem(template)?;
    let source_pages = source.get_pages();
    if source_pages.is_empty() {
        return Ok(());
    }

    let mut sorted: Vec<_> = source_pages.into_iter().collect();
    sorted.sort_by_key(|(number, _)| *number);

    let mut copier = ObjectCopier::new(&source, target);
    let mut copied_ids = Vec::new();
    for (_, page_id) in sorted {
        copied_ids.push(copier.copy_object(page_id)?);
    }

    let root_id = target.trailer.get(b"Root")?.as_reference()?;
    let pages_id = target
        .get_object(root_id)?
        .as_dict()?
        .get(b"Pages")?
        .as_reference()?;

    let pages_dict = target.get_object_mut(pages_id)?.as_dict_mut()?;
    let mut kids: Vec<Object> = copied_ids.iter().map(|id| Object::Reference(*id)).collect();
    kids.extend(pages_dict.get(b"Kids")?.as_array()?.clone());
    let count = pages_dict.get(b"Count")?.as_i64()?;
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", count + copied_ids.len() as i64);

    for page_id in copied_ids {
        if let Ok(page_dict) = target.get_object_mut(page_id).and_then(Object::as_dict_mut) {
            page_dict.set("Parent", Object::Reference(pages_id));
        }
    }
    Ok(())
}

/// Re-open finished PDF bytes, prepend the template's pages and
/// re-serialize. Used by callers that only hold bytes on both sides.
pub fn apply_template(bytes: &[u8], template: &[u8]) -> Result<Vec<u8>, ComposeError> {
    let mut doc = Document::load_mem(bytes)?;
    prepend_template(&mut doc, template)?;
    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::A4;
    use crate::model::{PageElement, PdfModel};
    use crate::pdf::write_pdf;
    use papermill_types::Color;

    fn simple_pdf(text: &str) -> Vec<u8> {
        let mut model = PdfModel::new(A4);
        model.pages[0].elements.push(PageElement::Text {
            x: 50.0,
            y: 50.0,
            size: 12.0,
            bold: false,
            color: Color::rgb(0, 0, 0),
            text: text.into(),
        });
        write_pdf(&model, "t", None).unwrap()
    }

    #[test]
    fn template_pages_come_first() {
        let template = simple_pdf("cover");
        let body = simple_pdf("body");
        let mut doc = Document::load_mem(&body).unwrap();
        prepend_template(&mut doc, &template).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        assert!(Document::load_mem(&out).is_ok());
    }

    #[test]
    fn garbage_template_is_an_error() {
        let body = simple_pdf("body");
        let mut doc = Document::load_mem(&body).unwrap();
        assert!(prepend_template(&mut doc, b"not a pdf").is_err());
    }
}
