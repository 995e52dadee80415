use std::fmt::Write as _;

/// Escape text for XML attribute and element content.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Builder for a `.rels` relationship part.
#[derive(Debug, Default)]
pub struct Relationships {
    items: Vec<(String, String, String)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a relationship, returning its generated id (`rId1`, ...).
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.items.len() + 1);
        self.items
            .push((id.clone(), rel_type.to_string(), target.to_string()));
        id
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_xml(&self) -> String {
        let mut rels = String::new();
        for (id, rel_type, target) in &self.items {
            let _ = write!(
                rels,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(id),
                escape_xml(rel_type),
                escape_xml(target)
            );
        }
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
        )
    }
}

/// Builder for the package-level `[Content_Types].xml` part.
#[derive(Debug, Default)]
pub struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Starts with the extensions every OPC package declares.
    pub fn new() -> Self {
        let mut ct = Self {
            defaults: Vec::new(),
            overrides: Vec::new(),
        };
        ct.default("rels", "application/vnd.openxmlformats-package.relationships+xml");
        ct.default("xml", "application/xml");
        ct
    }

    pub fn default(&mut self, extension: &str, content_type: &str) -> &mut Self {
        self.defaults
            .push((extension.to_string(), content_type.to_string()));
        self
    }

    /// `part_name` must carry its leading slash (`/ppt/presentation.xml`).
    pub fn r#override(&mut self, part_name: &str, content_type: &str) -> &mut Self {
        self.overrides
            .push((part_name.to_string(), content_type.to_string()));
        self
    }

    pub fn to_xml(&self) -> String {
        let mut body = String::new();
        for (ext, ct) in &self.defaults {
            let _ = write!(
                body,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(ct)
            );
        }
        for (part, ct) in &self.overrides {
            let _ = write!(
                body,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part),
                escape_xml(ct)
            );
        }
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">{body}</Types>"#
        )
    }
}

/// The `docProps/core.xml` part shared by all three OOXML formats. The
/// creation timestamp makes repeated generations byte-distinct while the
/// document content stays structurally identical.
pub fn core_properties_xml(title: &str, author: Option<&str>) -> String {
    let created = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let creator = escape_xml(author.unwrap_or("papermill"));
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{}</dc:title><dc:creator>{creator}</dc:creator><cp:lastModifiedBy>{creator}</cp:lastModifiedBy><dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{created}</dcterms:modified></cp:coreProperties>"#,
        escape_xml(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_properties_carry_title_and_creator() {
        let xml = core_properties_xml("Q3 <Review>", Some("Ops"));
        assert!(xml.contains("<dc:title>Q3 &lt;Review&gt;</dc:title>"));
        assert!(xml.contains("<dc:creator>Ops</dc:creator>"));
        assert!(xml.contains("dcterms:created"));
    }

    #[test]
    fn escapes_all_reserved_characters() {
        assert_eq!(
            escape_xml(r#"<a & "b"> 'c'"#),
            "&lt;a &amp; &quot;b&quot;&gt; &apos;c&apos;"
        );
    }

    #[test]
    fn relationship_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add("t1", "a.xml"), "rId1");
        assert_eq!(rels.add("t2", "b.xml"), "rId2");
        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="b.xml""#));
    }

    #[test]
    fn content_types_carry_defaults_and_overrides() {
        let mut ct = ContentTypes::new();
        ct.default("png", "image/png");
        ct.r#override("/x/part.xml", "application/test+xml");
        let xml = ct.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/x/part.xml""#));
    }
}
