//! Shared OPC (Open Packaging Conventions) plumbing for the OOXML
//! composers. A finished pptx/docx/xlsx file is a zip container of XML
//! parts plus relationship and content-type indexes; this crate owns the
//! container mechanics so the composers only assemble part XML.

mod media;
mod package;
mod parts;

pub use media::MediaImage;
pub use package::{OoxmlError, PackageWriter};
pub use parts::{core_properties_xml, escape_xml, ContentTypes, Relationships};
