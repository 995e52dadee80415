use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Error, Debug)]
pub enum OoxmlError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes an OPC package into an in-memory byte buffer, one part at a
/// time. Part paths use forward slashes without a leading slash
/// (`ppt/slides/slide1.xml`).
pub struct PackageWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    /// Add an XML part.
    pub fn part(&mut self, path: &str, xml: &str) -> Result<(), OoxmlError> {
        self.raw_part(path, xml.as_bytes())
    }

    /// Add a binary part (embedded media).
    pub fn raw_part(&mut self, path: &str, bytes: &[u8]) -> Result<(), OoxmlError> {
        self.zip.start_file(path, self.options)?;
        self.zip.write_all(bytes)?;
        Ok(())
    }

    /// Close the container and return the finished package bytes.
    pub fn finish(mut self) -> Result<Vec<u8>, OoxmlError> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn written_parts_round_trip_through_the_container() {
        let mut package = PackageWriter::new();
        package.part("a/b.xml", "<x/>").unwrap();
        package.raw_part("media/img.png", &[1, 2, 3]).unwrap();
        let bytes = package.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut xml = String::new();
        archive
            .by_name("a/b.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        assert_eq!(xml, "<x/>");

        let mut raw = Vec::new();
        archive
            .by_name("media/img.png")
            .unwrap()
            .read_to_end(&mut raw)
            .unwrap();
        assert_eq!(raw, vec![1, 2, 3]);
    }
}
