//! OPC package writing: PPTX parts in a ZIP archive plus the generated
//! `[Content_Types].xml`.

use crate::error::RenderError;
use crate::xml::escape_xml;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Builder for an Open Packaging Conventions archive.
///
/// Parts added through [`add_part`](Self::add_part) are recorded as content
/// type overrides; relationship files go through
/// [`add_rels`](Self::add_rels), which the default `.rels` extension covers.
pub struct PackageWriter {
    zip_writer: ZipWriter<std::io::Cursor<Vec<u8>>>,
    overrides: Vec<OverrideEntry>,
}

#[derive(Debug, Clone)]
struct OverrideEntry {
    part_name: String,
    content_type: String,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(std::io::Cursor::new(Vec::new())),
            overrides: Vec::new(),
        }
    }

    /// Add a content part and record its content type override.
    pub fn add_part(
        &mut self,
        path: &str,
        content_type: &str,
        content: &str,
    ) -> Result<(), RenderError> {
        self.overrides.push(OverrideEntry {
            part_name: format!("/{}", path),
            content_type: content_type.to_string(),
        });
        self.write_entry(path, content)
    }

    /// Add a relationships part (`*.rels`), typed by its extension default.
    pub fn add_rels(&mut self, path: &str, content: &str) -> Result<(), RenderError> {
        self.write_entry(path, content)
    }

    fn write_entry(&mut self, path: &str, content: &str) -> Result<(), RenderError> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content.as_bytes())?;
        Ok(())
    }

    fn generate_content_types(&self) -> String {
        let mut types = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
"#,
        );
        for entry in &self.overrides {
            types.push_str(&format!(
                "<Override PartName=\"{}\" ContentType=\"{}\"/>\n",
                escape_xml(&entry.part_name),
                escape_xml(&entry.content_type)
            ));
        }
        types.push_str("</Types>\n");
        types
    }

    /// Write `[Content_Types].xml`, finalize the archive and return its bytes.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let content_types = self.generate_content_types();
        self.write_entry("[Content_Types].xml", &content_types)?;
        let cursor = self.zip_writer.finish()?;
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
    fn package_lists_added_parts_and_overrides() {
        let mut writer = PackageWriter::new();
        writer
            .add_part("ppt/presentation.xml", "application/x-test", "<p/>")
            .unwrap();
        writer.add_rels("_rels/.rels", "<Relationships/>").unwrap();
        let bytes = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"ppt/presentation.xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"[Content_Types].xml".to_string()));

        let mut types = String::new();
        archive
            .by_name("[Content_Types].xml")
            .unwrap()
            .read_to_string(&mut types)
            .unwrap();
        assert!(types.contains(r#"PartName="/ppt/presentation.xml""#));
        assert!(types.contains(r#"ContentType="application/x-test""#));
    }
}
