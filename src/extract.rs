//! Plain-text extraction from uploaded documents.
//!
//! Supports PDF (via pdf-extract), DOCX (zip + word/document.xml), and
//! plain text files. Unsupported extensions yield empty text rather than
//! an error; malformed-but-openable documents log a warning and also
//! yield empty text. Only real I/O failures (missing file, permission
//! denied) escalate to the caller.

use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use thiserror::Error;
use tracing::warn;
use zip::ZipArchive;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text extractor dispatching on file extension.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract plain text from a PDF, DOCX, or TXT file.
    ///
    /// Returns an empty string for any other extension.
    pub fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => self.extract_pdf(path),
            "docx" => self.extract_docx(path),
            "txt" => self.extract_txt(path),
            _ => Ok(String::new()),
        }
    }

    /// Whole-document PDF text, pages in order.
    fn extract_pdf(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        match pdf_extract::extract_text_from_mem(&bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                warn!("PDF extraction failed for {}: {}", path.display(), err);
                Ok(String::new())
            }
        }
    }

    /// Paragraph text from word/document.xml, one newline per paragraph.
    fn extract_docx(&self, path: &Path) -> Result<String, ExtractionError> {
        let file = std::fs::File::open(path)?;

        let mut archive = match ZipArchive::new(file) {
            Ok(archive) => archive,
            Err(err) => {
                warn!("Not a valid DOCX archive {}: {}", path.display(), err);
                return Ok(String::new());
            }
        };

        let mut xml = String::new();
        match archive.by_name("word/document.xml") {
            Ok(mut entry) => {
                if let Err(err) = entry.read_to_string(&mut xml) {
                    warn!("Unreadable DOCX XML in {}: {}", path.display(), err);
                    return Ok(String::new());
                }
            }
            Err(err) => {
                warn!("Missing word/document.xml in {}: {}", path.display(), err);
                return Ok(String::new());
            }
        }

        Ok(docx_paragraphs(&xml).unwrap_or_else(|err| {
            warn!("DOCX XML parse failed for {}: {}", path.display(), err);
            String::new()
        }))
    }

    /// Lenient text read; undecodable bytes are replaced, not fatal.
    fn extract_txt(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Walk WordprocessingML and collect paragraph text in document order.
fn docx_paragraphs(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = XmlReader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();
    let mut output = String::new();
    let mut in_text_node = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"w:t" => in_text_node = true,
                b"w:tab" => output.push('\t'),
                b"w:br" => output.push('\n'),
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                b"w:tab" => output.push('\t'),
                b"w:br" => output.push('\n'),
                _ => {}
            },
            Event::Text(e) => {
                if in_text_node {
                    output.push_str(&e.unescape()?);
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"w:t" => in_text_node = false,
                b"w:p" => output.push('\n'),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    #[test]
    fn txt_returns_decoded_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello\nworld").unwrap();

        let text = TextExtractor::new().extract(&path).unwrap();
        assert_eq!(text, "hello\nworld");
    }

    #[test]
    fn txt_drops_invalid_utf8_instead_of_failing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbled.txt");
        std::fs::write(&path, b"ok \xff\xfe bytes").unwrap();

        let text = TextExtractor::new().extract(&path).unwrap();
        assert!(text.starts_with("ok "));
        assert!(text.ends_with(" bytes"));
    }

    #[test]
    fn unsupported_extension_yields_empty_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.xyz");
        std::fs::write(&path, "content").unwrap();

        let text = TextExtractor::new().extract(&path).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let result = TextExtractor::new().extract(Path::new("/nonexistent/file.txt"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }

    /// Assemble a minimal two-page PDF with one text run per page,
    /// computing the xref offsets so standard parsers accept it.
    fn two_page_pdf(first: &str, second: &str) -> Vec<u8> {
        fn page(contents_id: usize) -> String {
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 7 0 R >> >> /Contents {} 0 R >>",
                contents_id
            )
        }
        fn content(text: &str) -> String {
            let stream = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
            format!("<< /Length {} >>\nstream\n{}\nendstream", stream.len(), stream)
        }

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >>".to_string(),
            page(5),
            page(6),
            content(first),
            content(second),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_at = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_at
            )
            .as_bytes(),
        );
        pdf
    }

    #[test]
    fn pdf_concatenates_page_texts_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, two_page_pdf("alpha page one", "omega page two")).unwrap();

        let text = TextExtractor::new().extract(&path).unwrap();
        let first = text.find("alpha page one").expect("first page text");
        let second = text.find("omega page two").expect("second page text");
        assert!(first < second);
    }

    #[test]
    fn malformed_pdf_yields_empty_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not actually a pdf").unwrap();

        let text = TextExtractor::new().extract(&path).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn docx_concatenates_paragraphs_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.docx");
        let file = std::fs::File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);

        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>
    <w:p><w:r><w:t>Second paragraph</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        zip.start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();

        let text = TextExtractor::new().extract(&path).unwrap();
        assert_eq!(text, "First paragraph\nSecond paragraph\n");
    }

    #[test]
    fn docx_without_document_xml_yields_empty_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.docx");
        let file = std::fs::File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<x/>").unwrap();
        zip.finish().unwrap();

        let text = TextExtractor::new().extract(&path).unwrap();
        assert_eq!(text, "");
    }
}
