//! Plain text from a `.docx` (Office Open XML) file.

use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::KitError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_docx(path: &Path) -> Result<String, KitError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;

    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    Ok(document_xml_to_text(&xml)?)
}

/// Walks the main document part: `w:t` runs become text, `w:tab` a tab,
/// `w:br`/`w:cr` a newline, and each `w:p` one output line.
pub fn document_xml_to_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" => in_text = in_run,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if in_run => current.push('\t'),
                b"br" | b"cr" if in_run => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>
      <w:r><w:t>Jane Doe</w:t></w:r>
    </w:p>
    <w:p/>
    <w:p>
      <w:r><w:t xml:space="preserve">Skills: </w:t></w:r>
      <w:r><w:t>Rust &amp; SQL</w:t></w:r>
      <w:r><w:tab/><w:t>2019</w:t><w:br/><w:t>2024</w:t></w:r>
    </w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn paragraphs_runs_and_breaks() {
        let text = document_xml_to_text(DOC).unwrap();
        assert_eq!(text, "Jane Doe\n\nSkills: Rust & SQL\t2019\n2024");
    }

    #[test]
    fn tab_stops_in_paragraph_properties_are_ignored() {
        let text = document_xml_to_text(DOC).unwrap();
        assert!(text.starts_with("Jane Doe"));
    }

    #[test]
    fn empty_document_is_empty_text() {
        let xml = r#"<w:document xmlns:w="x"><w:body></w:body></w:document>"#;
        assert_eq!(document_xml_to_text(xml).unwrap(), "");
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(document_xml_to_text("<w:document><w:body></w:document>").is_err());
    }
}
