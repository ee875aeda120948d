use async_trait::async_trait;
use coursekit::KitError;
use coursekit::cv::{CvAnalyzer, analyze_file, extract_text};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use zip::write::SimpleFileOptions;

fn unique_path(prefix: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "coursekit-{prefix}-{}-{}.{ext}",
        std::process::id(),
        nanos
    ));
    temp_path
}

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Senior Rust Engineer</w:t></w:r><w:r><w:tab/><w:t>2019-2024</w:t></w:r></w:p>
    <w:p><w:r><w:t>Lecturer &amp; mentor</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

fn write_docx(path: &Path, parts: &[(&str, &str)]) {
    let file = std::fs::File::create(path).expect("create docx");
    let mut zip = zip::ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, content) in parts {
        zip.start_file(*name, options).expect("start entry");
        zip.write_all(content.as_bytes()).expect("write entry");
    }
    zip.finish().expect("finish docx");
}

struct RecordingAnalyzer {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl CvAnalyzer for RecordingAnalyzer {
    async fn analyze(&self, cv_text: &str) -> Result<String, KitError> {
        self.seen
            .lock()
            .expect("seen lock")
            .push(cv_text.to_string());
        Ok(format!("{} chars reviewed", cv_text.chars().count()))
    }
}

#[tokio::test]
async fn docx_text_is_extracted_by_paragraph() {
    let path = unique_path("cv-docx", "docx");
    write_docx(
        &path,
        &[
            ("[Content_Types].xml", "<Types/>"),
            ("word/document.xml", DOCUMENT_XML),
        ],
    );

    let text = extract_text(&path).await.expect("extract docx");
    assert_eq!(
        text,
        "Jane Doe\nSenior Rust Engineer\t2019-2024\nLecturer & mentor"
    );

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn uppercase_extension_is_accepted() {
    let path = unique_path("cv-upper", "DOCX");
    write_docx(&path, &[("word/document.xml", DOCUMENT_XML)]);

    let text = extract_text(&path).await.expect("extract DOCX");
    assert!(text.starts_with("Jane Doe"));

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn docx_without_document_part_is_a_zip_error() {
    let path = unique_path("cv-empty-docx", "docx");
    write_docx(&path, &[("word/styles.xml", "<w:styles/>")]);

    let err = extract_text(&path).await.expect_err("no document.xml");
    assert!(matches!(err, KitError::ZipError(_)), "got {err:?}");

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn missing_and_unsupported_files_are_rejected() {
    let missing = unique_path("cv-missing", "pdf");
    let err = extract_text(&missing).await.expect_err("missing file");
    assert!(matches!(err, KitError::FileNotFound(ref p) if p == &missing), "got {err:?}");

    let txt = unique_path("cv-text", "txt");
    tokio::fs::write(&txt, "plain text cv").await.expect("write txt");
    let err = extract_text(&txt).await.expect_err("txt is unsupported");
    assert!(matches!(err, KitError::UnsupportedFormat(_)), "got {err:?}");
    let _ = tokio::fs::remove_file(&txt).await;
}

#[tokio::test]
async fn garbage_pdf_is_an_error_not_a_crash() {
    let path = unique_path("cv-garbage", "pdf");
    tokio::fs::write(&path, b"this is not a pdf at all")
        .await
        .expect("write garbage");

    let err = extract_text(&path).await.expect_err("garbage pdf");
    assert!(
        matches!(err, KitError::PdfError(_) | KitError::UnexpectedError(_)),
        "got {err:?}"
    );

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn analyze_file_feeds_extracted_text_to_the_analyzer() {
    let path = unique_path("cv-analyze", "docx");
    write_docx(&path, &[("word/document.xml", DOCUMENT_XML)]);

    let analyzer = RecordingAnalyzer {
        seen: Mutex::new(Vec::new()),
    };
    let report = analyze_file(&analyzer, &path).await.expect("analyze");

    let seen = analyzer.seen.lock().expect("seen lock").clone();
    assert_eq!(seen, [report.text.clone()]);
    assert_eq!(
        report.analysis,
        format!("{} chars reviewed", report.text.chars().count())
    );

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn analyzer_is_not_called_when_extraction_fails() {
    let analyzer = RecordingAnalyzer {
        seen: Mutex::new(Vec::new()),
    };
    let err = analyze_file(&analyzer, Path::new("resume.odt"))
        .await
        .expect_err("unsupported");
    // Existence is checked first.
    assert!(matches!(err, KitError::FileNotFound(_)), "got {err:?}");
    assert!(analyzer.seen.lock().expect("seen lock").is_empty());
}
