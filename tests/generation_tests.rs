//! End-to-end tests: JSON request in, retrievable office file out.

use papermill::{
    AssetCategory, AssetStore, DocumentRequest, DocumentService, FileStore, GenerationError,
    InMemoryAssetStore, PageDocumentRequest, PresentationRequest, SpreadsheetRequest,
};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

// Smallest valid 1x1 PNG (white pixel).
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
    0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
    0xFF, 0xFF, 0x3F, 0x00, 0x05, 0xFE, 0x02, 0xFE, 0xDC, 0xCC, 0x59, 0xE7, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

fn service(dir: &TempDir) -> (DocumentService, Arc<InMemoryAssetStore>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let assets = Arc::new(InMemoryAssetStore::new());
    let files = Arc::new(FileStore::new(dir.path(), Duration::from_secs(3600)).unwrap());
    (
        DocumentService::with_stores(assets.clone(), files),
        assets,
    )
}

fn zip_entries(bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.to_vec())).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn zip_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.to_vec())).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

fn presentation_request() -> PresentationRequest {
    serde_json::from_value(serde_json::json!({
        "title": "Quarterly Review",
        "subtitle": "Q3 results",
        "author": "Operations",
        "include_closing_slide": true,
        "slides": [
            {"title": "Highlights", "bullets": ["Revenue up", "Churn down"]},
            {"title": "Numbers", "layout": "stats", "stats": [
                {"value": "42%", "label": "Growth"},
                {"value": "9", "label": "New markets"}
            ]}
        ]
    }))
    .unwrap()
}

#[test]
fn presentation_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let file = service.create_presentation(&presentation_request()).unwrap();
    assert!(file.filename.starts_with("presentation_"));
    assert!(file.filename.ends_with(".pptx"));

    let bytes = std::fs::read(&file.path).unwrap();
    let entries = zip_entries(&bytes);
    assert!(entries.contains(&"ppt/presentation.xml".to_string()));
    // title + 2 content slides + closing slide
    let slides = entries
        .iter()
        .filter(|e| e.starts_with("ppt/slides/slide") && e.ends_with(".xml"))
        .count();
    assert_eq!(slides, 4);
}

#[test]
fn generated_files_are_listed_and_retrievable() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let file = service.create_presentation(&presentation_request()).unwrap();
    let reopened = service.open_file(&file.filename).unwrap();
    assert_eq!(reopened.size, file.size);

    let listing = service.list_files().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].filename, file.filename);
}

#[test]
fn path_traversal_is_rejected_on_open() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    assert!(service.open_file("../etc/passwd").is_err());
    assert!(service.open_file("a/b.pptx").is_err());
}

#[test]
fn empty_title_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let request: PresentationRequest =
        serde_json::from_value(serde_json::json!({"title": "  ", "slides": []})).unwrap();
    let err = service.create_presentation(&request).unwrap_err();
    assert!(matches!(err, GenerationError::Validation(_)));
    assert!(service.list_files().unwrap().is_empty());
}

#[test]
fn missing_logo_and_image_do_not_fail_generation() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let request: PresentationRequest = serde_json::from_value(serde_json::json!({
        "title": "Resilient",
        "logo": "no-such-logo",
        "slides": [{"title": "Pic", "image": "no-such-image"}]
    }))
    .unwrap();
    let file = service.create_presentation(&request).unwrap();

    let bytes = std::fs::read(&file.path).unwrap();
    assert!(!zip_entries(&bytes).iter().any(|e| e.starts_with("ppt/media/")));
}

#[test]
fn uploaded_logo_lands_in_the_package() {
    let dir = TempDir::new().unwrap();
    let (service, assets) = service(&dir);
    assets
        .put(AssetCategory::Logo, "acme.png", TINY_PNG.to_vec())
        .unwrap();

    let request: PresentationRequest = serde_json::from_value(serde_json::json!({
        "title": "Branded",
        "logo": "acme",
        "slides": [{"title": "One", "body": "text"}]
    }))
    .unwrap();
    let file = service.create_presentation(&request).unwrap();

    let bytes = std::fs::read(&file.path).unwrap();
    assert!(zip_entries(&bytes)
        .iter()
        .any(|e| e.starts_with("ppt/media/image") && e.ends_with(".png")));
}

#[test]
fn document_skeleton_from_minimal_request() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let request: DocumentRequest =
        serde_json::from_value(serde_json::json!({"title": "Memo"})).unwrap();
    let file = service.create_document(&request).unwrap();
    assert!(file.filename.ends_with(".docx"));

    let bytes = std::fs::read(&file.path).unwrap();
    let document = zip_part(&bytes, "word/document.xml");
    assert!(document.contains("Memo"));
}

#[test]
fn spreadsheet_headers_and_rows_survive_serialization() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let request: SpreadsheetRequest = serde_json::from_value(serde_json::json!({
        "title": "Ledger",
        "sheets": [{
            "name": "Data",
            "headers": ["Region", "Total"],
            "rows": [["North", 120], ["South", 80]]
        }]
    }))
    .unwrap();
    let file = service.create_spreadsheet(&request).unwrap();

    let bytes = std::fs::read(&file.path).unwrap();
    let sheet = zip_part(&bytes, "xl/worksheets/sheet1.xml");
    for text in ["Region", "Total", "North", "South"] {
        assert!(sheet.contains(text), "missing {text}");
    }
    assert!(sheet.contains(">120<"));
}

#[test]
fn malformed_chart_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let request: SpreadsheetRequest = serde_json::from_value(serde_json::json!({
        "title": "Charts",
        "sheets": [{
            "name": "Data",
            "headers": ["Month", "Sales"],
            "rows": [["Jan", 10], ["Feb", 20]],
            "charts": [{"chart_type": "bar", "data_range": "A1:B2:C3"}]
        }]
    }))
    .unwrap();
    let file = service.create_spreadsheet(&request).unwrap();

    let bytes = std::fs::read(&file.path).unwrap();
    let entries = zip_entries(&bytes);
    assert!(entries.contains(&"xl/worksheets/sheet1.xml".to_string()));
    assert!(!entries.iter().any(|e| e.starts_with("xl/charts/")));
}

#[test]
fn well_formed_chart_produces_a_chart_part() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let request: SpreadsheetRequest = serde_json::from_value(serde_json::json!({
        "title": "Charts",
        "sheets": [{
            "name": "Data",
            "headers": ["Month", "Sales"],
            "rows": [["Jan", 10], ["Feb", 20]],
            "charts": [{"chart_type": "bar", "data_range": "A2:B3", "title": "Sales by month"}]
        }]
    }))
    .unwrap();
    let file = service.create_spreadsheet(&request).unwrap();

    let bytes = std::fs::read(&file.path).unwrap();
    let chart = zip_part(&bytes, "xl/charts/chart1.xml");
    assert!(chart.contains("barChart"));
    assert!(chart.contains("'Data'!$B$2:$B$3"));
}

#[test]
fn page_breaks_yield_multiple_pdf_pages() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let request: PageDocumentRequest = serde_json::from_value(serde_json::json!({
        "title": "Report",
        "blocks": [
            {"type": "paragraph", "text": "First page body."},
            {"type": "page_break"},
            {"type": "paragraph", "text": "Second page body."}
        ]
    }))
    .unwrap();
    let file = service.create_page_document(&request).unwrap();
    assert!(file.filename.ends_with(".pdf"));

    let bytes = std::fs::read(&file.path).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn pdf_template_pages_are_prepended() {
    let dir = TempDir::new().unwrap();
    let (service, assets) = service(&dir);

    // Use a generated single-page PDF as the letterhead template.
    let cover: PageDocumentRequest = serde_json::from_value(serde_json::json!({
        "title": "Letterhead",
        "blocks": [{"type": "paragraph", "text": "Company letterhead."}]
    }))
    .unwrap();
    let cover_file = service.create_page_document(&cover).unwrap();
    let cover_bytes = std::fs::read(&cover_file.path).unwrap();
    assets
        .put(
            AssetCategory::Template(papermill::DocumentKind::PageDocument),
            "letterhead.pdf",
            cover_bytes,
        )
        .unwrap();

    let request: PageDocumentRequest = serde_json::from_value(serde_json::json!({
        "title": "Report",
        "template": "letterhead",
        "blocks": [{"type": "paragraph", "text": "Body."}]
    }))
    .unwrap();
    let file = service.create_page_document(&request).unwrap();

    let bytes = std::fs::read(&file.path).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn unusable_pdf_template_is_ignored() {
    let dir = TempDir::new().unwrap();
    let (service, assets) = service(&dir);
    assets
        .put(
            AssetCategory::Template(papermill::DocumentKind::PageDocument),
            "broken.pdf",
            b"not a pdf".to_vec(),
        )
        .unwrap();

    let request: PageDocumentRequest = serde_json::from_value(serde_json::json!({
        "title": "Report",
        "template": "broken",
        "blocks": [{"type": "paragraph", "text": "Body."}]
    }))
    .unwrap();
    let file = service.create_page_document(&request).unwrap();

    let bytes = std::fs::read(&file.path).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn regeneration_differs_in_bytes_but_not_structure() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);
    let request = presentation_request();

    let first = service.create_presentation(&request).unwrap();
    std::thread::sleep(Duration::from_millis(1100));
    let second = service.create_presentation(&request).unwrap();
    assert_ne!(first.filename, second.filename);

    let a = std::fs::read(&first.path).unwrap();
    let b = std::fs::read(&second.path).unwrap();
    assert_ne!(a, b);
    assert_eq!(zip_entries(&a), zip_entries(&b));
}

#[test]
fn unknown_palette_falls_back_to_default_styling() {
    let dir = TempDir::new().unwrap();
    let (service, _) = service(&dir);

    let request: PresentationRequest = serde_json::from_value(serde_json::json!({
        "title": "Styled",
        "palette": "no-such-palette",
        "slides": [{"title": "One", "body": "text"}]
    }))
    .unwrap();
    let file = service.create_presentation(&request).unwrap();

    let bytes = std::fs::read(&file.path).unwrap();
    let theme = zip_part(&bytes, "ppt/theme/theme1.xml");
    assert!(theme.contains(papermill::default_palette().primary.hex().as_str()));
}

#[test]
fn sweep_removes_expired_files_only() {
    let dir = TempDir::new().unwrap();
    let assets = Arc::new(InMemoryAssetStore::new());
    let files = Arc::new(FileStore::new(dir.path(), Duration::ZERO).unwrap());
    let service = DocumentService::with_stores(assets, files);

    service.create_presentation(&presentation_request()).unwrap();
    assert_eq!(service.sweep_expired().unwrap(), 1);
    assert!(service.list_files().unwrap().is_empty());
}
