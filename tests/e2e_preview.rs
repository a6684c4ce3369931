// FileScout - tests/e2e_preview.rs
//
// End-to-end tests for the preview dispatcher against real files.
//
// Image and Word fixtures are generated in-test with the `image` and `zip`
// crates; corrupt fixtures are plain bytes with a recognised extension.

use filescout::app::state::{AppState, NoticeKind, PreviewPane};
use filescout::core::preview::{preview_file, PreviewConfig, PreviewContent};
use filescout::util::error::PreviewError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Quarterly report</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Revenue </w:t></w:r><w:r><w:t>rose</w:t></w:r></w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell text</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:p/>
  </w:body>
</w:document>"#;

fn write_docx(path: &Path, document_xml: &str) {
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(document_xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

/// Minimal .xlsx package: workbook with an active tab, one part per sheet
/// and a shared-string table. Each sheet is given as raw `<sheetData>` rows.
fn write_xlsx(path: &Path, active_tab: usize, sheets: &[(&str, &str)], shared: &[&str]) {
    const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
    const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    let mut sheet_entries = String::new();
    let mut rels = String::new();
    let mut overrides = String::new();
    for (i, (name, _)) in sheets.iter().enumerate() {
        let n = i + 1;
        sheet_entries.push_str(&format!(r#"<sheet name="{name}" sheetId="{n}" r:id="rId{n}"/>"#));
        rels.push_str(&format!(
            r#"<Relationship Id="rId{n}" Type="{REL_NS}/worksheet" Target="worksheets/sheet{n}.xml"/>"#
        ));
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }
    rels.push_str(&format!(
        r#"<Relationship Id="rIdStrings" Type="{REL_NS}/sharedStrings" Target="sharedStrings.xml"/>"#
    ));

    let content_types = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>
{overrides}</Types>"#
    );
    let root_rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="{REL_NS}/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#
    );
    let workbook = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<workbook xmlns="{MAIN_NS}" xmlns:r="{REL_NS}">
<bookViews><workbookView xWindow="0" yWindow="0" activeTab="{active_tab}"/></bookViews>
<sheets>{sheet_entries}</sheets>
</workbook>"#
    );
    let workbook_rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
    );
    let strings: String = shared.iter().map(|t| format!("<si><t>{t}</t></si>")).collect();
    let shared_strings = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="{MAIN_NS}" count="{n}" uniqueCount="{n}">{strings}</sst>"#,
        n = shared.len()
    );

    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let mut part = |name: String, body: String| {
        zip.start_file(name, zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    };
    part("[Content_Types].xml".into(), content_types);
    part("_rels/.rels".into(), root_rels);
    part("xl/workbook.xml".into(), workbook);
    part("xl/_rels/workbook.xml.rels".into(), workbook_rels);
    part("xl/sharedStrings.xml".into(), shared_strings);
    for (i, (_, rows)) in sheets.iter().enumerate() {
        part(
            format!("xl/worksheets/sheet{}.xml", i + 1),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<worksheet xmlns="{MAIN_NS}"><sheetData>{rows}</sheetData></worksheet>"#
            ),
        );
    }
    zip.finish().unwrap();
}

/// PDF with one line of Courier text per page.
fn write_pdf(path: &Path, pages: &[&str]) {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

fn write_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    img.save(path).unwrap();
}

fn state() -> AppState {
    AppState::new(Vec::new(), 1_000, PreviewConfig::default())
}

// =============================================================================
// Dispatcher
// =============================================================================

#[test]
fn e2e_large_image_is_shrunk_preserving_aspect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.png");
    write_png(&path, 800, 400);

    match preview_file(&path, &PreviewConfig::default()).unwrap() {
        PreviewContent::Image(img) => {
            assert_eq!((img.width, img.height), (400, 200));
            assert_eq!(img.rgba.len(), 400 * 200 * 4);
        }
        other => panic!("expected image, got {other:?}"),
    }
}

#[test]
fn e2e_small_image_is_not_enlarged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.PNG");
    write_png(&path, 32, 16);

    match preview_file(&path, &PreviewConfig::default()).unwrap() {
        PreviewContent::Image(img) => assert_eq!((img.width, img.height), (32, 16)),
        other => panic!("expected image, got {other:?}"),
    }
}

#[test]
fn e2e_docx_body_paragraphs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memo.docx");
    write_docx(&path, DOCUMENT_XML);

    let content = preview_file(&path, &PreviewConfig::default()).unwrap();
    assert_eq!(
        content,
        PreviewContent::Text("Quarterly report\nRevenue rose\n".to_string())
    );
}

#[test]
fn e2e_long_text_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.docx");
    let body = "x".repeat(5_000);
    write_docx(
        &path,
        &DOCUMENT_XML.replace("Quarterly report", &body),
    );

    let config = PreviewConfig {
        max_text_chars: 1_000,
        ..Default::default()
    };
    match preview_file(&path, &config).unwrap() {
        PreviewContent::Text(text) => {
            assert!(text.ends_with('\u{2026}'));
            assert_eq!(text.chars().filter(|&c| c == 'x').count(), 1_000);
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn e2e_pdf_first_page_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_pages.pdf");
    write_pdf(&path, &["Opening page", "Appendix page"]);

    match preview_file(&path, &PreviewConfig::default()).unwrap() {
        PreviewContent::Text(text) => {
            assert!(text.contains("Opening page"), "{text:?}");
            assert!(!text.contains("Appendix"), "{text:?}");
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn e2e_xlsx_rows_and_empty_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.xlsx");
    let rows = r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="C1" t="s"><v>1</v></c></row>
<row r="2"><c r="A2"><v>1</v></c><c r="B2"><v>2.5</v></c><c r="C2" t="s"><v>2</v></c></row>"#;
    write_xlsx(&path, 0, &[("Data", rows)], &["name", "total", "z"]);

    let content = preview_file(&path, &PreviewConfig::default()).unwrap();
    assert_eq!(
        content,
        PreviewContent::Text("name, , total\n1, 2.5, z".to_string())
    );
}

#[test]
fn e2e_xlsx_uses_saved_active_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tabs.xlsx");
    let one = r#"<row r="1"><c r="A1" t="s"><v>0</v></c></row>"#;
    let two = r#"<row r="1"><c r="A1" t="s"><v>1</v></c></row>"#;
    write_xlsx(&path, 1, &[("One", one), ("Two", two)], &["first", "second"]);

    let content = preview_file(&path, &PreviewConfig::default()).unwrap();
    assert_eq!(content, PreviewContent::Text("second".to_string()));
}

/// The grid starts at A1 even when the data does not.
#[test]
fn e2e_xlsx_keeps_leading_empty_rows_and_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offset.xlsx");
    let rows = r#"<row r="2"><c r="B2" t="s"><v>0</v></c><c r="D2"><v>7</v></c></row>"#;
    write_xlsx(&path, 0, &[("Sheet1", rows)], &["active"]);

    let content = preview_file(&path, &PreviewConfig::default()).unwrap();
    assert_eq!(
        content,
        PreviewContent::Text(", , , \n, active, , 7".to_string())
    );
}

#[test]
fn e2e_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "plain").unwrap();

    let content = preview_file(&path, &PreviewConfig::default()).unwrap();
    assert_eq!(
        content,
        PreviewContent::Unsupported {
            extension: ".txt".to_string()
        }
    );
}

#[test]
fn e2e_corrupt_files_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let cases = [
        ("broken.xlsx", "spreadsheet"),
        ("broken.pdf", "pdf"),
        ("broken.docx", "archive"),
        ("broken.jpg", "image"),
    ];
    for (name, kind) in cases {
        let path = dir.path().join(name);
        fs::write(&path, b"this is not a real document").unwrap();
        let err = preview_file(&path, &PreviewConfig::default())
            .expect_err(&format!("{name} should fail to decode"));
        let matched = match (&err, kind) {
            (PreviewError::Spreadsheet { .. }, "spreadsheet") => true,
            (PreviewError::Pdf { .. }, "pdf") => true,
            (PreviewError::Archive { .. }, "archive") => true,
            (PreviewError::Image { .. }, "image") => true,
            _ => false,
        };
        assert!(matched, "{name}: unexpected error {err:?}");
    }
}

#[test]
fn e2e_docx_without_body_part_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.docx");
    let file = fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("other.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"<x/>").unwrap();
    zip.finish().unwrap();

    let err = preview_file(&path, &PreviewConfig::default()).unwrap_err();
    assert!(matches!(err, PreviewError::Archive { .. }), "{err:?}");
}

// =============================================================================
// State integration
// =============================================================================

#[test]
fn e2e_state_shows_image_then_keeps_it_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("photo.png");
    write_png(&png, 10, 10);
    let bad = dir.path().join("bad.xlsx");
    fs::write(&bad, b"garbage").unwrap();

    let mut state = state();
    state.load_preview(&png);
    assert!(matches!(state.preview, PreviewPane::Image { ref path, .. } if *path == png));
    assert!(state.notice.is_none());

    state.load_preview(&bad);
    assert!(matches!(state.preview, PreviewPane::Image { ref path, .. } if *path == png));
    assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);
}

#[test]
fn e2e_state_missing_file_is_error_notice() {
    let mut state = state();
    state.load_preview(&PathBuf::from("/definitely/not/here.pdf"));
    assert_eq!(state.preview, PreviewPane::Empty);
    assert_eq!(state.notice.unwrap().kind, NoticeKind::Error);
}
