// FileScout - core/preview.rs
//
// Best-effort file preview. The file extension selects a `PreviewKind`, the
// kind selects a decoder function, and every decoder returns the same tagged
// `PreviewContent`. Call sites never branch on extensions themselves.
//
// Decoders are read-only and synchronous. Any failure is returned as a
// `PreviewError`; nothing here panics on malformed input.

use crate::util::constants;
use crate::util::error::PreviewError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// =============================================================================
// Types
// =============================================================================

/// The preview capability a file extension maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Pdf,
    Word,
    Excel,
    Unsupported,
}

impl PreviewKind {
    /// Classify a bare extension. Case-insensitive; a leading dot is ignored.
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            e if constants::IMAGE_EXTENSIONS.contains(&e) => PreviewKind::Image,
            "pdf" => PreviewKind::Pdf,
            "docx" => PreviewKind::Word,
            "xlsx" => PreviewKind::Excel,
            _ => PreviewKind::Unsupported,
        }
    }

    /// Classify a path by its extension.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .map(|e| Self::from_extension(&e.to_string_lossy()))
            .unwrap_or(PreviewKind::Unsupported)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreviewKind::Image => "Image",
            PreviewKind::Pdf => "PDF document",
            PreviewKind::Word => "Word document",
            PreviewKind::Excel => "Excel workbook",
            PreviewKind::Unsupported => "Unsupported",
        }
    }
}

/// Decoded RGBA8 thumbnail, independent of the GUI toolkit.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
    /// Row-major, unpremultiplied RGBA8 (`width * height * 4` bytes).
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePreview")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Result of a successful preview attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    Image(ImagePreview),
    Text(String),
    /// No decoder exists for this extension.
    Unsupported { extension: String },
}

/// Limits applied by the decoders.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Images are shrunk to fit a `max_dimension` square (never enlarged).
    pub max_dimension: u32,

    /// Text previews longer than this many characters are cut off.
    pub max_text_chars: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_dimension: constants::PREVIEW_MAX_DIMENSION,
            max_text_chars: constants::DEFAULT_MAX_PREVIEW_CHARS,
        }
    }
}

/// A decoder turns a file into preview content.
pub type Decoder = fn(&Path, &PreviewConfig) -> Result<PreviewContent, PreviewError>;

/// Capability lookup: the decoder for a preview kind, if any.
pub fn decoder_for(kind: PreviewKind) -> Option<Decoder> {
    match kind {
        PreviewKind::Image => Some(decode_image),
        PreviewKind::Pdf => Some(decode_pdf),
        PreviewKind::Word => Some(decode_word),
        PreviewKind::Excel => Some(decode_excel),
        PreviewKind::Unsupported => None,
    }
}

// =============================================================================
// Entry point
// =============================================================================

/// Produce a preview for `path`.
///
/// Returns `Ok(PreviewContent::Unsupported)` for extensions without a
/// decoder, and `Err` if a decoder exists but the file cannot be decoded.
pub fn preview_file(path: &Path, config: &PreviewConfig) -> Result<PreviewContent, PreviewError> {
    let kind = PreviewKind::from_path(path);
    let Some(decode) = decoder_for(kind) else {
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        tracing::debug!(path = %path.display(), "No preview decoder for extension");
        return Ok(PreviewContent::Unsupported { extension });
    };

    tracing::debug!(path = %path.display(), kind = kind.label(), "Decoding preview");
    match decode(path, config)? {
        PreviewContent::Text(text) => Ok(PreviewContent::Text(truncate_chars(
            text,
            config.max_text_chars,
        ))),
        other => Ok(other),
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut.
fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_idx);
        text.push_str("\n\u{2026}");
    }
    text
}

// =============================================================================
// Image
// =============================================================================

fn decode_image(path: &Path, config: &PreviewConfig) -> Result<PreviewContent, PreviewError> {
    let io_err = |source| PreviewError::Io {
        path: path.to_path_buf(),
        source,
    };
    let img = image::ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|source| PreviewError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    let max = config.max_dimension;
    let img = if img.width() > max || img.height() > max {
        img.thumbnail(max, max)
    } else {
        img
    };

    let rgba = img.into_rgba8();
    Ok(PreviewContent::Image(ImagePreview {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    }))
}

// =============================================================================
// PDF
// =============================================================================

/// First page's text layer only. A page without extractable text yields an
/// empty string; there is no OCR fallback.
fn decode_pdf(path: &Path, _config: &PreviewConfig) -> Result<PreviewContent, PreviewError> {
    let pdf_err = |source| PreviewError::Pdf {
        path: path.to_path_buf(),
        source,
    };
    let doc = lopdf::Document::load(path).map_err(pdf_err)?;

    let first_page = doc
        .get_pages()
        .keys()
        .next()
        .copied()
        .ok_or_else(|| PreviewError::NoPages {
            path: path.to_path_buf(),
        })?;

    let text = doc.extract_text(&[first_page]).map_err(pdf_err)?;
    Ok(PreviewContent::Text(text))
}

// =============================================================================
// Word (.docx)
// =============================================================================

/// WordprocessingML namespace.
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Main document part inside the .docx container.
const DOCX_BODY_PART: &str = "word/document.xml";

fn decode_word(path: &Path, _config: &PreviewConfig) -> Result<PreviewContent, PreviewError> {
    let file = File::open(path).map_err(|source| PreviewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let archive_err = |source| PreviewError::Archive {
        path: path.to_path_buf(),
        source,
    };
    let mut archive = zip::ZipArchive::new(BufReader::new(file)).map_err(archive_err)?;
    let body = archive.by_name(DOCX_BODY_PART).map_err(archive_err)?;

    let paragraphs = docx_paragraphs(body).map_err(|source| PreviewError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(PreviewContent::Text(paragraphs.join("\n")))
}

/// Text of every top-level body paragraph, in document order.
///
/// Paragraphs inside tables or text boxes are not top-level and are skipped.
/// Run-level tabs and breaks become `\t` and `\n`.
fn docx_paragraphs<R: Read>(reader: R) -> Result<Vec<String>, xml::reader::Error> {
    use xml::reader::{EventReader, XmlEvent};

    let mut paragraphs = Vec::new();
    // Local names of open elements; non-WordprocessingML elements push "".
    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;

    for event in EventReader::new(BufReader::new(reader)) {
        match event? {
            XmlEvent::StartElement { name, .. } => {
                let local = if name.namespace_ref() == Some(W_NS) {
                    name.local_name
                } else {
                    String::new()
                };
                let parent = stack.last().map(String::as_str);
                match (local.as_str(), parent) {
                    ("p", Some("body")) => current = Some(String::new()),
                    ("t", _) => in_text = true,
                    ("tab", Some("r")) => push_char(&mut current, '\t'),
                    ("br" | "cr", Some("r")) => push_char(&mut current, '\n'),
                    _ => {}
                }
                stack.push(local);
            }
            XmlEvent::EndElement { .. } => {
                let local = stack.pop().unwrap_or_default();
                match (local.as_str(), stack.last().map(String::as_str)) {
                    ("t", _) => in_text = false,
                    ("p", Some("body")) => {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                    _ => {}
                }
            }
            XmlEvent::Characters(s) | XmlEvent::Whitespace(s) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&s);
                }
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(text) = current.as_mut() {
        text.push(c);
    }
}

// =============================================================================
// Excel (.xlsx)
// =============================================================================

/// Workbook part holding the sheet list and the saved active tab.
const XLSX_WORKBOOK_PART: &str = "xl/workbook.xml";

/// The sheet that was active when the workbook was saved, every row as
/// `", "`-joined cell strings.
///
/// The grid starts at A1 regardless of where the data begins, so leading
/// empty rows and columns are kept. Empty cells render as empty strings.
fn decode_excel(path: &Path, _config: &PreviewConfig) -> Result<PreviewContent, PreviewError> {
    use calamine::Reader;

    let sheet_err = |source| PreviewError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = calamine::open_workbook_auto(path).map_err(sheet_err)?;

    let sheet_count = workbook.sheet_names().len();
    let active = match xlsx_active_tab(path) {
        Some(idx) if idx < sheet_count => idx,
        Some(idx) => {
            tracing::debug!(
                path = %path.display(),
                active_tab = idx,
                sheets = sheet_count,
                "activeTab out of range; using first sheet"
            );
            0
        }
        None => 0,
    };

    let range = workbook
        .worksheet_range_at(active)
        .ok_or_else(|| PreviewError::NoWorksheets {
            path: path.to_path_buf(),
        })?
        .map_err(sheet_err)?;

    let Some((last_row, last_col)) = range.end() else {
        return Ok(PreviewContent::Text(String::new()));
    };

    let text = (0..=last_row)
        .map(|row| {
            (0..=last_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(|cell| cell.to_string())
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(PreviewContent::Text(text))
}

/// Zero-based index of the tab that was active when the workbook was saved.
///
/// `None` when the workbook part is missing or unreadable; the caller then
/// falls back to the first sheet and lets calamine report any real damage.
fn xlsx_active_tab(path: &Path) -> Option<usize> {
    let file = File::open(path).ok()?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file)).ok()?;
    let part = archive.by_name(XLSX_WORKBOOK_PART).ok()?;
    match workbook_active_tab(part) {
        Ok(idx) => Some(idx),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Unreadable workbook part");
            None
        }
    }
}

/// `activeTab` of the first `<workbookView>`, or 0 when absent.
fn workbook_active_tab<R: Read>(reader: R) -> Result<usize, xml::reader::Error> {
    use xml::reader::{EventReader, XmlEvent};

    for event in EventReader::new(BufReader::new(reader)) {
        if let XmlEvent::StartElement {
            name, attributes, ..
        } = event?
        {
            if name.local_name == "workbookView" {
                let active = attributes
                    .iter()
                    .find(|a| a.name.local_name == "activeTab")
                    .and_then(|a| a.value.trim().parse().ok())
                    .unwrap_or(0);
                return Ok(active);
            }
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(PreviewKind::from_extension("PNG"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_extension(".jpeg"), PreviewKind::Image);
        assert_eq!(PreviewKind::from_extension("pdf"), PreviewKind::Pdf);
        assert_eq!(PreviewKind::from_extension("DocX"), PreviewKind::Word);
        assert_eq!(PreviewKind::from_extension("xlsx"), PreviewKind::Excel);
        assert_eq!(PreviewKind::from_extension("doc"), PreviewKind::Unsupported);
        assert_eq!(PreviewKind::from_extension(""), PreviewKind::Unsupported);
    }

    #[test]
    fn test_kind_from_path_without_extension() {
        assert_eq!(
            PreviewKind::from_path(Path::new("/tmp/Makefile")),
            PreviewKind::Unsupported
        );
        assert_eq!(
            PreviewKind::from_path(Path::new("/tmp/scan.TIFF.png")),
            PreviewKind::Image
        );
    }

    #[test]
    fn test_every_supported_kind_has_decoder() {
        for kind in [
            PreviewKind::Image,
            PreviewKind::Pdf,
            PreviewKind::Word,
            PreviewKind::Excel,
        ] {
            assert!(decoder_for(kind).is_some(), "{kind:?} has no decoder");
        }
        assert!(decoder_for(PreviewKind::Unsupported).is_none());
    }

    #[test]
    fn test_truncate_chars_on_boundary() {
        assert_eq!(truncate_chars("héllo".to_string(), 10), "héllo");
        assert_eq!(truncate_chars("héllo".to_string(), 2), "hé\n\u{2026}");
    }

    #[test]
    fn test_docx_paragraphs_top_level_only() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>
      <w:r><w:t>Hello</w:t></w:r><w:r><w:t xml:space="preserve"> </w:t></w:r><w:r><w:t>world</w:t></w:r>
    </w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>in table</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:p/>
    <w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>
  </w:body>
</w:document>"#;
        let paragraphs = docx_paragraphs(xml.as_bytes()).unwrap();
        assert_eq!(paragraphs, vec!["Hello world", "", "a\tb\nc"]);
    }

    #[test]
    fn test_workbook_active_tab() {
        let xml = r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <bookViews><workbookView xWindow="0" activeTab="2"/></bookViews>
  <sheets><sheet name="A" sheetId="1"/></sheets>
</workbook>"#;
        assert_eq!(workbook_active_tab(xml.as_bytes()).unwrap(), 2);
    }

    #[test]
    fn test_workbook_active_tab_defaults_to_first() {
        let xml = r#"<workbook><bookViews><workbookView xWindow="0"/></bookViews></workbook>"#;
        assert_eq!(workbook_active_tab(xml.as_bytes()).unwrap(), 0);
        assert_eq!(workbook_active_tab("<workbook/>".as_bytes()).unwrap(), 0);
    }

    #[test]
    fn test_docx_paragraphs_malformed_xml() {
        let xml = "<w:document xmlns:w=\"x\"><w:body><w:p></w:body>";
        assert!(docx_paragraphs(xml.as_bytes()).is_err());
    }
}
