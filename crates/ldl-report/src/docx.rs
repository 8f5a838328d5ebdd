//! WordprocessingML (`.docx`) serialization.
//!
//! The package is assembled entirely in memory; callers get the finished
//! bytes or an error, never a partially written file.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::document::{Alignment, Block, DocumentProperties, ReportDocument, Spacing, TextRun};
use crate::error::{ReportGenerationError, Result};
use crate::xml::{PartWriter, empty, end, ensure_xml_text, new_part, start, text_element};

/// MIME type of a `.docx` file.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const PKG_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// Part names in package order.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const CORE_PART: &str = "docProps/core.xml";
pub const APP_PART: &str = "docProps/app.xml";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const STYLES_PART: &str = "word/styles.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// A4 portrait with one-inch margins, in twips.
const PAGE_WIDTH: &str = "11906";
const PAGE_HEIGHT: &str = "16838";
const PAGE_MARGIN: &str = "1440";

/// Serialize a document into `.docx` bytes.
///
/// Output is deterministic: the same document always yields the same bytes.
pub fn render_docx(document: &ReportDocument) -> Result<Vec<u8>> {
    let parts = [
        (CONTENT_TYPES_PART, content_types()?),
        (ROOT_RELS_PART, root_relationships()?),
        (CORE_PART, core_properties(&document.properties)?),
        (APP_PART, app_properties(&document.properties)?),
        (DOCUMENT_PART, document_xml(document)?),
        (STYLES_PART, styles_xml()?),
        (DOCUMENT_RELS_PART, document_relationships()?),
    ];

    // Fixed timestamp keeps the archive reproducible.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in parts {
        archive.start_file(name, options)?;
        archive
            .write_all(&bytes)
            .map_err(|e| ReportGenerationError::Archive(format!("write {name}: {e}")))?;
    }
    let cursor = archive.finish()?;
    let bytes = cursor.into_inner();
    tracing::debug!(bytes = bytes.len(), "rendered docx package");
    Ok(bytes)
}

fn content_types() -> Result<Vec<u8>> {
    let mut xml = new_part()?;
    start(&mut xml, "Types", &[("xmlns", CONTENT_TYPES_NS)])?;
    empty(
        &mut xml,
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    empty(
        &mut xml,
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;
    let overrides = [
        (
            DOCUMENT_PART,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            STYLES_PART,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            CORE_PART,
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            APP_PART,
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];
    for (part, content_type) in overrides {
        let part_name = format!("/{part}");
        empty(
            &mut xml,
            "Override",
            &[("PartName", part_name.as_str()), ("ContentType", content_type)],
        )?;
    }
    end(&mut xml, "Types")?;
    Ok(xml.into_inner())
}

fn relationships(entries: &[(&str, &str, &str)]) -> Result<Vec<u8>> {
    let mut xml = new_part()?;
    start(&mut xml, "Relationships", &[("xmlns", PKG_RELS_NS)])?;
    for &(id, kind, target) in entries {
        empty(
            &mut xml,
            "Relationship",
            &[("Id", id), ("Type", kind), ("Target", target)],
        )?;
    }
    end(&mut xml, "Relationships")?;
    Ok(xml.into_inner())
}

fn root_relationships() -> Result<Vec<u8>> {
    relationships(&[
        ("rId1", REL_OFFICE_DOCUMENT, DOCUMENT_PART),
        ("rId2", REL_CORE_PROPERTIES, CORE_PART),
        ("rId3", REL_EXTENDED_PROPERTIES, APP_PART),
    ])
}

fn document_relationships() -> Result<Vec<u8>> {
    relationships(&[("rId1", REL_STYLES, "styles.xml")])
}

fn core_properties(properties: &DocumentProperties) -> Result<Vec<u8>> {
    let created = properties.created.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let mut xml = new_part()?;
    start(
        &mut xml,
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    text_element(&mut xml, "dc:title", &[], &properties.title)?;
    text_element(&mut xml, "dc:creator", &[], &properties.creator)?;
    let w3cdtf = [("xsi:type", "dcterms:W3CDTF")];
    text_element(&mut xml, "dcterms:created", &w3cdtf, &created)?;
    text_element(&mut xml, "dcterms:modified", &w3cdtf, &created)?;
    end(&mut xml, "cp:coreProperties")?;
    Ok(xml.into_inner())
}

fn app_properties(properties: &DocumentProperties) -> Result<Vec<u8>> {
    let mut xml = new_part()?;
    start(
        &mut xml,
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    text_element(&mut xml, "Application", &[], &properties.creator)?;
    end(&mut xml, "Properties")?;
    Ok(xml.into_inner())
}

fn document_xml(document: &ReportDocument) -> Result<Vec<u8>> {
    let mut xml = new_part()?;
    start(&mut xml, "w:document", &[("xmlns:w", W_NS)])?;
    start(&mut xml, "w:body", &[])?;
    for block in &document.blocks {
        write_block(&mut xml, block)?;
    }
    start(&mut xml, "w:sectPr", &[])?;
    empty(&mut xml, "w:pgSz", &[("w:w", PAGE_WIDTH), ("w:h", PAGE_HEIGHT)])?;
    empty(
        &mut xml,
        "w:pgMar",
        &[
            ("w:top", PAGE_MARGIN),
            ("w:right", PAGE_MARGIN),
            ("w:bottom", PAGE_MARGIN),
            ("w:left", PAGE_MARGIN),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    end(&mut xml, "w:sectPr")?;
    end(&mut xml, "w:body")?;
    end(&mut xml, "w:document")?;
    Ok(xml.into_inner())
}

fn write_block(xml: &mut PartWriter, block: &Block) -> Result<()> {
    start(xml, "w:p", &[])?;
    match block {
        Block::Heading {
            level,
            text,
            alignment,
            spacing,
        } => {
            write_paragraph_properties(xml, Some(level.style_id()), *alignment, *spacing)?;
            write_run(xml, &TextRun::new(text.as_str()))?;
        }
        Block::Paragraph {
            runs,
            alignment,
            spacing,
        } => {
            write_paragraph_properties(xml, None, *alignment, *spacing)?;
            for run in runs {
                write_run(xml, run)?;
            }
        }
    }
    end(xml, "w:p")
}

fn write_paragraph_properties(
    xml: &mut PartWriter,
    style: Option<&str>,
    alignment: Alignment,
    spacing: Spacing,
) -> Result<()> {
    if style.is_none() && alignment == Alignment::Default && spacing.is_empty() {
        return Ok(());
    }
    start(xml, "w:pPr", &[])?;
    if let Some(style) = style {
        empty(xml, "w:pStyle", &[("w:val", style)])?;
    }
    if !spacing.is_empty() {
        let before = spacing.before.map(|v| v.to_string());
        let after = spacing.after.map(|v| v.to_string());
        let mut attributes = Vec::new();
        if let Some(before) = before.as_deref() {
            attributes.push(("w:before", before));
        }
        if let Some(after) = after.as_deref() {
            attributes.push(("w:after", after));
        }
        empty(xml, "w:spacing", &attributes)?;
    }
    if alignment == Alignment::Center {
        empty(xml, "w:jc", &[("w:val", "center")])?;
    }
    end(xml, "w:pPr")
}

fn write_run(xml: &mut PartWriter, run: &TextRun) -> Result<()> {
    ensure_xml_text(&run.text)?;
    start(xml, "w:r", &[])?;
    if run.has_properties() {
        start(xml, "w:rPr", &[])?;
        if run.bold {
            empty(xml, "w:b", &[])?;
        }
        if run.italic {
            empty(xml, "w:i", &[])?;
        }
        if let Some(color) = run.color.as_deref() {
            if !is_hex_color(color) {
                return Err(ReportGenerationError::InvalidInput(format!(
                    "colour {color:?} is not a 6-digit hex value"
                )));
            }
            empty(xml, "w:color", &[("w:val", color)])?;
        }
        if let Some(size) = run.size {
            let size = size.to_string();
            empty(xml, "w:sz", &[("w:val", size.as_str())])?;
            empty(xml, "w:szCs", &[("w:val", size.as_str())])?;
        }
        end(xml, "w:rPr")?;
    }
    text_element(xml, "w:t", &[("xml:space", "preserve")], &run.text)?;
    end(xml, "w:r")
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 6 && value.chars().all(|ch| ch.is_ascii_hexdigit())
}

fn styles_xml() -> Result<Vec<u8>> {
    let mut xml = new_part()?;
    start(&mut xml, "w:styles", &[("xmlns:w", W_NS)])?;

    start(&mut xml, "w:docDefaults", &[])?;
    start(&mut xml, "w:rPrDefault", &[])?;
    start(&mut xml, "w:rPr", &[])?;
    empty(
        &mut xml,
        "w:rFonts",
        &[
            ("w:ascii", "Calibri"),
            ("w:hAnsi", "Calibri"),
            ("w:cs", "Calibri"),
        ],
    )?;
    empty(&mut xml, "w:sz", &[("w:val", "22")])?;
    empty(&mut xml, "w:szCs", &[("w:val", "22")])?;
    end(&mut xml, "w:rPr")?;
    end(&mut xml, "w:rPrDefault")?;
    end(&mut xml, "w:docDefaults")?;

    start(
        &mut xml,
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    empty(&mut xml, "w:name", &[("w:val", "Normal")])?;
    empty(&mut xml, "w:qFormat", &[])?;
    end(&mut xml, "w:style")?;

    for (id, name, outline, size) in [
        ("Heading1", "heading 1", "0", "32"),
        ("Heading2", "heading 2", "1", "26"),
        ("Heading3", "heading 3", "2", "24"),
    ] {
        start(
            &mut xml,
            "w:style",
            &[("w:type", "paragraph"), ("w:styleId", id)],
        )?;
        empty(&mut xml, "w:name", &[("w:val", name)])?;
        empty(&mut xml, "w:basedOn", &[("w:val", "Normal")])?;
        empty(&mut xml, "w:next", &[("w:val", "Normal")])?;
        empty(&mut xml, "w:qFormat", &[])?;
        start(&mut xml, "w:pPr", &[])?;
        empty(&mut xml, "w:keepNext", &[])?;
        empty(&mut xml, "w:outlineLvl", &[("w:val", outline)])?;
        end(&mut xml, "w:pPr")?;
        start(&mut xml, "w:rPr", &[])?;
        empty(&mut xml, "w:b", &[])?;
        empty(&mut xml, "w:sz", &[("w:val", size)])?;
        empty(&mut xml, "w:szCs", &[("w:val", size)])?;
        end(&mut xml, "w:rPr")?;
        end(&mut xml, "w:style")?;
    }

    end(&mut xml, "w:styles")?;
    Ok(xml.into_inner())
}
