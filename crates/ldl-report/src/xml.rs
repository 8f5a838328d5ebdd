//! Small helpers over `quick_xml::Writer` shared by the package parts.

use std::fmt::Display;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{ReportGenerationError, Result};

pub type PartWriter = Writer<Vec<u8>>;

pub fn xml_error(err: impl Display) -> ReportGenerationError {
    ReportGenerationError::Xml(err.to_string())
}

/// Start a part with the standalone UTF-8 declaration Office expects.
pub fn new_part() -> Result<PartWriter> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_error)?;
    Ok(writer)
}

fn element<'a>(name: &'a str, attributes: &[(&str, &str)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for attribute in attributes {
        start.push_attribute(*attribute);
    }
    start
}

pub fn start(writer: &mut PartWriter, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    writer
        .write_event(Event::Start(element(name, attributes)))
        .map_err(xml_error)
}

pub fn empty(writer: &mut PartWriter, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    writer
        .write_event(Event::Empty(element(name, attributes)))
        .map_err(xml_error)
}

pub fn end(writer: &mut PartWriter, name: &str) -> Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

/// Write a simple text element.
pub fn text_element(
    writer: &mut PartWriter,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    ensure_xml_text(text)?;
    start(writer, name, attributes)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    end(writer, name)
}

/// Reject characters outside the XML 1.0 `Char` production.
pub fn ensure_xml_text(text: &str) -> Result<()> {
    let invalid = text.chars().any(|ch| {
        matches!(ch, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
    });
    if invalid {
        Err(ReportGenerationError::InvalidText(text.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_element_escapes() {
        let mut writer = Writer::new(Vec::new());
        text_element(&mut writer, "w:t", &[("xml:space", "preserve")], "< 100 & up").unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(xml, r#"<w:t xml:space="preserve">&lt; 100 &amp; up</w:t>"#);
    }

    #[test]
    fn test_ensure_xml_text() {
        assert!(ensure_xml_text("≥ 190 mg/dL\ttab\nline").is_ok());
        assert!(matches!(
            ensure_xml_text("bad\u{1}"),
            Err(ReportGenerationError::InvalidText(_))
        ));
    }
}
