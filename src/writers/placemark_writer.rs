//! SeaDAS placemark XML output
//!
//! Produces `<Placemarks>` documents with one `<Placemark>` per record,
//! encoded in the encoding named by the XML declaration.

use crate::config::Settings;
use crate::error::{ProcessingError, Result};
use crate::models::Placemark;
use crate::utils::constants::{DEFAULT_STYLE_CSS, DEFAULT_XML_ENCODING};
use crate::utils::coordinates::format_degrees;
use encoding_rs::{Encoding, WINDOWS_1252};
use std::borrow::Cow;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::{info, warn};

/// Byte encoding of the written document
#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputEncoding {
    /// One byte per code point up to `max`; anything above becomes a
    /// numeric character reference
    SingleByte { max: char },
    Other(&'static Encoding),
}

impl OutputEncoding {
    /// ISO-8859-1 and ASCII labels resolve to windows-1252 under WHATWG;
    /// they are written as strict Latin-1 or ASCII instead.
    fn for_label(label: &str) -> Option<Self> {
        let encoding = Encoding::for_label(label.as_bytes())?;
        if encoding != WINDOWS_1252 {
            return Some(OutputEncoding::Other(encoding));
        }

        let normalized = label.trim().to_ascii_lowercase();
        let encoding = match normalized.as_str() {
            "windows-1252" | "cp1252" | "x-cp1252" => OutputEncoding::Other(WINDOWS_1252),
            "ascii" | "us-ascii" | "ansi_x3.4-1968" | "csascii" | "ibm367" | "cp367"
            | "iso-ir-6" | "iso646-us" | "iso_646.irv:1991" | "us" => {
                OutputEncoding::SingleByte { max: '\u{7f}' }
            }
            _ => OutputEncoding::SingleByte { max: '\u{ff}' },
        };
        Some(encoding)
    }

    /// Returns the bytes and whether any character needed a reference
    fn encode<'a>(&self, text: &'a str) -> (Cow<'a, [u8]>, bool) {
        match self {
            OutputEncoding::Other(encoding) => {
                let (bytes, _, had_unmappable) = encoding.encode(text);
                (bytes, had_unmappable)
            }
            OutputEncoding::SingleByte { max } => {
                if text.chars().all(|c| c <= *max) {
                    return (encoding_rs::mem::encode_latin1_lossy(text), false);
                }

                let mut escaped = String::with_capacity(text.len() + 16);
                for c in text.chars() {
                    if c <= *max {
                        escaped.push(c);
                    } else {
                        escaped.push_str(&format!("&#{};", c as u32));
                    }
                }
                (
                    Cow::Owned(encoding_rs::mem::encode_latin1_lossy(&escaped).into_owned()),
                    true,
                )
            }
        }
    }
}

pub struct PlacemarkWriter {
    style_css: String,
    encoding_label: String,
    encoding: OutputEncoding,
}

impl PlacemarkWriter {
    pub fn new() -> Self {
        Self {
            style_css: DEFAULT_STYLE_CSS.to_string(),
            encoding_label: DEFAULT_XML_ENCODING.to_string(),
            encoding: OutputEncoding::SingleByte { max: '\u{ff}' },
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let encoding = OutputEncoding::for_label(&settings.xml_encoding).ok_or_else(|| {
            ProcessingError::Config(format!("Unknown XML encoding '{}'", settings.xml_encoding))
        })?;

        Ok(Self {
            style_css: settings.style_css.clone(),
            encoding_label: settings.xml_encoding.clone(),
            encoding,
        })
    }

    pub fn with_style_css(mut self, style_css: &str) -> Self {
        self.style_css = style_css.to_string();
        self
    }

    /// Render the document as text, before encoding
    pub fn render(&self, placemarks: &[Placemark]) -> Result<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some(self.encoding_label.as_str()),
            None,
        )))?;
        writer.write_event(Event::Start(BytesStart::new("Placemarks")))?;

        for placemark in placemarks {
            self.write_placemark(&mut writer, placemark)?;
        }

        writer.write_event(Event::End(BytesEnd::new("Placemarks")))?;

        let mut bytes = writer.into_inner().into_inner();
        bytes.push(b'\n');
        String::from_utf8(bytes)
            .map_err(|e| ProcessingError::InvalidFormat(format!("Rendered XML is not UTF-8: {}", e)))
    }

    fn write_placemark<W: Write>(
        &self,
        writer: &mut Writer<W>,
        placemark: &Placemark,
    ) -> Result<()> {
        let mut element = BytesStart::new("Placemark");
        element.push_attribute(("name", placemark.label.as_str()));
        writer.write_event(Event::Start(element))?;

        write_text_element(writer, "LABEL", &placemark.label)?;
        write_text_element(writer, "LATITUDE", &format_degrees(placemark.latitude))?;
        write_text_element(writer, "LONGITUDE", &format_degrees(placemark.longitude))?;
        write_text_element(writer, "STYLE_CSS", &self.style_css)?;

        writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
        Ok(())
    }

    /// Encode and write the document to `path`
    pub fn write(&self, path: &Path, placemarks: &[Placemark]) -> Result<()> {
        let text = self.render(placemarks)?;
        let (bytes, had_unmappable) = self.encoding.encode(&text);
        if had_unmappable {
            warn!(
                "Some labels cannot be represented in {}; wrote character references instead",
                self.encoding_label
            );
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, &bytes)?;
        info!(
            "Wrote {} placemarks to {}",
            placemarks.len(),
            path.display()
        );
        Ok(())
    }
}

impl Default for PlacemarkWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, content: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
