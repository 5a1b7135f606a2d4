//! Structured XML event stream.
//!
//! Wraps the `quick-xml` pull reader and reduces its token stream to the two
//! events the compositor cares about: element starts (with decoded
//! attributes) and element ends. Text, comments, processing instructions and
//! declarations are dropped. A self-closing element yields a start followed
//! by a matching end, so callers never special-case `<text/>`.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, TileMergeError};

use super::Attributes;

/// An XML element start: name plus attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
}

/// A single structural event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    Start(Element),
    End(String),
}

/// Lazy sequence of [`XmlEvent`]s read from a buffered source.
pub struct XmlEvents<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    pending_end: Option<String>,
}

impl<R: BufRead> XmlEvents<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            pending_end: None,
        }
    }

    /// Read the next structural event, or `None` at end of document.
    pub fn next_event(&mut self) -> Result<Option<XmlEvent>> {
        if let Some(name) = self.pending_end.take() {
            return Ok(Some(XmlEvent::End(name)));
        }

        loop {
            self.buf.clear();
            let position = self.reader.buffer_position() as u64;
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(e) => return Err(xml_error(self.reader.buffer_position() as u64, e)),
            };

            match event {
                Event::Start(start) => {
                    let element = element_from(&start, position)?;
                    return Ok(Some(XmlEvent::Start(element)));
                }
                Event::Empty(start) => {
                    let element = element_from(&start, position)?;
                    self.pending_end = Some(element.name.clone());
                    return Ok(Some(XmlEvent::Start(element)));
                }
                Event::End(end) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    return Ok(Some(XmlEvent::End(name)));
                }
                Event::Eof => return Ok(None),
                _ => continue,
            }
        }
    }

    /// Consume everything up to and including the end of the element whose
    /// start was just returned by [`next_event`](Self::next_event).
    pub fn skip_element(&mut self) -> Result<()> {
        let mut depth = 1usize;
        while let Some(event) = self.next_event()? {
            match event {
                XmlEvent::Start(_) => depth += 1,
                XmlEvent::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
            }
        }
        Err(self.unexpected_eof())
    }

    /// Error for a document that ends inside an open element.
    pub fn unexpected_eof(&self) -> TileMergeError {
        self.error("unexpected end of document inside an open element")
    }

    /// Structural error at the current reader position.
    pub fn error(&self, message: impl std::fmt::Display) -> TileMergeError {
        xml_error(self.reader.buffer_position() as u64, message)
    }
}

fn element_from(start: &BytesStart<'_>, position: u64) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Attributes::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_error(position, e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| xml_error(position, e))?
            .into_owned();
        attributes.insert(key, value);
    }

    Ok(Element { name, attributes })
}

fn xml_error(position: u64, err: impl std::fmt::Display) -> TileMergeError {
    TileMergeError::Xml {
        position,
        message: err.to_string(),
    }
}
