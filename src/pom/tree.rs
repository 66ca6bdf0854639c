//! Whitespace-preserving XML element tree
//!
//! Materializes a quick-xml event stream into a small mutable tree and
//! serializes it back without re-indenting anything: text nodes (including
//! pure whitespace), comments, CDATA sections and processing instructions
//! are re-emitted exactly as read, so a surgical edit leaves the rest of
//! the file untouched. Entities stay in their escaped form end to end.
//!
//! The parser is deliberately strict for untrusted input: a DOCTYPE
//! declaration is rejected outright and external entities are never
//! resolved.

#![allow(dead_code)]

use std::borrow::Cow;
use std::io;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};
use thiserror::Error;

/// Parse/serialize failures
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("invalid XML: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("invalid XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("DOCTYPE declarations are not accepted")]
    DocTypeRejected,

    #[error("document has no root element")]
    MissingRoot,

    #[error("unbalanced or trailing element markup")]
    Unbalanced,

    #[error("failed to serialize XML: {0}")]
    Serialize(#[from] io::Error),

    #[error("serialized XML is not valid UTF-8")]
    Encoding,
}

/// One node in the tree. Text, comments and CDATA hold the raw bytes as
/// they appeared in the source (entities still escaped).
#[derive(Debug, Clone)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    Comment(String),
    CData(String),
    ProcessingInstruction(String),
}

impl XmlNode {
    /// Whether this is a text node containing only whitespace
    pub fn is_blank_text(&self) -> bool {
        matches!(self, XmlNode::Text(text) if text.chars().all(char::is_whitespace))
    }
}

/// An element with its attributes and ordered children
#[derive(Debug, Clone)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
    self_closing: bool,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Build a leaf element holding a single text node
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.children.push(XmlNode::Text(text.into()));
        element
    }

    /// Index of the first child element with the given tag name
    pub fn child_element_index(&self, name: &str) -> Option<usize> {
        self.children.iter().position(
            |node| matches!(node, XmlNode::Element(element) if element.name == name),
        )
    }

    /// Child element at `index`, if the node there is an element
    pub fn element_at_mut(&mut self, index: usize) -> Option<&mut XmlElement> {
        match self.children.get_mut(index) {
            Some(XmlNode::Element(element)) => Some(element),
            _ => None,
        }
    }

    /// Iterate over child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Append a child node
    pub fn push(&mut self, node: XmlNode) {
        self.self_closing = false;
        self.children.push(node);
    }

    /// Insert a child node at `index`
    pub fn insert(&mut self, index: usize, node: XmlNode) {
        self.self_closing = false;
        self.children.insert(index, node);
    }

    /// Concatenated text content of direct Text/CDATA children
    pub fn text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                XmlNode::Text(chunk) | XmlNode::CData(chunk) => text.push_str(chunk),
                _ => {}
            }
        }
        text
    }

    /// Replace all children with a single text node
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.self_closing = false;
        self.children = vec![XmlNode::Text(text.into())];
    }

    /// Drop whitespace-only text nodes among the direct children
    pub fn strip_blank_text(&mut self) {
        self.children.retain(|node| !node.is_blank_text());
    }
}

/// A parsed document: prolog (comments/whitespace before the root), the
/// root element, and whatever trailed the root.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    had_decl: bool,
    prolog: Vec<XmlNode>,
    pub root: XmlElement,
    epilog: Vec<XmlNode>,
}

impl XmlDocument {
    /// Parse a complete document. DOCTYPE declarations are rejected.
    pub fn parse(input: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(input);

        let mut had_decl = false;
        let mut prolog = Vec::new();
        let mut epilog = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Decl(_) => had_decl = true,
                Event::DocType(_) => return Err(XmlError::DocTypeRejected),
                Event::Start(start) => {
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    let mut element = element_from_start(&start)?;
                    element.self_closing = true;
                    place(
                        XmlNode::Element(element),
                        &mut stack,
                        &mut root,
                        &mut prolog,
                        &mut epilog,
                    )?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or(XmlError::Unbalanced)?;
                    place(
                        XmlNode::Element(element),
                        &mut stack,
                        &mut root,
                        &mut prolog,
                        &mut epilog,
                    )?;
                }
                Event::Text(text) => {
                    let raw = String::from_utf8_lossy(&text).into_owned();
                    place(
                        XmlNode::Text(raw),
                        &mut stack,
                        &mut root,
                        &mut prolog,
                        &mut epilog,
                    )?;
                }
                Event::Comment(comment) => {
                    let raw = String::from_utf8_lossy(&comment).into_owned();
                    place(
                        XmlNode::Comment(raw),
                        &mut stack,
                        &mut root,
                        &mut prolog,
                        &mut epilog,
                    )?;
                }
                Event::CData(cdata) => {
                    let raw = String::from_utf8_lossy(&cdata).into_owned();
                    place(
                        XmlNode::CData(raw),
                        &mut stack,
                        &mut root,
                        &mut prolog,
                        &mut epilog,
                    )?;
                }
                Event::PI(pi) => {
                    let raw = String::from_utf8_lossy(&pi).into_owned();
                    place(
                        XmlNode::ProcessingInstruction(raw),
                        &mut stack,
                        &mut root,
                        &mut prolog,
                        &mut epilog,
                    )?;
                }
                Event::Eof => break,
            }
        }

        if !stack.is_empty() {
            return Err(XmlError::Unbalanced);
        }

        Ok(Self {
            had_decl,
            prolog,
            root: root.ok_or(XmlError::MissingRoot)?,
            epilog,
        })
    }

    /// Serialize the document. An XML declaration is always emitted; the
    /// rest of the output is a verbatim replay of the tree with no
    /// auto-indentation.
    pub fn to_xml(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Vec::new());

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        if !self.had_decl {
            // The source started directly with markup; keep the added
            // declaration on its own line.
            writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        }

        for node in &self.prolog {
            write_node(&mut writer, node)?;
        }
        write_element(&mut writer, &self.root)?;
        for node in &self.epilog {
            write_node(&mut writer, node)?;
        }

        String::from_utf8(writer.into_inner()).map_err(|_| XmlError::Encoding)
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, XmlError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();

    for attribute in start.attributes() {
        let attribute = attribute?;
        attributes.push((
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            String::from_utf8_lossy(&attribute.value).into_owned(),
        ));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
        self_closing: false,
    })
}

/// Attach a completed node to the enclosing element, or to the document
/// prolog/epilog when no element is open.
fn place(
    node: XmlNode,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    prolog: &mut Vec<XmlNode>,
    epilog: &mut Vec<XmlNode>,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }

    match node {
        XmlNode::Element(element) => {
            if root.is_some() {
                return Err(XmlError::Unbalanced);
            }
            *root = Some(element);
        }
        other => {
            if root.is_none() {
                prolog.push(other);
            } else {
                epilog.push(other);
            }
        }
    }

    Ok(())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), XmlError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        // Values were captured raw, so hand them back untouched instead
        // of letting the writer re-escape them.
        start.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: Cow::Borrowed(value.as_bytes()),
        });
    }

    if element.children.is_empty() && element.self_closing {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<(), XmlError> {
    match node {
        XmlNode::Element(element) => write_element(writer, element)?,
        XmlNode::Text(raw) => {
            writer.write_event(Event::Text(BytesText::from_escaped(raw.as_str())))?
        }
        XmlNode::Comment(raw) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(raw.as_str())))?
        }
        XmlNode::CData(raw) => writer.write_event(Event::CData(BytesCData::new(raw.as_str())))?,
        XmlNode::ProcessingInstruction(raw) => {
            writer.write_event(Event::PI(BytesPI::new(raw.as_str())))?
        }
    }
    Ok(())
}
