//! Structural merges into an existing pom.xml
//!
//! Two operations: appending a `<plugin>` fragment under
//! `project/build/plugins`, and upserting a single property under
//! `project/properties`. Both read the descriptor, mutate the tree in
//! memory and rewrite the file in place; any failure is reported through
//! [`PomError`] before anything is written, so a failed merge leaves the
//! descriptor byte-identical. Suppression policy belongs to the caller:
//! the merger itself never swallows an error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::tree::{XmlDocument, XmlElement, XmlNode};
use crate::templates::TemplateStore;

/// Elements that `properties` is inserted in front of, first match wins
const PROPERTIES_ANCHORS: [&str; 4] = [
    "description",
    "dependencyManagement",
    "dependencies",
    "build",
];

/// Indentation used when no existing child indentation can be inferred
const DEFAULT_PROPERTY_INDENT: &str = "\n        ";

/// Canonical whitespace before a container's closing tag
const CLOSING_INDENT: &str = "\n    ";

/// What a successful merge did to the descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A new element was appended
    Inserted,
    /// An existing element's content was replaced
    Updated,
}

/// Merge failures. All of them are raised before the descriptor is
/// rewritten, except [`PomError::Write`] which reports the final rewrite
/// itself failing.
#[derive(Error, Debug)]
pub enum PomError {
    #[error("cannot use descriptor {path}: {message}")]
    MalformedDescriptor { path: PathBuf, message: String },

    #[error("fragment resource '{name}' not found")]
    FragmentNotFound { name: String },

    #[error("fragment resource '{name}' is not usable: {message}")]
    MalformedFragment { name: String, message: String },

    #[error("cannot rewrite descriptor {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Merges template XML fragments into Maven descriptors
pub struct PomMerger<'a> {
    store: &'a dyn TemplateStore,
}

impl<'a> PomMerger<'a> {
    pub fn new(store: &'a dyn TemplateStore) -> Self {
        Self { store }
    }

    /// Append the `<plugin>` fragment `fragment_name` to
    /// `project/build/plugins`, creating `build` and `plugins` when
    /// absent.
    ///
    /// Whitespace-only text directly under `plugins` is stripped first,
    /// and the imported plugin is bracketed by newline text nodes. No
    /// deduplication happens: merging the same fragment twice appends
    /// two plugin entries.
    pub fn merge_plugin(
        &self,
        pom_path: &Path,
        fragment_name: &str,
    ) -> Result<MergeOutcome, PomError> {
        let mut document = read_descriptor(pom_path)?;
        let fragment = self.read_fragment(fragment_name, Some("plugin"))?;

        {
            let project = project_root_mut(&mut document, pom_path)?;
            let build = locate_or_create(project, "build", "\n    ", "\n");
            let plugins = locate_or_create(build, "plugins", "\n        ", "\n    ");

            plugins.strip_blank_text();
            plugins.push(XmlNode::Text("\n".to_string()));
            plugins.push(XmlNode::Element(fragment));
            plugins.push(XmlNode::Text("\n".to_string()));
        }

        write_descriptor(pom_path, &document)?;
        Ok(MergeOutcome::Inserted)
    }

    /// Upsert the single-key property fragment `fragment_name` into
    /// `project/properties`.
    ///
    /// The fragment's root tag is the property key and its text content
    /// the value. An existing key is updated in place, which makes this
    /// operation idempotent; a new key is appended using the predominant
    /// indentation of its siblings.
    pub fn merge_property(
        &self,
        pom_path: &Path,
        fragment_name: &str,
    ) -> Result<MergeOutcome, PomError> {
        let mut document = read_descriptor(pom_path)?;
        let fragment = self.read_fragment(fragment_name, None)?;
        let key = fragment.name.clone();
        let value = fragment.text();

        let outcome;
        {
            let project = project_root_mut(&mut document, pom_path)?;
            let properties = locate_or_create_properties(project);
            outcome = upsert_property(properties, &key, &value);
            normalize_closing(properties);
        }

        write_descriptor(pom_path, &document)?;
        Ok(outcome)
    }

    /// Load and parse a fragment, optionally insisting on its root tag
    fn read_fragment(
        &self,
        name: &str,
        expected_root: Option<&str>,
    ) -> Result<XmlElement, PomError> {
        let content = self
            .store
            .read(name)
            .map_err(|_| PomError::FragmentNotFound {
                name: name.to_string(),
            })?;

        let document =
            XmlDocument::parse(&content).map_err(|err| PomError::MalformedFragment {
                name: name.to_string(),
                message: err.to_string(),
            })?;

        if let Some(expected) = expected_root {
            if document.root.name != expected {
                return Err(PomError::MalformedFragment {
                    name: name.to_string(),
                    message: format!(
                        "expected a <{expected}> root element, found <{}>",
                        document.root.name
                    ),
                });
            }
        }

        Ok(document.root)
    }
}

fn read_descriptor(path: &Path) -> Result<XmlDocument, PomError> {
    let content = fs::read_to_string(path).map_err(|err| PomError::MalformedDescriptor {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    XmlDocument::parse(&content).map_err(|err| PomError::MalformedDescriptor {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn write_descriptor(path: &Path, document: &XmlDocument) -> Result<(), PomError> {
    let xml = document.to_xml().map_err(|err| PomError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    fs::write(path, xml).map_err(|err| PomError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn project_root_mut<'d>(
    document: &'d mut XmlDocument,
    path: &Path,
) -> Result<&'d mut XmlElement, PomError> {
    if document.root.name != "project" {
        return Err(PomError::MalformedDescriptor {
            path: path.to_path_buf(),
            message: format!(
                "expected a <project> root element, found <{}>",
                document.root.name
            ),
        });
    }
    Ok(&mut document.root)
}

/// First child element named `name`, created (with bracketing whitespace)
/// as the parent's last child when missing.
fn locate_or_create<'e>(
    parent: &'e mut XmlElement,
    name: &str,
    lead: &str,
    trail: &str,
) -> &'e mut XmlElement {
    let index = match parent.child_element_index(name) {
        Some(index) => index,
        None => {
            parent.push(XmlNode::Text(lead.to_string()));
            let index = parent.children.len();
            parent.push(XmlNode::Element(XmlElement::new(name)));
            parent.push(XmlNode::Text(trail.to_string()));
            index
        }
    };

    match parent.element_at_mut(index) {
        Some(element) => element,
        None => unreachable!("children[index] was just located or inserted as an element"),
    }
}

/// `properties` directly under `project`, created when missing.
///
/// A new `properties` element goes immediately before the first anchor
/// element present (description, dependencyManagement, dependencies,
/// build, in that priority order), or last when none of them exist, with
/// symmetric whitespace to keep 4-space indentation intact.
fn locate_or_create_properties(project: &mut XmlElement) -> &mut XmlElement {
    let index = match project.child_element_index("properties") {
        Some(index) => index,
        None => {
            let anchor = PROPERTIES_ANCHORS
                .iter()
                .find_map(|name| project.child_element_index(name));

            match anchor {
                Some(at) => {
                    project.insert(at, XmlNode::Element(XmlElement::new("properties")));
                    project.insert(at + 1, XmlNode::Text(CLOSING_INDENT.to_string()));
                    at
                }
                None => {
                    project.push(XmlNode::Text(CLOSING_INDENT.to_string()));
                    let at = project.children.len();
                    project.push(XmlNode::Element(XmlElement::new("properties")));
                    project.push(XmlNode::Text("\n".to_string()));
                    at
                }
            }
        }
    };

    match project.element_at_mut(index) {
        Some(element) => element,
        None => unreachable!("children[index] was just located or inserted as an element"),
    }
}

fn upsert_property(properties: &mut XmlElement, key: &str, value: &str) -> MergeOutcome {
    if let Some(index) = properties.child_element_index(key) {
        if let Some(existing) = properties.element_at_mut(index) {
            existing.set_text(value);
        }
        return MergeOutcome::Updated;
    }

    // A fresh or whitespace-only container starts from a clean slate.
    if properties.children.iter().all(XmlNode::is_blank_text) {
        properties.children.clear();
    }

    let indent = predominant_child_indent(properties);

    // Drop the old closing indentation; normalize_closing reinstates it.
    if properties
        .children
        .last()
        .is_some_and(XmlNode::is_blank_text)
    {
        properties.children.pop();
    }

    properties.push(XmlNode::Text(indent));
    properties.push(XmlNode::Element(XmlElement::with_text(key, value)));
    MergeOutcome::Inserted
}

/// Ensure the container ends with the canonical newline + 4-space text
/// node before its closing tag, collapsing whatever was there.
fn normalize_closing(element: &mut XmlElement) {
    match element.children.last_mut() {
        Some(XmlNode::Text(text)) if text.chars().all(char::is_whitespace) => {
            *text = CLOSING_INDENT.to_string();
        }
        _ => element.push(XmlNode::Text(CLOSING_INDENT.to_string())),
    }
}

/// The most common "newline + spaces" run preceding the element children,
/// falling back to two levels of 4-space indentation.
fn predominant_child_indent(element: &XmlElement) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut pending_text: Option<&str> = None;

    for child in &element.children {
        match child {
            XmlNode::Text(text) => pending_text = Some(text),
            XmlNode::Element(_) => {
                if let Some(text) = pending_text.take() {
                    if let Some(at) = text.rfind('\n') {
                        let run = &text[at..];
                        if run[1..].chars().all(|c| c == ' ' || c == '\t') {
                            *counts.entry(run).or_default() += 1;
                        }
                    }
                }
            }
            _ => pending_text = None,
        }
    }

    counts
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(run, _)| run.to_string())
        .unwrap_or_else(|| DEFAULT_PROPERTY_INDENT.to_string())
}
