// SPDX-License-Identifier: MPL-2.0
//! In-memory document used by tests and the demo binary.
//!
//! Nodes live in an arena keyed by [`ElementId`]. A materialised fragment is
//! read with `quick-xml` and becomes a single node that remembers its root
//! tag and classes, the class lists of every element below the root, and its
//! text content. That is enough to match class selectors against sub-elements
//! and to print a readable snapshot.
//!
//! Markup is read leniently: end tags need not match, and attributes may be
//! single-quoted, unquoted or valueless, as in HTML.

use super::{ClickHandler, ElementId, Side, Surface};
use crate::error::{Error, Result};
use quick_xml::escape::unescape_with;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;
use std::collections::{HashMap, VecDeque};
use std::fmt::{self, Write as _};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Most recent mutations kept by the journal. Older entries are dropped.
pub const JOURNAL_CAPACITY: usize = 4096;

/// Offset style applied to an element by the slide-out animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetStyle {
    pub side: Side,
    pub value: String,
    pub transition: Duration,
}

/// Mutation recorded by a [`MemorySurface`], in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Appended { parent: ElementId, element: ElementId },
    Removed(ElementId),
    OffsetApplied { element: ElementId, side: Side },
    Clicked { element: ElementId, selector: String },
}

/// Structure read from a markup fragment.
#[derive(Debug, Default, PartialEq, Eq)]
struct Fragment {
    tag: String,
    classes: Vec<String>,
    /// Class lists of the elements below the root, in document order.
    descendants: Vec<Vec<String>>,
    text: String,
}

struct Node {
    fragment: Fragment,
    markup: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    offset: Option<OffsetStyle>,
    handlers: Vec<(String, ClickHandler)>,
}

impl Node {
    fn new(fragment: Fragment, markup: impl Into<String>) -> Self {
        Self {
            fragment,
            markup: markup.into(),
            parent: None,
            children: Vec::new(),
            offset: None,
            handlers: Vec::new(),
        }
    }

    fn has_descendant_with_class(&self, class: &str) -> bool {
        self.fragment
            .descendants
            .iter()
            .any(|classes| classes.iter().any(|c| c == class))
    }
}

struct Document {
    nodes: HashMap<ElementId, Node>,
    next_id: u64,
    journal: VecDeque<SurfaceEvent>,
}

impl Document {
    fn insert(&mut self, node: Node) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn record(&mut self, event: SurfaceEvent) {
        if self.journal.len() == JOURNAL_CAPACITY {
            self.journal.pop_front();
        }
        self.journal.push_back(event);
    }

    fn detach(&mut self, element: ElementId) {
        let parent = self.nodes.get_mut(&element).and_then(|node| node.parent.take());
        if let Some(parent) = parent.and_then(|id| self.nodes.get_mut(&id)) {
            parent.children.retain(|child| *child != element);
        }
    }

    fn discard(&mut self, element: ElementId) {
        if let Some(node) = self.nodes.remove(&element) {
            for child in node.children {
                self.discard(child);
            }
        }
    }
}

/// Thread-safe in-memory [`Surface`].
///
/// Meant for tests and demos: the mutation journal only keeps the last
/// [`JOURNAL_CAPACITY`] events.
pub struct MemorySurface {
    root: ElementId,
    document: Mutex<Document>,
}

impl MemorySurface {
    /// Creates an empty document containing only a `body` root.
    #[must_use]
    pub fn new() -> Self {
        let mut document = Document {
            nodes: HashMap::new(),
            next_id: 0,
            journal: VecDeque::new(),
        };
        let body = Fragment {
            tag: "body".to_string(),
            ..Fragment::default()
        };
        let root = document.insert(Node::new(body, "<body></body>"));
        Self {
            root,
            document: Mutex::new(document),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Simulates a click on the sub-element of `element` matching `selector`,
    /// running every handler bound to it. Returns how many handlers ran.
    pub fn click(&self, element: ElementId, selector: &str) -> usize {
        let handlers: Vec<ClickHandler> = {
            let mut document = self.lock();
            let Some(node) = document.nodes.get(&element) else {
                return 0;
            };
            let handlers = node
                .handlers
                .iter()
                .filter(|(bound, _)| bound == selector)
                .map(|(_, handler)| handler.clone())
                .collect();
            document.record(SurfaceEvent::Clicked {
                element,
                selector: selector.to_string(),
            });
            handlers
        };
        // Handlers call back into the surface, so the lock must be released.
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    /// Children of `element` in insertion order.
    #[must_use]
    pub fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.lock()
            .nodes
            .get(&element)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.lock().nodes.get(&element).and_then(|node| node.parent)
    }

    /// Root classes of `element`.
    #[must_use]
    pub fn classes(&self, element: ElementId) -> Vec<String> {
        self.lock()
            .nodes
            .get(&element)
            .map(|node| node.fragment.classes.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn markup(&self, element: ElementId) -> Option<String> {
        self.lock().nodes.get(&element).map(|node| node.markup.clone())
    }

    /// Text content of `element`'s markup, entities resolved and whitespace
    /// collapsed.
    #[must_use]
    pub fn text(&self, element: ElementId) -> Option<String> {
        self.lock()
            .nodes
            .get(&element)
            .map(|node| node.fragment.text.clone())
    }

    #[must_use]
    pub fn offset_style(&self, element: ElementId) -> Option<OffsetStyle> {
        self.lock().nodes.get(&element).and_then(|node| node.offset.clone())
    }

    /// Attached elements whose root carries `class`, in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<ElementId> {
        let document = self.lock();
        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = document.nodes.get(&id) else {
                continue;
            };
            if node.fragment.classes.iter().any(|c| c == class) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev());
        }
        found
    }

    /// Recorded mutations, oldest first.
    #[must_use]
    pub fn journal(&self) -> Vec<SurfaceEvent> {
        self.lock().journal.iter().cloned().collect()
    }

    /// Number of times `element` was removed. At most one for a live toast.
    #[must_use]
    pub fn removal_count(&self, element: ElementId) -> usize {
        self.lock()
            .journal
            .iter()
            .filter(|event| **event == SurfaceEvent::Removed(element))
            .count()
    }

    /// Renders the attached document as an indented tree, one element per
    /// line, with offsets and text content.
    #[must_use]
    pub fn snapshot(&self) -> String {
        let document = self.lock();
        let mut out = String::new();
        write_node(&document, self.root, 0, &mut out);
        out
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySurface")
            .field("root", &self.root)
            .field("nodes", &self.lock().nodes.len())
            .finish()
    }
}

impl Surface for MemorySurface {
    fn root(&self) -> ElementId {
        self.root
    }

    fn materialize(&self, markup: &str) -> Result<ElementId> {
        let fragment = parse_fragment(markup)?;
        Ok(self.lock().insert(Node::new(fragment, markup.trim())))
    }

    fn append(&self, parent: ElementId, element: ElementId) -> Result<()> {
        let mut document = self.lock();
        if !document.nodes.contains_key(&parent) {
            return Err(Error::Surface(format!("unknown parent element {parent}")));
        }
        if !document.nodes.contains_key(&element) {
            return Err(Error::Surface(format!("unknown element {element}")));
        }
        document.detach(element);
        if let Some(node) = document.nodes.get_mut(&element) {
            node.parent = Some(parent);
        }
        if let Some(node) = document.nodes.get_mut(&parent) {
            node.children.push(element);
        }
        document.record(SurfaceEvent::Appended { parent, element });
        Ok(())
    }

    fn remove(&self, element: ElementId) -> bool {
        if element == self.root {
            return false;
        }
        let mut document = self.lock();
        if !document.nodes.contains_key(&element) {
            return false;
        }
        document.detach(element);
        document.discard(element);
        document.record(SurfaceEvent::Removed(element));
        true
    }

    fn set_offset_style(
        &self,
        element: ElementId,
        side: Side,
        value: &str,
        transition: Duration,
    ) -> bool {
        let mut document = self.lock();
        let Some(node) = document.nodes.get_mut(&element) else {
            return false;
        };
        node.offset = Some(OffsetStyle {
            side,
            value: value.to_string(),
            transition,
        });
        document.record(SurfaceEvent::OffsetApplied { element, side });
        true
    }

    fn on_click(&self, element: ElementId, selector: &str, handler: ClickHandler) -> Result<()> {
        let class = selector
            .strip_prefix('.')
            .ok_or_else(|| Error::Surface(format!("unsupported selector {selector:?}")))?;
        let mut document = self.lock();
        let node = document
            .nodes
            .get_mut(&element)
            .ok_or_else(|| Error::Surface(format!("unknown element {element}")))?;
        if !node.has_descendant_with_class(class) {
            return Err(Error::Surface(format!(
                "no element matches {selector:?} inside {element}"
            )));
        }
        node.handlers.push((selector.to_string(), handler));
        Ok(())
    }

    fn contains(&self, element: ElementId) -> bool {
        self.lock().nodes.contains_key(&element)
    }
}

fn malformed(err: impl fmt::Display) -> Error {
    Error::Surface(format!("malformed markup: {err}"))
}

/// Reads the root element of `markup` and everything below it.
fn parse_fragment(markup: &str) -> Result<Fragment> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut fragment: Option<Fragment> = None;
    let mut text = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref element)) | Ok(Event::Empty(ref element)) => {
                let classes = class_list(element);
                match fragment.as_mut() {
                    Some(fragment) => fragment.descendants.push(classes),
                    None => {
                        fragment = Some(Fragment {
                            tag: String::from_utf8_lossy(element.name().as_ref()).into_owned(),
                            classes,
                            ..Fragment::default()
                        });
                    }
                }
            }
            Ok(Event::Text(ref content)) => {
                let raw = reader.decoder().decode(content).map_err(malformed)?;
                if fragment.is_none() {
                    if raw.trim().is_empty() {
                        continue;
                    }
                    break;
                }
                let resolved = match unescape_with(&raw, resolve_entity) {
                    Ok(resolved) => resolved.into_owned(),
                    Err(_) => raw.to_string(),
                };
                text.push(resolved);
            }
            Ok(Event::CData(ref content)) if fragment.is_some() => {
                text.push(String::from_utf8_lossy(content).into_owned());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(malformed(err)),
        }
    }

    let mut fragment =
        fragment.ok_or_else(|| Error::Surface("markup has no root element".to_string()))?;
    fragment.text = text
        .iter()
        .flat_map(|chunk| chunk.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(fragment)
}

fn class_list(element: &BytesStart<'_>) -> Vec<String> {
    element
        .html_attributes()
        .flatten()
        .find(|attribute| attribute.key.as_ref() == b"class")
        .map(|attribute| {
            let value = attribute
                .unescape_value()
                .map(Cow::into_owned)
                .unwrap_or_else(|_| String::from_utf8_lossy(&attribute.value).into_owned());
            value.split_whitespace().map(str::to_string).collect()
        })
        .unwrap_or_default()
}

/// Named entities: the XML set plus the HTML ones toast markup commonly uses.
fn resolve_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "nbsp" => Some("\u{a0}"),
        "times" => Some("\u{d7}"),
        _ => None,
    }
}

fn write_node(document: &Document, id: ElementId, depth: usize, out: &mut String) {
    let Some(node) = document.nodes.get(&id) else {
        return;
    };
    let _ = write!(out, "{:indent$}{}", "", node.fragment.tag, indent = depth * 2);
    for class in &node.fragment.classes {
        let _ = write!(out, ".{class}");
    }
    if let Some(offset) = &node.offset {
        let _ = write!(out, " [{}: {}]", offset.side, offset.value);
    }
    if node.children.is_empty() {
        let text = &node.fragment.text;
        if !text.is_empty() {
            let _ = write!(out, " {text:?}");
        }
    }
    out.push('\n');
    for child in &node.children {
        write_node(document, *child, depth + 1, out);
    }
}
