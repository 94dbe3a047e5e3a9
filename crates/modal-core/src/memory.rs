//! In-memory document implementing [`DocumentHost`].
//!
//! Enough of a DOM to run the controller headless: elements with ids,
//! class strings and children, text nodes, a focus pointer and a location
//! fragment. Writing the fragment raises a pending fragment-change flag
//! instead of calling back, mirroring the queued `hashchange` of a browser.

use crate::classes::contains_token;
use crate::host::DocumentHost;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    id: Option<String>,
    class_name: String,
    children: Vec<NodeId>,
    is_element: bool,
}

#[derive(Debug)]
pub struct MemoryDocument {
    nodes: RefCell<Vec<Node>>,
    ids: RefCell<FnvHashMap<String, NodeId>>,
    focused: Cell<Option<NodeId>>,
    fragment: RefCell<String>,
    fragment_changed: Cell<bool>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Empty document with just the root element.
    pub fn new() -> Self {
        let root = Node {
            id: None,
            class_name: String::new(),
            children: Vec::new(),
            is_element: true,
        };
        Self {
            nodes: RefCell::new(vec![root]),
            ids: RefCell::new(FnvHashMap::default()),
            focused: Cell::new(None),
            fragment: RefCell::new(String::new()),
            fragment_changed: Cell::new(false),
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&self, parent: NodeId, node: Node) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let handle = NodeId(nodes.len());
        if let Some(id) = node.id.as_ref() {
            // getElementById returns the first match in tree order
            self.ids.borrow_mut().entry(id.clone()).or_insert(handle);
        }
        nodes.push(node);
        if let Some(p) = nodes.get_mut(parent.0) {
            p.children.push(handle);
        }
        handle
    }

    pub fn append_element(&self, parent: NodeId, id: Option<&str>, class_name: &str) -> NodeId {
        self.push(
            parent,
            Node {
                id: id.map(str::to_string),
                class_name: class_name.to_string(),
                children: Vec::new(),
                is_element: true,
            },
        )
    }

    pub fn append_text(&self, parent: NodeId) -> NodeId {
        self.push(
            parent,
            Node {
                id: None,
                class_name: String::new(),
                children: Vec::new(),
                is_element: false,
            },
        )
    }

    /// `<div id="{id}" class="modal"><div class="{inner_class}">` under the root.
    pub fn append_modal(&self, id: &str, inner_class: &str) -> NodeId {
        let modal = self.append_element(self.root_id(), Some(id), "modal");
        self.append_element(modal, None, inner_class);
        modal
    }

    pub fn class_of(&self, node: NodeId) -> String {
        self.nodes
            .borrow()
            .get(node.0)
            .map(|n| n.class_name.clone())
            .unwrap_or_default()
    }

    pub fn elements_with_class(&self, name: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_element && contains_token(&n.class_name, name))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Set the hash as a user or link would; raises a fragment change.
    pub fn navigate(&self, hash: &str) {
        self.set_fragment(hash);
    }

    /// Consume the pending fragment-change notification, if any.
    pub fn take_fragment_change(&self) -> bool {
        self.fragment_changed.replace(false)
    }
}

impl DocumentHost for MemoryDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.ids.borrow().get(id).copied()
    }

    fn first_element_child(&self, element: &NodeId) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let child = nodes
            .get(element.0)?
            .children
            .iter()
            .copied()
            .find(|c| nodes.get(c.0).is_some_and(|n| n.is_element));
        child
    }

    fn root(&self) -> Option<NodeId> {
        Some(self.root_id())
    }

    fn element_id(&self, element: &NodeId) -> String {
        self.nodes
            .borrow()
            .get(element.0)
            .and_then(|n| n.id.clone())
            .unwrap_or_default()
    }

    fn class_name(&self, element: &NodeId) -> String {
        self.class_of(*element)
    }

    fn set_class_name(&self, element: &NodeId, value: &str) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(element.0) {
            n.class_name = value.to_string();
        }
    }

    fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    fn focus(&self, element: &NodeId) {
        self.focused.set(Some(*element));
    }

    fn fragment(&self) -> String {
        let fragment = self.fragment.borrow().clone();
        if fragment.is_empty() {
            fragment
        } else {
            format!("#{fragment}")
        }
    }

    fn set_fragment(&self, value: &str) {
        let value = value.strip_prefix('#').unwrap_or(value);
        let mut fragment = self.fragment.borrow_mut();
        if *fragment != value {
            *fragment = value.to_string();
            self.fragment_changed.set(true);
        }
    }
}
