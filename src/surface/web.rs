//! Browser DOM adapter.
//!
//! Maps [`NodeId`]s onto live `web_sys::Element`s. The host scans the
//! authoring document once (or after each re-render) with
//! [`WebSurface::scan`]; pointer handlers then translate event targets
//! to ids with [`WebSurface::node_id_of`] and drive the engine.
//!
//! Absent APIs and cast failures degrade to `None` - this adapter never
//! panics.

use super::Surface;
use crate::constants::{
    BLOCK_CLASS_IMAGE, BLOCK_CLASS_INSERT, CAPTION_TAG, GRID_CONTAINER_CLASS,
    VISUAL_CLASS_HOVERED, VISUAL_CLASS_MANIPULATING,
};
use crate::types::{BlockKind, NodeId, PixelRect, VisualState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

/// A [`Surface`] over the live page.
pub struct WebSurface {
    nodes: Vec<Element>,
    window: Option<Window>,
}

impl WebSurface {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            window: web_sys::window(),
        }
    }

    /// Register every grid container, block, and caption under `document`.
    ///
    /// Returns the number of registered nodes.
    pub fn scan(&mut self, document: &Document) -> usize {
        let selector = format!(
            ".{GRID_CONTAINER_CLASS}, .{BLOCK_CLASS_IMAGE}, .{BLOCK_CLASS_INSERT}, figure, figcaption"
        );
        let Ok(list) = document.query_selector_all(&selector) else {
            return 0;
        };
        for index in 0..list.length() {
            let Some(node) = list.get(index) else { continue };
            if let Ok(element) = node.dyn_into::<Element>() {
                self.register(element);
            }
        }
        self.nodes.len()
    }

    /// Register one element, returning its id (stable across repeat calls).
    pub fn register(&mut self, element: Element) -> NodeId {
        if let Some(existing) = self.node_id_of(&element) {
            return existing;
        }
        self.nodes.push(element);
        NodeId(self.nodes.len() as u64 - 1)
    }

    /// The id a previously registered element was assigned, if any.
    pub fn node_id_of(&self, element: &Element) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|candidate| candidate == element)
            .map(|index| NodeId(index as u64))
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0 as usize)
    }
}

impl Default for WebSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_of(element: &Element) -> Option<BlockKind> {
    if element.tag_name().eq_ignore_ascii_case("figure") {
        return Some(BlockKind::Figure);
    }
    let classes = element.class_list();
    if classes.contains(BLOCK_CLASS_IMAGE) {
        return Some(BlockKind::Image);
    }
    if classes.contains(BLOCK_CLASS_INSERT) {
        return Some(BlockKind::Insert);
    }
    None
}

impl Surface for WebSurface {
    fn is_attached(&self, node: NodeId) -> bool {
        self.element(node)
            .map(|element| element.is_connected())
            .unwrap_or(false)
    }

    fn block_kind(&self, node: NodeId) -> Option<BlockKind> {
        kind_of(self.element(node)?)
    }

    fn grid_container(&self, node: NodeId) -> Option<NodeId> {
        let element = self.element(node)?;
        let ancestor = element
            .parent_element()?
            .closest(&format!(".{GRID_CONTAINER_CLASS}"))
            .ok()??;
        self.node_id_of(&ancestor)
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        match (self.element(node), self.element(ancestor)) {
            (Some(node), Some(ancestor)) => {
                node != ancestor && ancestor.contains(Some(node.as_ref()))
            }
            _ => false,
        }
    }

    fn property(&self, node: NodeId, name: &str) -> Option<String> {
        let element = self.element(node)?;
        let style = self
            .window
            .as_ref()?
            .get_computed_style(element)
            .ok()
            .flatten()?;
        style
            .get_property_value(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    fn set_property(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(element) = self.element(node) else { return };
        if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property(name, value);
        }
    }

    fn bounds(&self, node: NodeId) -> Option<PixelRect> {
        let element = self.element(node)?;
        if !element.is_connected() {
            return None;
        }
        let rect = element.get_bounding_client_rect();
        Some(PixelRect::new(rect.x(), rect.y(), rect.width(), rect.height()))
    }

    fn caption_of(&self, node: NodeId) -> Option<NodeId> {
        let sibling = self.element(node)?.next_element_sibling()?;
        if !sibling.tag_name().eq_ignore_ascii_case(CAPTION_TAG) {
            return None;
        }
        self.node_id_of(&sibling)
    }

    fn set_visual_state(&mut self, node: NodeId, state: VisualState) {
        let Some(element) = self.element(node) else { return };
        let classes = element.class_list();
        let _ = classes.remove_2(VISUAL_CLASS_HOVERED, VISUAL_CLASS_MANIPULATING);
        let class = match state {
            VisualState::Idle => return,
            VisualState::Hovered => VISUAL_CLASS_HOVERED,
            VisualState::Manipulating => VISUAL_CLASS_MANIPULATING,
        };
        let _ = classes.add_1(class);
    }
}
