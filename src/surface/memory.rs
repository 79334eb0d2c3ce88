//! In-memory document model.
//!
//! A small node tree implementing [`Surface`] without a browser. The test
//! suite drives the engine through it, and headless build tooling can use
//! it to compute placements outside the page.

use super::Surface;
use crate::types::{BlockKind, NodeId, PixelRect, VisualState};
use std::collections::HashMap;

/// Structural role of a node in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    /// A modular-grid container.
    GridContainer,
    /// A placeable block of the given category.
    Block(BlockKind),
    /// A caption sibling.
    Caption,
    /// Anything else (decoration, wrappers).
    Other,
}

#[derive(Debug)]
struct MemoryNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    role: NodeRole,
    properties: HashMap<String, String>,
    bounds: Option<PixelRect>,
    visual: VisualState,
    attached: bool,
}

impl MemoryNode {
    fn new(parent: Option<NodeId>, role: NodeRole, bounds: Option<PixelRect>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            role,
            properties: HashMap::new(),
            bounds,
            visual: VisualState::Idle,
            attached: true,
        }
    }
}

/// An in-memory [`Surface`].
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<MemoryNode>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, node: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(node.0 as usize)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut MemoryNode> {
        self.nodes.get_mut(node.0 as usize)
    }

    fn push(&mut self, node: MemoryNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(node);
        id
    }

    /// Add a node with an explicit role and optional parent.
    pub fn add_node(
        &mut self,
        parent: Option<NodeId>,
        role: NodeRole,
        bounds: Option<PixelRect>,
    ) -> NodeId {
        let id = self.push(MemoryNode::new(parent, role, bounds));
        if let Some(parent) = parent {
            if let Some(node) = self.get_mut(parent) {
                node.children.push(id);
            }
        }
        id
    }

    /// Add a grid container with the given bounds.
    pub fn add_container(&mut self, bounds: PixelRect) -> NodeId {
        self.add_node(None, NodeRole::GridContainer, Some(bounds))
    }

    /// Add a block of `kind` inside `container`.
    pub fn add_block(&mut self, container: NodeId, kind: BlockKind, bounds: PixelRect) -> NodeId {
        self.add_node(Some(container), NodeRole::Block(kind), Some(bounds))
    }

    /// Add a caption immediately after `block` among its parent's children.
    ///
    /// Returns `None` if the block is unknown or parentless.
    pub fn add_caption(&mut self, block: NodeId) -> Option<NodeId> {
        let parent = self.get(block)?.parent?;
        let id = self.push(MemoryNode::new(Some(parent), NodeRole::Caption, None));
        let siblings = &mut self.get_mut(parent)?.children;
        match siblings.iter().position(|&child| child == block) {
            Some(index) => siblings.insert(index + 1, id),
            None => siblings.push(id),
        }
        Some(id)
    }

    /// Remove a node (and its subtree) from the document.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.get(node).and_then(|n| n.parent) {
            if let Some(parent_node) = self.get_mut(parent) {
                parent_node.children.retain(|&child| child != node);
            }
        }
        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            if let Some(entry) = self.get_mut(current) {
                entry.attached = false;
                pending.extend(entry.children.iter().copied());
            }
        }
    }

    pub fn set_bounds(&mut self, node: NodeId, bounds: PixelRect) {
        if let Some(entry) = self.get_mut(node) {
            entry.bounds = Some(bounds);
        }
    }

    /// The visual state last applied to the node.
    pub fn visual_state(&self, node: NodeId) -> VisualState {
        self.get(node).map(|entry| entry.visual).unwrap_or_default()
    }

    /// Raw property value, for assertions.
    pub fn raw_property(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node)?.properties.get(name).map(String::as_str)
    }
}

impl Surface for MemorySurface {
    fn is_attached(&self, node: NodeId) -> bool {
        self.get(node).map(|entry| entry.attached).unwrap_or(false)
    }

    fn block_kind(&self, node: NodeId) -> Option<BlockKind> {
        match self.get(node)?.role {
            NodeRole::Block(kind) => Some(kind),
            _ => None,
        }
    }

    fn grid_container(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.get(node)?.parent;
        while let Some(id) = current {
            let entry = self.get(id)?;
            if entry.role == NodeRole::GridContainer {
                return Some(id);
            }
            current = entry.parent;
        }
        None
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.get(node).and_then(|entry| entry.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|entry| entry.parent);
        }
        false
    }

    fn property(&self, node: NodeId, name: &str) -> Option<String> {
        self.get(node)?.properties.get(name).cloned()
    }

    fn set_property(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(entry) = self.get_mut(node) {
            if entry.attached {
                entry.properties.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn bounds(&self, node: NodeId) -> Option<PixelRect> {
        let entry = self.get(node)?;
        if !entry.attached {
            return None;
        }
        entry.bounds
    }

    fn caption_of(&self, node: NodeId) -> Option<NodeId> {
        let entry = self.get(node)?;
        if !entry.attached {
            return None;
        }
        let siblings = &self.get(entry.parent?)?.children;
        let index = siblings.iter().position(|&child| child == node)?;
        let next = *siblings.get(index + 1)?;
        (self.get(next)?.role == NodeRole::Caption).then_some(next)
    }

    fn set_visual_state(&mut self, node: NodeId, state: VisualState) {
        if let Some(entry) = self.get_mut(node) {
            entry.visual = state;
        }
    }
}
