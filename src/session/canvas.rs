//! Host canvas abstraction and an in-memory implementation

use std::collections::HashMap;

use log::debug;

use crate::io::error::{MosaicError, Result};
use crate::layout::MosaicLayout;

/// Identifier of a node attached to a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Host application surface receiving generated mosaics
///
/// Implementations wrap whatever document model the host exposes. The session
/// controller only relies on these operations.
pub trait Canvas {
    /// Attach a layout to the current page and return its node identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the new node
    fn attach(&mut self, layout: MosaicLayout) -> Result<NodeId>;

    /// Whether a node is still present
    fn contains(&self, id: NodeId) -> bool;

    /// Remove a node
    ///
    /// # Errors
    ///
    /// Returns `MosaicError::ArtifactLookup` if the node no longer exists
    fn remove(&mut self, id: NodeId) -> Result<()>;

    /// Scroll the node into view and make it the only selection
    ///
    /// # Errors
    ///
    /// Returns `MosaicError::ArtifactLookup` if the node does not exist
    fn focus(&mut self, id: NodeId) -> Result<()>;

    /// Show a short message to the user
    fn notify(&mut self, message: &str);
}

/// Canvas kept entirely in memory
///
/// Tracks page order, selection, the focused node and every notification,
/// which makes it suitable for the command-line tool and for tests.
#[derive(Debug, Default)]
pub struct MemoryCanvas {
    nodes: HashMap<NodeId, MosaicLayout>,
    page: Vec<NodeId>,
    selection: Vec<NodeId>,
    viewport_focus: Option<NodeId>,
    notifications: Vec<String>,
    next_id: u64,
}

impl MemoryCanvas {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout stored under `id`
    pub fn node(&self, id: NodeId) -> Option<&MosaicLayout> {
        self.nodes.get(&id)
    }

    /// Nodes on the page in insertion order
    pub fn page(&self) -> &[NodeId] {
        &self.page
    }

    /// Currently selected nodes
    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    /// Node the viewport was last scrolled to
    pub const fn viewport_focus(&self) -> Option<NodeId> {
        self.viewport_focus
    }

    /// Every notification shown so far
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Most recent notification
    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(String::as_str)
    }
}

impl Canvas for MemoryCanvas {
    fn attach(&mut self, layout: MosaicLayout) -> Result<NodeId> {
        self.next_id += 1;
        let id = NodeId(self.next_id);
        debug!(
            "attaching node {} ({}x{}, {} cells)",
            id.0,
            layout.width,
            layout.height,
            layout.cells.len()
        );
        self.nodes.insert(id, layout);
        self.page.push(id);
        Ok(id)
    }

    fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn remove(&mut self, id: NodeId) -> Result<()> {
        if self.nodes.remove(&id).is_none() {
            return Err(MosaicError::ArtifactLookup { id: id.0 });
        }
        self.page.retain(|node| *node != id);
        self.selection.retain(|node| *node != id);
        if self.viewport_focus == Some(id) {
            self.viewport_focus = None;
        }
        debug!("removed node {}", id.0);
        Ok(())
    }

    fn focus(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Err(MosaicError::ArtifactLookup { id: id.0 });
        }
        self.viewport_focus = Some(id);
        self.selection = vec![id];
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
