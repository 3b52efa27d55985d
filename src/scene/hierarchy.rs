use glam::Mat4;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::errors::{AnimationError, Result};
use crate::import::NodeImport;

new_key_type! {
    pub struct NodeHandle;
}

/// One node of the imported scene graph.
///
/// Holds only what evaluation reads every frame: the name used to match
/// animation channels and bones, and the bind-pose transform relative to the
/// parent.
#[derive(Debug, Clone)]
pub struct HierarchyNode {
    pub name: String,
    /// Bind-pose transform relative to the parent node.
    pub local_transform: Mat4,
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: SmallVec<[NodeHandle; 4]>,
}

impl HierarchyNode {
    #[must_use]
    pub fn new(name: impl Into<String>, local_transform: Mat4) -> Self {
        Self {
            name: name.into(),
            local_transform,
            parent: None,
            children: SmallVec::new(),
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Child handles in import order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}

/// The bind-pose node tree, stored as a flat arena with parent/child handles.
///
/// Built once at load time and only read afterwards. Because children are
/// only ever added under an existing node, the tree cannot contain cycles.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    nodes: SlotMap<NodeHandle, HierarchyNode>,
    root: NodeHandle,
}

impl Hierarchy {
    #[must_use]
    pub fn new(root_name: impl Into<String>, root_transform: Mat4) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(HierarchyNode::new(root_name, root_transform));
        Self { nodes, root }
    }

    /// Mirrors an imported node tree, preserving child order.
    #[must_use]
    pub fn from_import(root: &NodeImport) -> Self {
        let mut hierarchy = Self::new(root.name.clone(), root.transform);
        let mut pending: Vec<(NodeHandle, &NodeImport)> = vec![(hierarchy.root, root)];

        while let Some((handle, import)) = pending.pop() {
            for child in &import.children {
                let child_handle = hierarchy.insert_child(handle, child.name.clone(), child.transform);
                pending.push((child_handle, child));
            }
        }

        hierarchy
    }

    /// Appends a new child under `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeHandle,
        name: impl Into<String>,
        local_transform: Mat4,
    ) -> Result<NodeHandle> {
        if !self.nodes.contains_key(parent) {
            log::error!("Parent node not found while building hierarchy");
            return Err(AnimationError::InvalidNode(format!("{parent:?}")));
        }
        Ok(self.insert_child(parent, name, local_transform))
    }

    fn insert_child(&mut self, parent: NodeHandle, name: impl Into<String>, local_transform: Mat4) -> NodeHandle {
        let mut node = HierarchyNode::new(name, local_transform);
        node.parent = Some(parent);
        let handle = self.nodes.insert(node);
        self.nodes[parent].children.push(handle);
        handle
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: NodeHandle) -> Option<&HierarchyNode> {
        self.nodes.get(handle)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a hierarchy has at least its root.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first search from the root, children in order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.depth_first().find(|&handle| self.nodes[handle].name == name)
    }

    /// Iterates handles in pre-order (parent before children, children in
    /// import order), the order evaluation visits them.
    pub fn depth_first(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        let mut stack = vec![self.root];
        std::iter::from_fn(move || {
            let handle = stack.pop()?;
            if let Some(node) = self.nodes.get(handle) {
                stack.extend(node.children.iter().rev().copied());
            }
            Some(handle)
        })
    }

    /// Bind-pose global transform of `handle`, composed from the root down.
    #[must_use]
    pub fn bind_global_transform(&self, handle: NodeHandle) -> Option<Mat4> {
        let mut node = self.nodes.get(handle)?;
        let mut global = node.local_transform;
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            global = node.local_transform * global;
        }
        Some(global)
    }
}
