//! Bind-Pose Scene Graph
//!
//! The node tree supplied by the import collaborator:
//! - [`Hierarchy`]: arena of nodes addressed by [`NodeHandle`]
//! - [`HierarchyNode`]: name, bind-pose local transform and ordered children

pub mod hierarchy;

pub use hierarchy::{Hierarchy, HierarchyNode, NodeHandle};
