//! Story content and the graph it lives in
//!
//! - `graph`: the node arena, choices, and traversal helpers
//! - `content`: the built-in story, "But I have to try"

pub mod content;
pub mod graph;

pub use content::build_story;
pub use graph::{NodeId, NodeKind, StoryError, StoryGraph};

/// A finished graph together with the node play starts (and restarts) from
#[derive(Debug, Clone)]
pub struct Story {
    pub graph: StoryGraph,
    pub start: NodeId,
}
