//! Story graph storage and traversal
//!
//! Nodes live in an arena and reference each other by [`NodeId`]. The graph
//! is not a tree: a node may be the target of several choices and may point
//! back at itself or at an earlier node, so nothing owns a node except the
//! arena.

use crate::assets::ImageId;
use std::fmt;
use thiserror::Error;

/// Stable index of a node inside its [`StoryGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// A choice referenced a node this graph never issued
    #[error("unknown story node {0}")]
    UnknownNode(NodeId),
}

/// A labelled edge to another node
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub description: String,
    pub target: NodeId,
}

impl Choice {
    /// The text shown on the choice button: `"<label>: <description>"`
    pub fn composed_label(&self) -> String {
        format!("{}: {}", self.label, self.description)
    }
}

/// Whether a node continues the story or ends it
///
/// Derived from the choice count: a node with no choices is an ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Branching,
    Terminal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoryNode {
    pub text: String,
    pub choices: Vec<Choice>,
    pub image: Option<ImageId>,
}

impl StoryNode {
    pub fn kind(&self) -> NodeKind {
        if self.choices.is_empty() {
            NodeKind::Terminal
        } else {
            NodeKind::Branching
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind() == NodeKind::Terminal
    }
}

/// Append-only arena of story nodes
///
/// Nodes are created first with [`add_node`](Self::add_node) and linked
/// afterwards with [`add_choice`](Self::add_choice), which lets a node point
/// at nodes created after it. Choices keep insertion order, which is also
/// their display and hit-test order.
#[derive(Debug, Clone, Default)]
pub struct StoryGraph {
    nodes: Vec<StoryNode>,
}

impl StoryGraph {
    pub fn new() -> Self {
        StoryGraph { nodes: Vec::new() }
    }

    /// Adds a node with no choices and returns its id
    pub fn add_node(&mut self, text: impl Into<String>, image: Option<ImageId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(StoryNode {
            text: text.into(),
            choices: Vec::new(),
            image,
        });
        id
    }

    /// Appends a choice from `from` to `target`
    ///
    /// Returns an error only if either id wasn't issued by this graph.
    pub fn add_choice(
        &mut self,
        from: NodeId,
        label: impl Into<String>,
        description: impl Into<String>,
        target: NodeId,
    ) -> Result<(), StoryError> {
        if !self.contains(target) {
            return Err(StoryError::UnknownNode(target));
        }

        let node = self
            .nodes
            .get_mut(from.0)
            .ok_or(StoryError::UnknownNode(from))?;

        node.choices.push(Choice {
            label: label.into(),
            description: description.into(),
            target,
        });
        Ok(())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Gets a node by id
    ///
    /// Ids are only ever issued by `add_node`, so lookups from ids held by
    /// the game can't miss.
    pub fn node(&self, id: NodeId) -> &StoryNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&StoryNode> {
        self.nodes.get(id.0)
    }

    pub fn choices(&self, id: NodeId) -> &[Choice] {
        &self.node(id).choices
    }

    pub fn node_kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind()
    }

    /// Follows choice `index` out of `id`, if it exists
    pub fn choice_target(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.get(id)?.choices.get(index).map(|choice| choice.target)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// All ending nodes, in creation order
    pub fn terminal_nodes(&self) -> Vec<NodeId> {
        self.node_ids()
            .filter(|&id| self.node_kind(id) == NodeKind::Terminal)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_graph() -> (StoryGraph, NodeId, NodeId) {
        let mut graph = StoryGraph::new();
        let start = graph.add_node("start", Some(ImageId(0)));
        let end = graph.add_node("end", None);
        graph.add_choice(start, "Go", "Walk on", end).unwrap();
        (graph, start, end)
    }

    #[test]
    fn test_new_node_is_terminal() {
        let mut graph = StoryGraph::new();
        let id = graph.add_node("alone", None);

        assert_eq!(graph.node_kind(id), NodeKind::Terminal);
        assert!(graph.node(id).is_terminal());
    }

    #[test]
    fn test_terminal_iff_no_choices() {
        let (graph, start, end) = two_node_graph();

        for id in graph.node_ids() {
            assert_eq!(
                graph.choices(id).is_empty(),
                graph.node_kind(id) == NodeKind::Terminal
            );
        }
        assert_eq!(graph.node_kind(start), NodeKind::Branching);
        assert_eq!(graph.terminal_nodes(), vec![end]);
    }

    #[test]
    fn test_choices_keep_insertion_order() {
        let mut graph = StoryGraph::new();
        let hub = graph.add_node("hub", None);
        let a = graph.add_node("a", None);
        let b = graph.add_node("b", None);
        graph.add_choice(hub, "First", "to a", a).unwrap();
        graph.add_choice(hub, "Second", "to b", b).unwrap();
        graph.add_choice(hub, "Third", "to a again", a).unwrap();

        let labels: Vec<&str> = graph.choices(hub).iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second", "Third"]);
        assert_eq!(graph.choice_target(hub, 1), Some(b));
        assert_eq!(graph.choice_target(hub, 2), Some(a));
        assert_eq!(graph.choice_target(hub, 3), None);
    }

    #[test]
    fn test_cycles_and_self_loops_allowed() {
        let mut graph = StoryGraph::new();
        let start = graph.add_node("docks", None);
        let turn = graph.add_node("turn", None);
        graph.add_choice(start, "Look", "around", turn).unwrap();
        graph.add_choice(turn, "Look back", "still watching", start).unwrap();
        graph.add_choice(turn, "Wait", "stay put", turn).unwrap();

        assert_eq!(graph.choice_target(turn, 0), Some(start));
        assert_eq!(graph.choice_target(turn, 1), Some(turn));
        assert!(graph.terminal_nodes().is_empty());
    }

    #[test]
    fn test_unknown_target_rejected() {
        let (mut graph, start, _) = two_node_graph();

        let result = graph.add_choice(start, "Nowhere", "broken", NodeId(99));
        assert_eq!(result, Err(StoryError::UnknownNode(NodeId(99))));
        // Failed link leaves the node untouched
        assert_eq!(graph.choices(start).len(), 1);
    }

    #[test]
    fn test_unknown_source_rejected() {
        let (mut graph, _, end) = two_node_graph();

        let result = graph.add_choice(NodeId(5), "From", "nowhere", end);
        assert_eq!(result, Err(StoryError::UnknownNode(NodeId(5))));
    }

    #[test]
    fn test_composed_label() {
        let (graph, start, _) = two_node_graph();
        assert_eq!(graph.choices(start)[0].composed_label(), "Go: Walk on");
    }

    #[test]
    fn test_image_is_kept_per_node() {
        let (graph, start, end) = two_node_graph();
        assert_eq!(graph.node(start).image, Some(ImageId(0)));
        assert_eq!(graph.node(end).image, None);
    }
}
