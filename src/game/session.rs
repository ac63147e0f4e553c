// Navigation state for one play-through
//
// The session is the only mutable game state. It is changed exclusively by
// applying a clicked region's action, inside the frame that saw the click.

use crate::assets::ImageId;
use crate::hit_region::RegionAction;
use crate::story::{NodeId, NodeKind, StoryGraph};

/// What applying an action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Followed a choice to this node
    Moved(NodeId),
    /// Back at the start node
    Restarted,
    /// The player asked to leave
    Quit,
    /// The action didn't match the current node (stale choice index)
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current: NodeId,
    start: NodeId,
    displayed_image: Option<ImageId>,
}

impl Session {
    /// Starts a session at `start`, showing its illustration
    pub fn new(graph: &StoryGraph, start: NodeId) -> Self {
        Session {
            current: start,
            start,
            displayed_image: graph.node(start).image,
        }
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn displayed_image(&self) -> Option<ImageId> {
        self.displayed_image
    }

    pub fn is_ending(&self, graph: &StoryGraph) -> bool {
        graph.node_kind(self.current) == NodeKind::Terminal
    }

    pub fn apply(&mut self, action: RegionAction, graph: &StoryGraph) -> Transition {
        match action {
            RegionAction::Quit => Transition::Quit,
            RegionAction::Restart => {
                self.restart(graph);
                Transition::Restarted
            }
            RegionAction::Navigate(index) => match graph.choice_target(self.current, index) {
                Some(target) => {
                    self.move_to(graph, target);
                    Transition::Moved(target)
                }
                None => {
                    log::warn!("Choice {} doesn't exist on node {}", index, self.current);
                    Transition::Ignored
                }
            },
        }
    }

    pub fn restart(&mut self, graph: &StoryGraph) {
        log::debug!("Restarting at {}", self.start);
        self.current = self.start;
        self.displayed_image = graph.node(self.start).image;
    }

    /// Moves to `target`; its image replaces the old one, or clears it
    fn move_to(&mut self, graph: &StoryGraph, target: NodeId) {
        log::debug!("Moving {} -> {}", self.current, target);
        self.current = target;
        self.displayed_image = graph.node(target).image;
    }
}
