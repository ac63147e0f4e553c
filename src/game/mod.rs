// Game module - per-frame orchestration of the story screen
//
// This module contains:
// - controller.rs: GameController (layout, region rebuild, input resolution)
// - session.rs: navigation state (current/start node, displayed image)
// - frame.rs: positioned output of one layout pass
// - rendering.rs: SDL2 drawing of a frame and cursor feedback

pub mod controller;
pub mod frame;
pub mod rendering;
pub mod session;

pub use controller::{FrameOutcome, GameController};
pub use rendering::{render_frame, CursorSet, Palette};
